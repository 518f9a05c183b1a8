// ============================================================================
// STATS PANEL - Spending donut
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::models::Category;
use crate::state::AppState;
use crate::utils::format::{format_amount, format_currency};

/// `None` when there is nothing to chart
pub fn render_stats_panel(state: &AppState) -> Result<Option<Element>, JsValue> {
    let stats = state.stats.borrow().clone();

    if stats.is_loading() {
        return Ok(Some(
            ElementBuilder::new("section")?
                .class("stats-panel loading")
                .text("Crunching the numbers...")
                .build(),
        ));
    }
    let Some(summary) = stats.summary().filter(|_| stats.is_visible()) else {
        return Ok(None);
    };

    let ring = ElementBuilder::new("div")?
        .class("stats-ring")
        .style(&format!("background: {}", summary.conic_gradient()))?
        .child(
            ElementBuilder::new("div")?
                .class("stats-ring-center")
                .text(&format_currency(summary.total_spent))
                .build(),
        )?
        .build();

    let mut legend = Vec::new();
    for slice in summary.slices() {
        let label = Category::parse(&slice.label)
            .map(|c| c.label().to_string())
            .unwrap_or_else(|| slice.label.clone());
        legend.push(
            ElementBuilder::new("li")?
                .class("legend-item")
                .child(
                    ElementBuilder::new("span")?
                        .class("legend-swatch")
                        .style(&format!("background-color: {}", slice.color))?
                        .build(),
                )?
                .child(ElementBuilder::new("span")?.class("legend-label").text(&label).build())?
                .child(
                    ElementBuilder::new("span")?
                        .class("legend-value")
                        .text(&format!(
                            "{} ({}%)",
                            format_currency(slice.value),
                            format_amount(slice.percent)
                        ))
                        .build(),
                )?
                .build(),
        );
    }

    Ok(Some(
        ElementBuilder::new("section")?
            .class("stats-panel")
            .child(ElementBuilder::new("h2")?.text("Spending by Category").build())?
            .child(ring)?
            .child(ElementBuilder::new("ul")?.class("stats-legend").children(legend)?.build())?
            .build(),
    ))
}
