// ============================================================================
// RECORDS LIST
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{on_click, ElementBuilder};
use crate::models::{Category, ReceiptRecord};
use crate::state::AppState;
use crate::utils::format::format_currency;
use crate::viewmodels::actions;

/// Renders the loaded records. `selectable` adds the dashboard's
/// export checkbox and delete button.
pub fn render_records_list(state: &AppState, selectable: bool) -> Result<Element, JsValue> {
    let records = state.records.borrow().clone();

    if let Some(error) = records.error() {
        return Ok(ElementBuilder::new("p")?
            .class("list-error")
            .attr("role", "alert")?
            .text(error)
            .build());
    }
    if records.is_loading() && records.items().is_empty() {
        return Ok(ElementBuilder::new("p")?.class("list-status").text("Loading...").build());
    }
    if records.is_empty() {
        return Ok(ElementBuilder::new("p")?
            .class("list-empty")
            .text("No scanned receipts found.")
            .build());
    }

    let mut rows = Vec::with_capacity(records.items().len());
    for record in records.items() {
        rows.push(render_row(state, record, selectable, records.is_selected(record.id))?);
    }

    Ok(ElementBuilder::new("ul")?
        .class("records-list")
        .children(rows)?
        .build())
}

fn render_row(
    state: &AppState,
    record: &ReceiptRecord,
    selectable: bool,
    selected: bool,
) -> Result<Element, JsValue> {
    let category = Category::parse(&record.category)
        .map(|c| c.label().to_string())
        .unwrap_or_else(|| record.category.clone());
    let details = ElementBuilder::new("div")?
        .class("record-details")
        .child(
            ElementBuilder::new("span")?
                .class("record-store")
                .text(record.display_name())
                .build(),
        )?
        .child(
            ElementBuilder::new("span")?
                .class("record-meta")
                .text(&format!("{} • {}", record.date, category))
                .build(),
        )?
        .build();

    let amount = ElementBuilder::new("span")?
        .class("record-amount")
        .text(&format_currency(record.total_amount))
        .build();

    let class = if selected { "record-row selected" } else { "record-row" };
    let mut row = ElementBuilder::new("li")?.class(class);

    if selectable {
        let checkbox = ElementBuilder::new("input")?
            .class("record-select")
            .attr("type", "checkbox")?
            .attr("aria-label", &format!("Select {}", record.display_name()))?
            .flag("checked", selected)?
            .build();
        let id = record.id;
        let state_for_toggle = state.clone();
        on_click(&checkbox, move |_| actions::toggle_selection(&state_for_toggle, id))?;
        row = row.child(checkbox)?;
    }

    row = row.child(details)?.child(amount)?;

    if selectable {
        let delete = ElementBuilder::new("button")?
            .class("btn btn-danger btn-small")
            .attr("type", "button")?
            .attr("title", "Delete receipt")?
            .text("🗑️")
            .build();
        let id = record.id;
        let state_for_delete = state.clone();
        on_click(&delete, move |_| actions::delete_record(&state_for_delete, id))?;
        row = row.child(delete)?;
    }

    Ok(row.build())
}
