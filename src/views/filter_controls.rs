// ============================================================================
// FILTER CONTROLS - Date / month / year / period pickers
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{on_change, ElementBuilder};
use crate::models::RecordFilter;
use crate::state::AppState;
use crate::viewmodels::actions;

/// Inputs for the active filter; `None` for screens without a picker
pub fn render_filter_controls(state: &AppState) -> Result<Option<Element>, JsValue> {
    let filter = state.records.borrow().filter();

    let inputs = match filter {
        RecordFilter::All | RecordFilter::Today => return Ok(None),
        RecordFilter::Date(_) => vec![picker(state, "Date", "date", &filter.input_value(), false)?],
        RecordFilter::Month { .. } => {
            vec![picker(state, "Month", "month", &filter.input_value(), false)?]
        }
        RecordFilter::Year(_) => vec![picker(state, "Year", "number", &filter.input_value(), false)?],
        RecordFilter::Range { end, .. } => vec![
            picker(state, "From", "date", &filter.input_value(), false)?,
            picker(state, "To", "date", &end.format("%Y-%m-%d").to_string(), true)?,
        ],
    };

    Ok(Some(
        ElementBuilder::new("div")?
            .class("filter-controls")
            .children(inputs)?
            .build(),
    ))
}

/// One labelled input. `secondary` marks the end date of a period.
fn picker(
    state: &AppState,
    label: &str,
    input_type: &str,
    value: &str,
    secondary: bool,
) -> Result<Element, JsValue> {
    let mut input = ElementBuilder::new("input")?
        .class("input")
        .attr("type", input_type)?
        .attr("value", value)?;
    if input_type == "number" {
        input = input.attr("min", "2000")?.attr("max", "2100")?;
    }
    let input = input.build();

    let state_for_input = state.clone();
    on_change(&input, move |raw| {
        let current = state_for_input.records.borrow().filter();
        let next = if secondary {
            current.with_input("", Some(raw.as_str()))
        } else {
            current.with_input(&raw, None)
        };
        match next {
            Some(filter) => actions::change_filter(&state_for_input, filter),
            None => log::warn!("⚠️ [FILTER] Ignoring invalid input '{}'", raw),
        }
    })?;

    Ok(ElementBuilder::new("label")?
        .class("filter-field")
        .child(ElementBuilder::new("span")?.text(label).build())?
        .child(input)?
        .build())
}
