// ============================================================================
// VERIFY FORM - Edit the scanned draft before saving
// ============================================================================
// Text fields write straight into the draft without a re-render so the
// caret stays put; the amount is validated when the field is committed.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{on_change, on_click, on_input, on_submit, ElementBuilder};
use crate::models::{Category, ReceiptDraft};
use crate::state::AppState;
use crate::utils::format::format_amount;
use crate::viewmodels::{actions, DraftField};

pub fn render_verify_form(state: &AppState) -> Result<Option<Element>, JsValue> {
    let (draft, saving, error) = {
        let workflow = state.draft.borrow();
        match workflow.draft() {
            Some(draft) => (
                draft.clone(),
                workflow.is_saving(),
                workflow.inline_error().map(str::to_string),
            ),
            None => return Ok(None),
        }
    };

    let store = text_field(state, "Store", "text", DraftField::StoreName, &draft.store_name)?;
    let date = text_field(state, "Date", "date", DraftField::Date, &draft.date)?;
    let amount = amount_field(state, &draft)?;
    let category = category_field(state, &draft)?;

    let save = ElementBuilder::new("button")?
        .class("btn btn-primary")
        .attr("type", "submit")?
        .flag("disabled", saving)?
        .text(if saving { "Saving..." } else { "Save Receipt" })
        .build();

    let cancel = ElementBuilder::new("button")?
        .class("btn btn-outline")
        .attr("type", "button")?
        .flag("disabled", saving)?
        .text("Cancel")
        .build();
    {
        let state = state.clone();
        on_click(&cancel, move |_| actions::cancel_draft(&state))?;
    }

    let mut form = ElementBuilder::new("form")?
        .class("verify-form")
        .child(ElementBuilder::new("h2")?.text("Verify Receipt").build())?
        .child(store)?
        .child(date)?
        .child(amount)?
        .child(category)?;
    if let Some(error) = error {
        form = form.child(
            ElementBuilder::new("p")?
                .class("form-error")
                .attr("role", "alert")?
                .text(&error)
                .build(),
        )?;
    }
    let form = form
        .child(
            ElementBuilder::new("div")?
                .class("form-actions")
                .child(cancel)?
                .child(save)?
                .build(),
        )?
        .build();
    {
        let state = state.clone();
        on_submit(&form, move || actions::save_draft(&state))?;
    }

    Ok(Some(form))
}

fn labelled(label: &str, input: Element) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("label")?
        .class("form-field")
        .child(ElementBuilder::new("span")?.text(label).build())?
        .child(input)?
        .build())
}

fn text_field(
    state: &AppState,
    label: &str,
    input_type: &str,
    field: DraftField,
    value: &str,
) -> Result<Element, JsValue> {
    let input = ElementBuilder::new("input")?
        .class("input")
        .attr("type", input_type)?
        .attr("name", field.name())?
        .attr("value", value)?
        .build();

    let draft = state.draft.clone();
    on_input(&input, move |raw| draft.borrow_mut().update_field(field, &raw))?;
    labelled(label, input)
}

fn amount_field(state: &AppState, draft: &ReceiptDraft) -> Result<Element, JsValue> {
    let input = ElementBuilder::new("input")?
        .class("input")
        .attr("type", "number")?
        .attr("step", "0.01")?
        .attr("name", DraftField::TotalAmount.name())?
        .attr("value", &format_amount(draft.total_amount))?
        .build();

    let state = state.clone();
    on_change(&input, move |raw| {
        state.draft.borrow_mut().update_field(DraftField::TotalAmount, &raw);
        state.notify_subscribers();
    })?;
    labelled("Total", input)
}

fn category_field(state: &AppState, draft: &ReceiptDraft) -> Result<Element, JsValue> {
    let selected = draft.category();
    let mut options = Vec::with_capacity(Category::ALL.len());
    for category in Category::ALL {
        options.push(
            ElementBuilder::new("option")?
                .attr("value", category.as_str())?
                .flag("selected", category == selected)?
                .text(category.label())
                .build(),
        );
    }

    let select = ElementBuilder::new("select")?
        .class("input")
        .attr("name", DraftField::Category.name())?
        .children(options)?
        .build();

    let draft = state.draft.clone();
    on_change(&select, move |raw| {
        draft.borrow_mut().update_field(DraftField::Category, &raw)
    })?;
    labelled("Category", select)
}
