// ============================================================================
// RECORDS VIEW - One screen for dashboard, today, day, month, year, period
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement};

use crate::dom::{on_change, on_click, ElementBuilder};
use crate::state::AppState;
use crate::viewmodels::actions;
use crate::views::filter_controls::render_filter_controls;
use crate::views::records_list::render_records_list;
use crate::views::stats_panel::render_stats_panel;
use crate::views::verify_form::render_verify_form;

pub fn render_records_view(state: &AppState) -> Result<Element, JsValue> {
    let route = state.current_route();
    let dashboard = route.is_dashboard();

    let mut page = ElementBuilder::new("main")?.class("page");

    if dashboard {
        page = page.child(render_dashboard_header(state)?)?;
        if let Some(banner) = render_scan_banner(state)? {
            page = page.child(banner)?;
        }
        if let Some(form) = render_verify_form(state)? {
            page = page.child(form)?;
        }
    } else {
        page = page.child(
            ElementBuilder::new("h1")?
                .class("page-title")
                .text(&format!("{} {}", route.icon(), route.title()))
                .build(),
        )?;
    }

    if let Some(controls) = render_filter_controls(state)? {
        page = page.child(controls)?;
    }
    if let Some(stats) = render_stats_panel(state)? {
        page = page.child(stats)?;
    }

    let mut history = ElementBuilder::new("section")?.class("history");
    if dashboard {
        history = history.child(render_history_toolbar(state)?)?;
    }
    history = history.child(render_records_list(state, dashboard)?)?;

    Ok(page.child(history.build())?.build())
}

fn render_dashboard_header(state: &AppState) -> Result<Element, JsValue> {
    let username = state.session.username().unwrap_or_default();
    let mut greeting = ElementBuilder::new("div")?.class("greeting").child(
        ElementBuilder::new("h1")?
            .class("page-title")
            .text(&format!("Welcome, {} 👋", username))
            .build(),
    )?;
    if state.session.is_staff() {
        greeting = greeting.child(ElementBuilder::new("span")?.class("badge").text("Staff").build())?;
    }

    Ok(ElementBuilder::new("header")?
        .class("dashboard-header")
        .child(greeting.build())?
        .child(render_scan_button(state)?)?
        .build())
}

/// Hidden file input behind a "+ New Receipt" label
fn render_scan_button(state: &AppState) -> Result<Element, JsValue> {
    let (scanning, busy) = {
        let draft = state.draft.borrow();
        (draft.is_scanning(), !draft.is_idle())
    };

    let input = ElementBuilder::new("input")?
        .class("visually-hidden")
        .attr("type", "file")?
        .attr("accept", "image/*")?
        .flag("disabled", busy)?
        .build();
    {
        let state = state.clone();
        let source = input.clone();
        on_change(&input, move |_| {
            let Some(field) = source.dyn_ref::<HtmlInputElement>() else {
                return;
            };
            let file = field.files().and_then(|files| files.get(0));
            field.set_value("");
            if let Some(file) = file {
                actions::scan(&state, file);
            }
        })?;
    }

    let class = if busy { "btn btn-primary disabled" } else { "btn btn-primary" };
    Ok(ElementBuilder::new("label")?
        .class(class)
        .child(input)?
        .child(
            ElementBuilder::new("span")?
                .text(if scanning { "Scanning..." } else { "+ New Receipt" })
                .build(),
        )?
        .build())
}

fn render_scan_banner(state: &AppState) -> Result<Option<Element>, JsValue> {
    let Some(message) = state.draft.borrow().banner().map(str::to_string) else {
        return Ok(None);
    };

    let dismiss = ElementBuilder::new("button")?
        .class("banner-dismiss")
        .attr("type", "button")?
        .attr("aria-label", "Dismiss")?
        .text("✕")
        .build();
    {
        let state = state.clone();
        on_click(&dismiss, move |_| {
            state.draft.borrow_mut().dismiss_banner();
            state.notify_subscribers();
        })?;
    }

    Ok(Some(
        ElementBuilder::new("div")?
            .class("banner banner-error")
            .attr("role", "alert")?
            .child(ElementBuilder::new("span")?.text(&message).build())?
            .child(dismiss)?
            .build(),
    ))
}

fn render_history_toolbar(state: &AppState) -> Result<Element, JsValue> {
    let (label, disabled) = {
        let records = state.records.borrow();
        (
            records.export_label(),
            records.selection().is_empty() || records.is_exporting(),
        )
    };

    let export = ElementBuilder::new("button")?
        .class("btn btn-secondary")
        .attr("type", "button")?
        .flag("disabled", disabled)?
        .text(&label)
        .build();
    {
        let state = state.clone();
        on_click(&export, move |_| actions::export_selection(&state))?;
    }

    Ok(ElementBuilder::new("div")?
        .class("history-toolbar")
        .child(ElementBuilder::new("h2")?.text("Recent Receipts").build())?
        .child(export)?
        .build())
}
