use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{document_element, on_click, toggle_class, ElementBuilder};
use crate::state::{AppState, Theme};
use crate::viewmodels::actions;

/// Puts the `dark` class and `color-scheme` on `<html>`
pub fn apply_theme(theme: Theme) -> Result<(), JsValue> {
    let root = document_element().ok_or_else(|| JsValue::from_str("No document element"))?;
    toggle_class(&root, "dark", theme == Theme::Dark)?;
    root.set_attribute("style", &format!("color-scheme: {}", theme.as_str()))
}

pub fn render_theme_toggle(state: &AppState) -> Result<Element, JsValue> {
    let theme = state.theme.current();
    let button = ElementBuilder::new("button")?
        .class("theme-toggle")
        .attr("type", "button")?
        .attr("title", theme.toggle_title())?
        .text(theme.toggle_icon())
        .build();

    let state = state.clone();
    on_click(&button, move |_| actions::toggle_theme(&state))?;
    Ok(button)
}
