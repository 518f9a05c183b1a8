// ============================================================================
// NAV - Top bar: screens, theme toggle, sign out
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{on_click, ElementBuilder};
use crate::state::{AppState, Route};
use crate::utils::constants::APP_NAME;
use crate::viewmodels::actions;
use crate::views::theme_toggle::render_theme_toggle;

pub fn render_nav(state: &AppState) -> Result<Element, JsValue> {
    let active = state.current_route();

    let brand = ElementBuilder::new("a")?
        .class("nav-brand")
        .attr("href", Route::Dashboard.hash())?
        .text(APP_NAME)
        .build();

    let mut links = Vec::with_capacity(Route::NAV.len());
    for route in Route::NAV {
        let class = if route == active { "nav-link active" } else { "nav-link" };
        links.push(
            ElementBuilder::new("a")?
                .class(class)
                .attr("href", route.hash())?
                .text(&format!("{} {}", route.icon(), route.label()))
                .build(),
        );
    }
    let menu = ElementBuilder::new("div")?
        .class("nav-links")
        .children(links)?
        .build();

    let sign_out = ElementBuilder::new("button")?
        .class("btn btn-outline")
        .attr("type", "button")?
        .text("Sign Out")
        .build();
    {
        let state = state.clone();
        on_click(&sign_out, move |_| actions::logout(&state))?;
    }

    let controls = ElementBuilder::new("div")?
        .class("nav-controls")
        .child(render_theme_toggle(state)?)?
        .child(sign_out)?
        .build();

    Ok(ElementBuilder::new("nav")?
        .class("navbar")
        .child(brand)?
        .child(menu)?
        .child(controls)?
        .build())
}
