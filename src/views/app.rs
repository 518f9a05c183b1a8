// ============================================================================
// APP VIEW - Layout and routing
// ============================================================================

use chrono::Datelike;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::state::{AppState, Route};
use crate::utils::constants::APP_NAME;
use crate::utils::format::local_today;
use crate::views::login::render_login;
use crate::views::nav::render_nav;
use crate::views::records_view::render_records_view;
use crate::views::theme_toggle::apply_theme;

pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    apply_theme(state.theme.current())?;

    if state.current_route() == Route::Login {
        return render_login(state);
    }

    let footer = ElementBuilder::new("footer")?
        .class("footer")
        .text(&format!("© {} {} App", local_today().year(), APP_NAME))
        .build();

    Ok(ElementBuilder::new("div")?
        .class("layout")
        .child(render_nav(state)?)?
        .child(render_records_view(state)?)?
        .child(footer)?
        .build())
}
