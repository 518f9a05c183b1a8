// ============================================================================
// LOGIN VIEW
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{on_input, on_submit, ElementBuilder};
use crate::state::AppState;
use crate::utils::constants::APP_NAME;
use crate::viewmodels::actions;
use crate::views::theme_toggle::render_theme_toggle;

pub fn render_login(state: &AppState) -> Result<Element, JsValue> {
    let vm = state.login.borrow().clone();

    let username = ElementBuilder::new("input")?
        .class("input")
        .attr("type", "text")?
        .attr("name", "username")?
        .attr("placeholder", "Username")?
        .attr("autocomplete", "username")?
        .attr("value", &vm.username)?
        .build();
    {
        let login = state.login.clone();
        on_input(&username, move |value| login.borrow_mut().username = value)?;
    }

    let password = ElementBuilder::new("input")?
        .class("input")
        .attr("type", "password")?
        .attr("name", "password")?
        .attr("placeholder", "Password")?
        .attr("autocomplete", "current-password")?
        .attr("value", &vm.password)?
        .build();
    {
        let login = state.login.clone();
        on_input(&password, move |value| login.borrow_mut().password = value)?;
    }

    let submit = ElementBuilder::new("button")?
        .class("btn btn-primary")
        .attr("type", "submit")?
        .flag("disabled", vm.is_submitting())?
        .text(if vm.is_submitting() { "Logging in..." } else { "Login" })
        .build();

    let mut form = ElementBuilder::new("form")?
        .class("login-form")
        .child(username)?
        .child(password)?;
    if let Some(error) = vm.error() {
        form = form.child(
            ElementBuilder::new("p")?
                .class("form-error")
                .attr("role", "alert")?
                .text(error)
                .build(),
        )?;
    }
    let form = form.child(submit)?.build();
    {
        let state = state.clone();
        on_submit(&form, move || actions::login(&state))?;
    }

    let card = ElementBuilder::new("div")?
        .class("login-card")
        .child(ElementBuilder::new("h1")?.class("login-title").text(APP_NAME).build())?
        .child(
            ElementBuilder::new("p")?
                .class("login-subtitle")
                .text("Sign in to track your receipts")
                .build(),
        )?
        .child(form)?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("login-screen")
        .child(render_theme_toggle(state)?)?
        .child(card)?
        .build())
}
