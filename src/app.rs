// ============================================================================
// APP - Root component: owns the state and redraws #app
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, get_element_by_id, location_hash};
use crate::state::{AppState, Route};
use crate::viewmodels::actions;
use crate::views::render_app;

pub struct App {
    state: AppState,
    root: Element,
}

impl App {
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app").ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let state = AppState::browser();

        // Several notifications in one tick collapse into a single redraw
        let pending = Rc::new(Cell::new(false));
        state.subscribe_to_changes(move || {
            if pending.replace(true) {
                return;
            }
            let pending = pending.clone();
            Timeout::new(0, move || {
                pending.set(false);
                crate::rerender_app();
            })
            .forget();
        });

        Ok(Self { state, root })
    }

    /// Routes to whatever the address bar points at
    pub fn sync_route(&self) {
        let requested = Route::from_hash(&location_hash());
        actions::navigate(&self.state, requested);
    }

    /// Full redraw of #app
    pub fn render(&self) -> Result<(), JsValue> {
        let view = render_app(&self.state)?;
        self.root.set_inner_html("");
        append_child(&self.root, &view)?;
        log::debug!("[APP] Rendered {:?}", self.state.current_route());
        Ok(())
    }
}
