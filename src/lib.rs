// ============================================================================
// iSAVE RECEIPTS - Rust/WASM front-end (MVVM)
// ============================================================================
// - Views: DOM rendering only
// - ViewModels: screen state and the scan -> verify -> save workflow
// - Services: HTTP and downloads
// - State: shared Rc<RefCell> state with change notifications
// - Models: backend payloads
// ============================================================================

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;

mod app;
mod dom;
mod views;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_logger::Config;

use crate::app::App;
use crate::config::CONFIG;

thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(Config::new(CONFIG.log_level()));
    log::info!(
        "🚀 iSave receipts ({}) -> {}",
        CONFIG.environment,
        CONFIG.api_base_url()
    );

    let app = App::new()?;
    APP.with(|cell| *cell.borrow_mut() = Some(app));

    // Registered once; the hash drives which screen is shown
    dom::on_window("hashchange", sync_route)?;

    sync_route();
    rerender_app();
    Ok(())
}

fn sync_route() {
    APP.with(|cell| {
        if let Some(app) = cell.borrow().as_ref() {
            app.sync_route();
        }
    });
}

/// Full re-render of the app
pub fn rerender_app() {
    APP.with(|cell| match cell.borrow().as_ref() {
        Some(app) => {
            if let Err(e) = app.render() {
                log::error!("❌ [RERENDER] {:?}", e);
            }
        }
        None => log::warn!("⚠️ [RERENDER] App is not initialised"),
    });
}
