// ============================================================================
// VIEWS - DOM rendering only; behaviour lives in the view-models
// ============================================================================

pub mod app;
pub mod filter_controls;
pub mod login;
pub mod nav;
pub mod records_list;
pub mod records_view;
pub mod stats_panel;
pub mod theme_toggle;
pub mod verify_form;

pub use app::render_app;
