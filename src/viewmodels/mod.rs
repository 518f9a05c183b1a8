// ============================================================================
// VIEWMODELS - Screen logic, no DOM
// ============================================================================

pub mod actions;
pub mod draft_viewmodel;
pub mod login_viewmodel;
pub mod records_viewmodel;
pub mod session_viewmodel;
pub mod stats_viewmodel;

pub use draft_viewmodel::{DraftField, DraftWorkflow, SaveOutcome};
pub use login_viewmodel::LoginViewModel;
pub use records_viewmodel::{RecordsViewModel, Selection};
pub use session_viewmodel::SessionViewModel;
pub use stats_viewmodel::StatsViewModel;
