// ============================================================================
// STATE MODULE - Shared state with Rc<RefCell> + change notifications
// ============================================================================

pub mod app_state;
pub mod route;
pub mod session_state;
pub mod theme_state;

pub use app_state::AppState;
pub use route::Route;
pub use session_state::SessionState;
pub use theme_state::{Theme, ThemeState};
