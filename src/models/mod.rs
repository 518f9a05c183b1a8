pub mod auth;
pub mod filter;
pub mod receipt;
pub mod serde_helpers;
pub mod session;
pub mod stats;

pub use auth::{LoginRequest, LoginResponse, UserInfo};
pub use filter::RecordFilter;
pub use receipt::{Category, ExportRequest, ReceiptDraft, ReceiptListResponse, ReceiptRecord};
pub use session::Session;
pub use stats::{ChartSlice, StatsSummary};
