pub mod api_client;
pub mod download;

pub use api_client::ApiClient;
pub use download::{save_bytes, CSV_MIME};
