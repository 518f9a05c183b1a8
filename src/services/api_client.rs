// ============================================================================
// API CLIENT - HTTP only, no UI state
// ============================================================================
// Every call targets `CONFIG.api_base_url()` and carries
// `Authorization: Bearer <access>` whenever the injected session has a token.
// ============================================================================

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use wasm_bindgen::JsValue;
use web_sys::{File, FormData};

use crate::config::CONFIG;
use crate::error::ApiError;
use crate::models::{
    ExportRequest, LoginRequest, LoginResponse, ReceiptDraft, ReceiptListResponse, ReceiptRecord,
    RecordFilter, StatsSummary,
};
use crate::state::SessionState;
use crate::utils::constants::{EXPORT_PATH, LOGIN_PATH, RECEIPTS_PATH, SCAN_FILE_FIELD, SCAN_PATH};

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    session: SessionState,
}

impl ApiClient {
    pub fn new(session: SessionState) -> Self {
        Self::with_base_url(CONFIG.api_base_url(), session)
    }

    pub fn with_base_url(base_url: &str, session: SessionState) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// `Bearer <token>` for the current session, if any
    pub fn authorization(&self) -> Option<String> {
        self.session.current().map(|session| session.bearer())
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.authorization() {
            Some(value) => builder.header("Authorization", &value),
            None => builder,
        }
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let url = self.url(LOGIN_PATH);
        let body = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        log::info!("🔐 [API] Logging in as {}", username);

        let response = Request::post(&url)
            .json(&body)
            .map_err(|e| ApiError::Serialization(e.to_string()))?
            .send()
            .await?;

        if !response.ok() {
            log::warn!("⚠️ [API] Login rejected: HTTP {}", response.status());
            return Err(ApiError::Authentication(response.status()));
        }

        Ok(response.json::<LoginResponse>().await?)
    }

    /// Authenticated GET. Error bodies are read for a server-provided message.
    pub async fn api_get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        log::debug!("[API] GET {}", url);

        let response = self.authorize(Request::get(&url)).send().await?;

        if !response.ok() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let message = error_message(status, &body);
            log::error!("❌ [API] GET {} failed: {}", path, message);
            return Err(ApiError::Request(message));
        }

        Ok(response.json::<T>().await?)
    }

    pub async fn list_receipts(&self, filter: &RecordFilter) -> Result<Vec<ReceiptRecord>, ApiError> {
        let records = self
            .api_get::<ReceiptListResponse>(&filter.list_path())
            .await?
            .into_records();
        log::info!("📋 [API] {} receipts for '{}'", records.len(), filter.query_string());
        Ok(records)
    }

    pub async fn fetch_stats(&self, filter: &RecordFilter) -> Result<StatsSummary, ApiError> {
        self.api_get::<StatsSummary>(&filter.stats_path()).await
    }

    /// Uploads a receipt image for OCR and returns the extracted draft
    pub async fn scan_receipt(&self, file: &File) -> Result<ReceiptDraft, ApiError> {
        let url = self.url(SCAN_PATH);
        let form = FormData::new().map_err(js_error)?;
        form.append_with_blob_and_filename(SCAN_FILE_FIELD, file, &file.name())
            .map_err(js_error)?;

        log::info!("📸 [API] Scanning {} ({} bytes)", file.name(), file.size());

        let response = self
            .authorize(Request::post(&url))
            .body(form)
            .map_err(|e| ApiError::Serialization(e.to_string()))?
            .send()
            .await?;

        if !response.ok() {
            log::error!("❌ [API] Scan failed: HTTP {}", response.status());
            return Err(ApiError::Scan(response.status()));
        }

        Ok(response.json::<ReceiptDraft>().await?)
    }

    pub async fn save_receipt(&self, draft: &ReceiptDraft) -> Result<ReceiptRecord, ApiError> {
        let url = self.url(RECEIPTS_PATH);
        let response = self
            .authorize(Request::post(&url))
            .json(draft)
            .map_err(|e| ApiError::Serialization(e.to_string()))?
            .send()
            .await?;

        if !response.ok() {
            log_failure("Save", &response);
            return Err(ApiError::Save(response.status()));
        }

        let record = response.json::<ReceiptRecord>().await?;
        log::info!("✅ [API] Saved receipt #{}", record.id);
        Ok(record)
    }

    pub async fn delete_receipt(&self, id: i64) -> Result<(), ApiError> {
        let url = self.url(&format!("{}{}/", RECEIPTS_PATH, id));
        let response = self.authorize(Request::delete(&url)).send().await?;

        if !response.ok() {
            log_failure("Delete", &response);
            return Err(ApiError::Delete(response.status()));
        }

        log::info!("🗑️ [API] Deleted receipt #{}", id);
        Ok(())
    }

    /// Returns the raw CSV bytes for the given receipt ids
    pub async fn export_csv(&self, ids: &[i64]) -> Result<Vec<u8>, ApiError> {
        let url = self.url(EXPORT_PATH);
        let body = ExportRequest { ids: ids.to_vec() };
        let response = self
            .authorize(Request::post(&url))
            .json(&body)
            .map_err(|e| ApiError::Serialization(e.to_string()))?
            .send()
            .await?;

        if !response.ok() {
            log_failure("Export", &response);
            return Err(ApiError::Export(response.status()));
        }

        Ok(response.binary().await?)
    }
}

fn log_failure(action: &str, response: &Response) {
    log::error!(
        "❌ [API] {} failed: HTTP {} {}",
        action,
        response.status(),
        response.status_text()
    );
}

fn js_error(e: JsValue) -> ApiError {
    ApiError::Network(format!("{:?}", e))
}

/// Server message from an error body (`detail`, `message` or `error`),
/// or a generic status message
pub fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            ["detail", "message", "error"]
                .iter()
                .find_map(|key| value.get(*key).and_then(|v| v.as_str()).map(str::to_string))
        })
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| format!("Request failed with status {}", status))
}
