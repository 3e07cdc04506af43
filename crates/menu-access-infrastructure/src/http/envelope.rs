//! API response envelope returned by the backend

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub fn describe(&self) -> String {
        format!("{}: {}", self.code, self.message)
    }
}

/// Best-effort error text from a failed response body.
pub fn error_message(body: &[u8]) -> String {
    serde_json::from_slice::<ApiResponse<serde::de::IgnoredAny>>(body)
        .ok()
        .and_then(|envelope| envelope.error)
        .map(|e| e.describe())
        .unwrap_or_else(|| String::from_utf8_lossy(body).chars().take(200).collect())
}
