// ============================================================================
// Menu Access Infrastructure - Backend HTTP Client
// File: crates/menu-access-infrastructure/src/http/client.rs
// ============================================================================

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error};

use menu_access_core::error::DomainError;
use menu_access_shared::config::BackendSettings;
use menu_access_shared::utils::join_url;

use super::envelope::{error_message, ApiResponse};

/// Shared reqwest client bound to one backend base URL.
#[derive(Clone)]
pub struct BackendClient {
    http: Client,
    base_url: String,
    api_token: Option<String>,
}

impl BackendClient {
    pub fn new(settings: &BackendSettings) -> Result<Self, DomainError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .build()
            .map_err(|e| DomainError::TransportError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: settings.base_url.clone(),
            api_token: settings.api_token.clone().filter(|t| !t.trim().is_empty()),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = join_url(&self.base_url, path);
        debug!("{} {}", method, url);
        let builder = self.http.request(method, url);
        match &self.api_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// GET returning the envelope's `data`.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, DomainError> {
        self.execute(self.request(Method::GET, path), false).await
    }

    /// GET where 404 means "absent" instead of an error.
    pub async fn get_optional<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, DomainError> {
        self.execute(self.request(Method::GET, path), true).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<Option<T>, DomainError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(self.request(Method::PUT, path).json(body), false).await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        not_found_is_none: bool,
    ) -> Result<Option<T>, DomainError> {
        let response = request.send().await.map_err(|e| {
            error!("Backend request failed: {}", e);
            DomainError::TransportError(e.to_string())
        })?;

        let status = response.status();
        if not_found_is_none && status == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| DomainError::TransportError(format!("Failed to read response body: {}", e)))?;

        if !status.is_success() {
            let message = error_message(&body);
            error!("Backend returned {}: {}", status, message);
            return Err(DomainError::TransportError(format!(
                "HTTP {}: {}",
                status.as_u16(),
                message
            )));
        }

        let envelope: ApiResponse<T> = serde_json::from_slice(&body)
            .map_err(|e| DomainError::TransportError(format!("Invalid response body: {}", e)))?;

        if !envelope.success {
            let message = envelope
                .error
                .map(|e| e.describe())
                .unwrap_or_else(|| "request rejected".to_string());
            return Err(DomainError::TransportError(message));
        }

        Ok(envelope.data)
    }
}
