//! Configuration management

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::constants::{
    DEFAULT_BACKEND_TIMEOUT_SECS, DEFAULT_EVENT_CAPACITY, DEFAULT_ROOT_ORDER_STRIDE, ENV_PREFIX,
};

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub backend: BackendSettings,
    pub matrix: MatrixSettings,
    pub telemetry: TelemetrySettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BackendSettings {
    pub base_url: String,
    pub timeout_seconds: u64,
    /// Static bearer token. Session handling lives outside this workspace.
    pub api_token: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MatrixSettings {
    /// Gap between root-level order indexes so children never force a renumber.
    pub root_order_stride: i32,
    pub event_capacity: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TelemetrySettings {
    pub level: String,
    pub json: bool,
    pub log_dir: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let config = Config::builder()
            .set_default("backend.base_url", "http://127.0.0.1:8080/api/v1")?
            .set_default("backend.timeout_seconds", DEFAULT_BACKEND_TIMEOUT_SECS as i64)?
            .set_default("matrix.root_order_stride", DEFAULT_ROOT_ORDER_STRIDE)?
            .set_default("matrix.event_capacity", DEFAULT_EVENT_CAPACITY as i64)?
            .set_default("telemetry.level", "info")?
            .set_default("telemetry.json", false)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let loaded: AppConfig = config.try_deserialize()?;
        loaded.validate()?;
        Ok(loaded)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.matrix.root_order_stride < 2 {
            return Err(ConfigError::Message(format!(
                "matrix.root_order_stride must be at least 2, got {}",
                self.matrix.root_order_stride
            )));
        }
        if self.matrix.event_capacity == 0 {
            return Err(ConfigError::Message(
                "matrix.event_capacity must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}
