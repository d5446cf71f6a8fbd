use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::errors::{PredictorError, PredictorResult};

pub const DEFAULT_CONFIG_FILE: &str = "predictor.toml";
pub const ENV_PREFIX: &str = "PREDICTOR_";

/// HTTP status used when a prediction request fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ErrorStatus {
    /// Failures are reported as `200 OK` with an `error` field.
    #[default]
    Ok,
    /// Failures caused by the request are reported as `400 Bad Request`.
    ClientError,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictorConfig {
    pub host: String,
    pub port: u16,
    pub scaler_path: PathBuf,
    pub model_path: PathBuf,
    #[serde(default)]
    pub error_status: ErrorStatus,
    pub log_level: String,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            scaler_path: PathBuf::from("artifacts/feature_scaler.json"),
            model_path: PathBuf::from("artifacts/marketing_campaign_model.json"),
            error_status: ErrorStatus::Ok,
            log_level: "debug".to_string(),
        }
    }
}

impl PredictorConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn level(&self) -> PredictorResult<tracing::Level> {
        self.log_level.parse::<tracing::Level>().map_err(|_| {
            PredictorError::config(format!(
                "log_level '{}' is not one of trace, debug, info, warn, error",
                self.log_level
            ))
        })
    }

    fn validate(&self) -> PredictorResult<()> {
        if self.host.trim().is_empty() {
            return Err(PredictorError::config("host cannot be empty"));
        }
        if self.scaler_path.as_os_str().is_empty() {
            return Err(PredictorError::config("scaler_path cannot be empty"));
        }
        if self.model_path.as_os_str().is_empty() {
            return Err(PredictorError::config("model_path cannot be empty"));
        }
        self.level()?;
        Ok(())
    }
}

/// Layer defaults, the TOML file at `path` (if present) and `PREDICTOR_*` env vars.
pub fn load_config(path: impl AsRef<Path>) -> PredictorResult<PredictorConfig> {
    let figment = Figment::from(Serialized::defaults(PredictorConfig::default()))
        .merge(Toml::file(path.as_ref()))
        .merge(Env::prefixed(ENV_PREFIX));

    let config: PredictorConfig = figment.extract()?;
    config.validate()?;

    Ok(config)
}
