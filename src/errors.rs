//! Error types for the campaign predictor.
//!
//! Startup failures (configuration, artifacts) and request-level failures
//! (bad body, wrong feature count) share one enum so the pipeline can use `?`
//! throughout; the HTTP layer decides how each one is surfaced.

use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PredictorError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid artifact {path}: {message}")]
    Artifact { path: String, message: String },

    #[error("Failed to parse {context}: {source}")]
    Serialization {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid {component} parameters: {message}")]
    InvalidParameters {
        component: &'static str,
        message: String,
    },

    #[error("{message}")]
    InvalidRequest { message: String },

    #[error("X has {actual} features, but {component} is expecting {expected} features as input")]
    DimensionMismatch {
        component: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Inference failed: {message}")]
    Inference { message: String },
}

pub type PredictorResult<T> = Result<T, PredictorError>;

/// Reported when a feature overflows `f64` before or during scoring.
pub const NON_FINITE_INPUT: &str =
    "Input contains infinity or a value too large for dtype('float64').";

impl PredictorError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().display().to_string(),
            source,
        }
    }

    pub fn artifact(path: impl AsRef<Path>, message: impl Into<String>) -> Self {
        Self::Artifact {
            path: path.as_ref().display().to_string(),
            message: message.into(),
        }
    }

    pub fn serialization(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            context: context.into(),
            source,
        }
    }

    pub fn invalid_parameters(component: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameters {
            component,
            message: message.into(),
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    pub fn dimension_mismatch(component: &'static str, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            component,
            expected,
            actual,
        }
    }

    pub fn inference(message: impl Into<String>) -> Self {
        Self::Inference {
            message: message.into(),
        }
    }

    /// True for failures caused by the caller's input rather than the service.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            PredictorError::InvalidRequest { .. } | PredictorError::DimensionMismatch { .. }
        )
    }
}

impl From<candle_core::Error> for PredictorError {
    fn from(err: candle_core::Error) -> Self {
        PredictorError::inference(err.to_string())
    }
}

impl From<figment::Error> for PredictorError {
    fn from(err: figment::Error) -> Self {
        PredictorError::config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_mismatch_names_both_counts() {
        let err = PredictorError::dimension_mismatch("StandardScaler", 7, 3);
        assert_eq!(
            err.to_string(),
            "X has 3 features, but StandardScaler is expecting 7 features as input"
        );
        assert!(err.is_client_error());
    }

    #[test]
    fn io_error_keeps_source_and_path() {
        use std::error::Error;

        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "No such file");
        let err = PredictorError::io("artifacts/missing.json", io_err);

        assert!(err.source().is_some());
        assert!(err.to_string().contains("artifacts/missing.json"));
        assert!(!err.is_client_error());
    }
}
