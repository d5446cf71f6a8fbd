//! Startup loading of the fitted scaler and classifier.
//!
//! Loading happens once, before the listener binds. Any failure here is
//! fatal for the process.

use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config_loader::PredictorConfig;
use crate::errors::{PredictorError, PredictorResult};
use crate::model::{LogisticClassifier, ModelParams};
use crate::scaler::{ScalerParams, StandardScaler};

/// Source of the two fitted artifacts the service needs.
pub trait ArtifactLoader {
    fn load(&self) -> PredictorResult<(StandardScaler, LogisticClassifier)>;
}

/// Reads both artifacts from JSON files on local disk.
#[derive(Debug, Clone)]
pub struct JsonArtifactLoader {
    scaler_path: PathBuf,
    model_path: PathBuf,
}

impl JsonArtifactLoader {
    pub fn new(scaler_path: impl Into<PathBuf>, model_path: impl Into<PathBuf>) -> Self {
        Self {
            scaler_path: scaler_path.into(),
            model_path: model_path.into(),
        }
    }

    pub fn from_config(config: &PredictorConfig) -> Self {
        Self::new(config.scaler_path.clone(), config.model_path.clone())
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> PredictorResult<T> {
    let content = fs::read_to_string(path).map_err(|e| PredictorError::io(path, e))?;
    serde_json::from_str(&content)
        .map_err(|e| PredictorError::serialization(path.display().to_string(), e))
}

impl ArtifactLoader for JsonArtifactLoader {
    fn load(&self) -> PredictorResult<(StandardScaler, LogisticClassifier)> {
        let scaler_params: ScalerParams = read_json(&self.scaler_path)?;
        let scaler = StandardScaler::new(scaler_params)
            .map_err(|e| PredictorError::artifact(&self.scaler_path, e.to_string()))?;

        let model_params: ModelParams = read_json(&self.model_path)?;
        let model = LogisticClassifier::new(model_params)
            .map_err(|e| PredictorError::artifact(&self.model_path, e.to_string()))?;

        if scaler.n_features() != model.n_features() {
            return Err(PredictorError::artifact(
                &self.model_path,
                format!(
                    "model expects {} features but scaler {} was fit on {}",
                    model.n_features(),
                    self.scaler_path.display(),
                    scaler.n_features()
                ),
            ));
        }

        tracing::info!(
            "Loaded artifacts: scaler={}, model={}, features={}",
            self.scaler_path.display(),
            self.model_path.display(),
            scaler.n_features()
        );

        Ok((scaler, model))
    }
}
