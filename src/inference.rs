use serde::{Deserialize, Serialize};

use crate::artifacts::ArtifactLoader;
use crate::errors::PredictorResult;
use crate::model::LogisticClassifier;
use crate::scaler::StandardScaler;

/// Outcome of a single prediction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub prediction: u8,
    pub probability: f64,
}

/// Round to four decimal places, the precision reported to clients.
pub fn round_probability(p: f64) -> f64 {
    (p * 10_000.0).round() / 10_000.0
}

/// Scale-then-classify pipeline over immutable, pre-fitted artifacts.
#[derive(Debug, Clone)]
pub struct Predictor {
    scaler: StandardScaler,
    model: LogisticClassifier,
}

impl Predictor {
    pub fn new(scaler: StandardScaler, model: LogisticClassifier) -> Self {
        Self { scaler, model }
    }

    pub fn from_loader<L: ArtifactLoader + ?Sized>(loader: &L) -> PredictorResult<Self> {
        let (scaler, model) = loader.load()?;
        Ok(Self::new(scaler, model))
    }

    pub fn n_features(&self) -> usize {
        self.scaler.n_features()
    }

    pub fn feature_names(&self) -> Option<&[String]> {
        self.scaler.feature_names()
    }

    pub fn threshold(&self) -> f64 {
        self.model.threshold()
    }

    pub fn predict(&self, features: &[f64]) -> PredictorResult<PredictionResult> {
        let scaled = self.scaler.transform(features)?;
        let [_, positive] = self.model.predict_proba(&scaled)?;

        Ok(PredictionResult {
            prediction: self.model.label_for(positive),
            probability: round_probability(positive),
        })
    }
}
