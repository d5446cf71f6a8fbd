#![allow(dead_code)]

use campaign_predictor::app_state::AppState;
use campaign_predictor::config_loader::ErrorStatus;
use campaign_predictor::inference::Predictor;
use campaign_predictor::model::{LogisticClassifier, ModelParams};
use campaign_predictor::scaler::{ScalerParams, StandardScaler};
use std::sync::Arc;

pub const MEAN: [f64; 7] = [45.0, 50_000.0, 1.0, 0.5, 0.5, 3.0, 0.5];
pub const SCALE: [f64; 7] = [12.0, 20_000.0, 1.0, 0.5, 0.5, 2.0, 0.25];
pub const COEFFICIENTS: [f64; 7] = [0.2, 0.8, -0.4, 0.3, 0.2, 0.6, 1.0];
pub const INTERCEPT: f64 = -0.5;

pub fn test_predictor() -> Predictor {
    let scaler = StandardScaler::new(ScalerParams {
        mean: MEAN.to_vec(),
        scale: SCALE.to_vec(),
        feature_names: None,
    })
    .expect("scaler should build");
    let model = LogisticClassifier::new(ModelParams {
        coefficients: COEFFICIENTS.to_vec(),
        intercept: INTERCEPT,
        threshold: 0.5,
    })
    .expect("model should build");
    Predictor::new(scaler, model)
}

pub fn test_state(error_status: ErrorStatus) -> Arc<AppState> {
    Arc::new(AppState::new(test_predictor(), error_status))
}

/// Reference score computed without the pipeline.
pub fn expected_probability(features: &[f64]) -> f64 {
    let logit = INTERCEPT
        + features
            .iter()
            .zip(MEAN.iter().zip(SCALE.iter()))
            .zip(COEFFICIENTS.iter())
            .map(|((x, (m, s)), w)| w * (x - m) / s)
            .sum::<f64>();
    1.0 / (1.0 + (-logit).exp())
}
