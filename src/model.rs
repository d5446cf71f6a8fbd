use candle_core::{Device, Tensor};
use serde::{Deserialize, Serialize};

use crate::errors::{PredictorError, PredictorResult, NON_FINITE_INPUT};

fn default_threshold() -> f64 {
    0.5
}

/// On-disk form of a fitted logistic regression.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelParams {
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

/// Binary classifier with logistic scoring over scaled features.
#[derive(Debug, Clone)]
pub struct LogisticClassifier {
    params: ModelParams,
    weights: Tensor,
}

impl LogisticClassifier {
    pub fn new(params: ModelParams) -> PredictorResult<Self> {
        let n = params.coefficients.len();
        if n == 0 {
            return Err(PredictorError::invalid_parameters(
                "LogisticClassifier",
                "at least one coefficient is required",
            ));
        }
        if !params.intercept.is_finite() || params.coefficients.iter().any(|c| !c.is_finite()) {
            return Err(PredictorError::invalid_parameters(
                "LogisticClassifier",
                "coefficients and intercept must be finite",
            ));
        }
        if !(0.0..=1.0).contains(&params.threshold) {
            return Err(PredictorError::invalid_parameters(
                "LogisticClassifier",
                format!("threshold {} is outside [0, 1]", params.threshold),
            ));
        }

        let weights = Tensor::from_slice(&params.coefficients, (n, 1), &Device::Cpu)?;
        Ok(Self { params, weights })
    }

    pub fn n_features(&self) -> usize {
        self.params.coefficients.len()
    }

    pub fn threshold(&self) -> f64 {
        self.params.threshold
    }

    /// Probabilities of `[negative, positive]` for a `1 x n_features` row.
    pub fn predict_proba(&self, x: &Tensor) -> PredictorResult<[f64; 2]> {
        let (rows, cols) = x.dims2()?;
        if rows != 1 {
            return Err(PredictorError::inference(format!(
                "expected a single row, got {rows}"
            )));
        }
        if cols != self.n_features() {
            return Err(PredictorError::dimension_mismatch(
                "LogisticClassifier",
                self.n_features(),
                cols,
            ));
        }

        let logit = x.matmul(&self.weights)?.affine(1.0, self.params.intercept)?;
        let positive = candle_nn::ops::sigmoid(&logit)?
            .flatten_all()?
            .to_vec1::<f64>()?
            .first()
            .copied()
            .ok_or_else(|| PredictorError::inference("empty model output"))?;
        if !positive.is_finite() {
            return Err(PredictorError::invalid_request(NON_FINITE_INPUT));
        }

        Ok([1.0 - positive, positive])
    }

    /// Class label for a `1 x n_features` row.
    pub fn predict(&self, x: &Tensor) -> PredictorResult<u8> {
        let [_, positive] = self.predict_proba(x)?;
        Ok(self.label_for(positive))
    }

    pub fn label_for(&self, positive: f64) -> u8 {
        u8::from(positive >= self.params.threshold)
    }
}
