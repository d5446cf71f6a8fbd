use candle_core::{Device, Tensor};
use serde::{Deserialize, Serialize};

use crate::errors::{PredictorError, PredictorResult, NON_FINITE_INPUT};

/// On-disk form of a fitted standard scaler.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScalerParams {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
    #[serde(default)]
    pub feature_names: Option<Vec<String>>,
}

/// Mean/variance normalization fitted offline: `(x - mean) / scale`.
#[derive(Debug, Clone)]
pub struct StandardScaler {
    params: ScalerParams,
    mean: Tensor,
    scale: Tensor,
}

impl StandardScaler {
    pub fn new(params: ScalerParams) -> PredictorResult<Self> {
        let n = params.mean.len();
        if n == 0 {
            return Err(PredictorError::invalid_parameters(
                "StandardScaler",
                "at least one feature is required",
            ));
        }
        if params.scale.len() != n {
            return Err(PredictorError::invalid_parameters(
                "StandardScaler",
                format!(
                    "mean has {} entries but scale has {}",
                    n,
                    params.scale.len()
                ),
            ));
        }
        if let Some(names) = &params.feature_names {
            if names.len() != n {
                return Err(PredictorError::invalid_parameters(
                    "StandardScaler",
                    format!("{} feature names for {} features", names.len(), n),
                ));
            }
        }
        if params
            .mean
            .iter()
            .chain(params.scale.iter())
            .any(|v| !v.is_finite())
        {
            return Err(PredictorError::invalid_parameters(
                "StandardScaler",
                "mean and scale must be finite",
            ));
        }

        // Constant features were fitted with zero variance; leave them unscaled.
        let effective_scale: Vec<f64> = params
            .scale
            .iter()
            .map(|&s| if s == 0.0 { 1.0 } else { s })
            .collect();

        let mean = Tensor::from_slice(&params.mean, (1, n), &Device::Cpu)?;
        let scale = Tensor::from_slice(&effective_scale, (1, n), &Device::Cpu)?;

        Ok(Self {
            params,
            mean,
            scale,
        })
    }

    pub fn n_features(&self) -> usize {
        self.params.mean.len()
    }

    pub fn feature_names(&self) -> Option<&[String]> {
        self.params.feature_names.as_deref()
    }

    /// Scale a single row, returning a `1 x n_features` tensor.
    pub fn transform(&self, row: &[f64]) -> PredictorResult<Tensor> {
        if row.len() != self.n_features() {
            return Err(PredictorError::dimension_mismatch(
                "StandardScaler",
                self.n_features(),
                row.len(),
            ));
        }
        if row.iter().any(|v| !v.is_finite()) {
            return Err(PredictorError::invalid_request(NON_FINITE_INPUT));
        }
        let x = Tensor::from_slice(row, (1, row.len()), &Device::Cpu)?;
        let scaled = x.sub(&self.mean)?.div(&self.scale)?;

        // Huge but finite inputs can still overflow once divided by a small scale.
        if scaled
            .flatten_all()?
            .to_vec1::<f64>()?
            .iter()
            .any(|v| !v.is_finite())
        {
            return Err(PredictorError::invalid_request(NON_FINITE_INPUT));
        }
        Ok(scaled)
    }
}
