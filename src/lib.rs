//! Library root for the `campaign_predictor` crate.
//!
//! A small HTTP service that scales a feature vector with a pre-fitted
//! standard scaler and scores it with a pre-fitted logistic classifier.

// Error handling
pub mod api_errors;
pub mod errors;

// Configuration & CLI
pub mod cli;
pub mod config_loader;

// Fitted artifacts and inference
pub mod artifacts;
pub mod inference;
pub mod model;
pub mod scaler;

// Web server interface
pub mod app_state;
pub mod web;

// Logging
pub mod telemetry;

pub use artifacts::{ArtifactLoader, JsonArtifactLoader};
pub use errors::{PredictorError, PredictorResult};
pub use inference::{PredictionResult, Predictor};
