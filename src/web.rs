use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::api_errors::ApiError;
use crate::app_state::AppState;
use crate::inference::PredictionResult;

pub const WELCOME_MESSAGE: &str = "Welcome to the Marketing Campaign Predictor API";

#[derive(Debug, Serialize, Deserialize)]
pub struct PredictRequest {
    pub features: Vec<f64>,
}

/// Build the router: welcome, predict and health endpoints, open to any origin.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(welcome))
        .route("/predict", post(predict))
        .route("/healthz", get(healthz))
        .with_state(state)
        .layer(cors)
}

async fn welcome() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": WELCOME_MESSAGE }))
}

#[axum::debug_handler]
async fn predict(
    State(state): State<Arc<AppState>>,
    body: Result<Json<PredictRequest>, JsonRejection>,
) -> Result<Json<PredictionResult>, ApiError> {
    let Json(req) = body.map_err(|rejection| {
        tracing::warn!("Rejected predict body: {}", rejection.body_text());
        ApiError::from_rejection(state.error_status, rejection)
    })?;

    match state.predictor.predict(&req.features) {
        Ok(result) => {
            tracing::debug!(
                "Predicted {} (p={}) for {} features",
                result.prediction,
                result.probability,
                req.features.len()
            );
            Ok(Json(result))
        }
        Err(e) => {
            tracing::warn!("Prediction failed: {e}");
            Err(ApiError::from_predictor(state.error_status, e))
        }
    }
}

async fn healthz(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "features": state.predictor.n_features(),
    }))
}

/// Bind `addr` and serve until the listener fails.
pub async fn serve(addr: &str, state: Arc<AppState>) -> anyhow::Result<()> {
    let socket_addr: std::net::SocketAddr = addr
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid bind address {addr}: {e}"))?;
    let listener = tokio::net::TcpListener::bind(socket_addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind {addr}: {e}"))?;

    tracing::info!("HTTP server listening on http://{addr}");
    axum::serve(listener, build_router(state)).await?;
    Ok(())
}
