use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::config_loader::ErrorStatus;
use crate::errors::PredictorError;

/// A failed request, rendered as `{"error": "..."}`.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

#[derive(Serialize)]
struct ErrBody {
    error: String,
}

impl ApiError {
    pub fn from_predictor(policy: ErrorStatus, err: PredictorError) -> Self {
        let status = match policy {
            ErrorStatus::Ok => StatusCode::OK,
            ErrorStatus::ClientError if err.is_client_error() => StatusCode::BAD_REQUEST,
            ErrorStatus::ClientError => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }

    pub fn from_rejection(policy: ErrorStatus, rejection: JsonRejection) -> Self {
        Self::from_predictor(policy, PredictorError::invalid_request(rejection.body_text()))
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrBody {
                error: self.message,
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_keeps_ok_status() {
        let err = ApiError::from_predictor(
            ErrorStatus::Ok,
            PredictorError::dimension_mismatch("StandardScaler", 7, 2),
        );
        assert_eq!(err.status(), StatusCode::OK);
        assert!(err.message().contains("expecting 7 features"));
    }

    #[test]
    fn client_error_policy_separates_fault() {
        let bad_input = ApiError::from_predictor(
            ErrorStatus::ClientError,
            PredictorError::invalid_request("features must not be empty"),
        );
        assert_eq!(bad_input.status(), StatusCode::BAD_REQUEST);

        let server_side = ApiError::from_predictor(
            ErrorStatus::ClientError,
            PredictorError::inference("empty model output"),
        );
        assert_eq!(server_side.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
