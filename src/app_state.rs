use crate::config_loader::ErrorStatus;
use crate::inference::Predictor;

/// Read-only state shared by every request handler.
///
/// Built once after the artifacts load and handed to the router behind an
/// `Arc`; nothing in here is mutated while serving, so handlers never lock.
#[derive(Debug, Clone)]
pub struct AppState {
    pub predictor: Predictor,
    pub error_status: ErrorStatus,
}

impl AppState {
    pub fn new(predictor: Predictor, error_status: ErrorStatus) -> Self {
        Self {
            predictor,
            error_status,
        }
    }
}
