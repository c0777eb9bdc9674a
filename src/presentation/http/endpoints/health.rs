use std::sync::Arc;

use poem_openapi::{ApiResponse, OpenApi, payload::PlainText};
use tracing::warn;

use crate::presentation::http::endpoints::root::{ApiState, EndpointsTags};

#[derive(Clone)]
pub struct HealthEndpoints {
    state: Arc<ApiState>,
}

impl HealthEndpoints {
    pub fn new(state: Arc<ApiState>) -> Self {
        Self { state }
    }
}

#[derive(ApiResponse)]
pub enum HealthResponse {
    #[oai(status = 200)]
    Ready(PlainText<&'static str>),
    #[oai(status = 503)]
    Unavailable(PlainText<&'static str>),
}

#[OpenApi]
impl HealthEndpoints {
    /// Reports whether the storage backend answers.
    #[oai(path = "/health", method = "get", tag = EndpointsTags::Health)]
    pub async fn health(&self) -> HealthResponse {
        match self.state.storage.ping().await {
            Ok(()) => HealthResponse::Ready(PlainText("OK")),
            Err(err) => {
                warn!(error = %err, "storage health check failed");
                HealthResponse::Unavailable(PlainText("storage unavailable"))
            }
        }
    }
}
