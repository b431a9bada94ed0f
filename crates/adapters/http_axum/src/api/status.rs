//! Service liveness and device reachability.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use relayhub_app::ports::CommandRunner;
use relayhub_domain::reachability::PingResult;

use crate::state::AppState;

/// Body of `GET /api/health`.
#[derive(Serialize)]
pub struct HealthBody {
    pub status: &'static str,
}

/// Body of `GET /api/ping`.
#[derive(Serialize)]
pub struct PingBody {
    pub online: bool,
    pub rtt_ms: Option<f64>,
    pub error: String,
}

/// Possible responses from the ping endpoint.
pub enum PingResponse {
    Online(Json<PingBody>),
    Offline(Json<PingBody>),
}

impl From<PingResult> for PingResponse {
    fn from(result: PingResult) -> Self {
        let body = PingBody {
            online: result.success,
            rtt_ms: result.rtt_ms,
            error: result.error,
        };
        if body.online {
            Self::Online(Json(body))
        } else {
            Self::Offline(Json(body))
        }
    }
}

impl IntoResponse for PingResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Online(json) => json.into_response(),
            Self::Offline(json) => (StatusCode::SERVICE_UNAVAILABLE, json).into_response(),
        }
    }
}

/// `GET /api/health`
pub async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "ok" })
}

/// `GET /api/ping`
pub async fn ping<R>(State(state): State<AppState<R>>) -> PingResponse
where
    R: CommandRunner + 'static,
{
    state.reachability_service.probe().await.into()
}
