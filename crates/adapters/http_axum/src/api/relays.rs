//! JSON REST handlers for relay control.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use relayhub_app::ports::CommandRunner;
use relayhub_domain::command::{AggregateResult, CommandResult};
use relayhub_domain::relay::{RelayAction, RelayNumber};

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the single-relay endpoint.
pub enum SwitchResponse {
    Ok(Json<CommandResult>),
    Failed(Json<CommandResult>),
}

impl From<CommandResult> for SwitchResponse {
    fn from(result: CommandResult) -> Self {
        if result.success {
            Self::Ok(Json(result))
        } else {
            Self::Failed(Json(result))
        }
    }
}

impl IntoResponse for SwitchResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
            Self::Failed(json) => (StatusCode::INTERNAL_SERVER_ERROR, json).into_response(),
        }
    }
}

/// Possible responses from the all-relays endpoint.
pub enum SwitchAllResponse {
    Ok(Json<AggregateResult>),
    Failed(Json<AggregateResult>),
}

impl From<AggregateResult> for SwitchAllResponse {
    fn from(result: AggregateResult) -> Self {
        if result.success {
            Self::Ok(Json(result))
        } else {
            Self::Failed(Json(result))
        }
    }
}

impl IntoResponse for SwitchAllResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
            Self::Failed(json) => (StatusCode::INTERNAL_SERVER_ERROR, json).into_response(),
        }
    }
}

/// `POST /api/relay/{relay}/{action}`
pub async fn switch<R>(
    State(state): State<AppState<R>>,
    Path((relay, action)): Path<(String, String)>,
) -> Result<SwitchResponse, ApiError>
where
    R: CommandRunner + 'static,
{
    let relay: RelayNumber = relay.parse()?;
    let action: RelayAction = action.parse()?;

    let result = state.relay_service.switch(relay, action).await;
    Ok(result.into())
}

/// `POST /api/relay/all/{action}`
pub async fn switch_all<R>(
    State(state): State<AppState<R>>,
    Path(action): Path<String>,
) -> Result<SwitchAllResponse, ApiError>
where
    R: CommandRunner + 'static,
{
    let action: RelayAction = action.parse()?;

    let result = state.relay_service.switch_all(action).await;
    Ok(result.into())
}
