//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod relays;
pub mod status;

use axum::Router;
use axum::routing::{get, post};

use relayhub_app::ports::CommandRunner;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: CommandRunner + 'static,
{
    Router::new()
        // Relays
        .route("/relay/all/{action}", post(relays::switch_all::<R>))
        .route("/relay/{relay}/{action}", post(relays::switch::<R>))
        // Status
        .route("/health", get(status::health))
        .route("/ping", get(status::ping::<R>))
}
