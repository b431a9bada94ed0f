//! Axum router assembly.

use std::path::Path;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use relayhub_app::ports::CommandRunner;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Nests API routes under `/api`; every other path is looked up in
/// `static_dir` (`/` serves `index.html`). [`ServeDir`] refuses paths that
/// escape `static_dir`, and answers 404 for missing files.
///
/// Includes a permissive [`CorsLayer`] so the UI may be hosted elsewhere, and
/// a [`TraceLayer`] that logs each HTTP request/response at the `DEBUG` level
/// using the `tracing` ecosystem.
pub fn build<R>(state: AppState<R>, static_dir: impl AsRef<Path>) -> Router
where
    R: CommandRunner + 'static,
{
    Router::new()
        .nest("/api", crate::api::routes())
        .fallback_service(ServeDir::new(static_dir))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
