//! Shared application state for axum handlers.

use std::sync::Arc;

use relayhub_app::ports::CommandRunner;
use relayhub_app::services::reachability_service::ReachabilityService;
use relayhub_app::services::relay_service::RelayService;

/// Application state shared across all axum handlers.
///
/// Generic over the command runner to avoid dynamic dispatch.
/// `Clone` is implemented manually so the runner itself does not need to be
/// `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<R> {
    /// Relay command dispatch.
    pub relay_service: Arc<RelayService<R>>,
    /// Device reachability probing.
    pub reachability_service: Arc<ReachabilityService<R>>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            relay_service: Arc::clone(&self.relay_service),
            reachability_service: Arc::clone(&self.reachability_service),
        }
    }
}

impl<R> AppState<R>
where
    R: CommandRunner + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        relay_service: RelayService<R>,
        reachability_service: ReachabilityService<R>,
    ) -> Self {
        Self {
            relay_service: Arc::new(relay_service),
            reachability_service: Arc::new(reachability_service),
        }
    }
}
