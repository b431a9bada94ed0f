//! Reachability service — is the device answering on the network?

use std::time::Duration;

use relayhub_domain::error::CommandError;
use relayhub_domain::reachability::{PingResult, strip_ipv6_brackets};

use crate::ports::CommandRunner;

/// Ping binary used when none is configured.
pub const DEFAULT_PING: &str = "ping";

/// Overall limit for the ping subprocess (the packet itself waits 1 s).
pub const PING_TIMEOUT: Duration = Duration::from_secs(3);

/// Application service probing the device with a single ICMPv6 echo.
pub struct ReachabilityService<R> {
    runner: R,
    host: String,
    ping: String,
}

impl<R: CommandRunner> ReachabilityService<R> {
    /// Create a new service probing `host` (URL-literal form accepted).
    pub fn new(runner: R, host: impl Into<String>) -> Self {
        Self::with_ping(runner, host, DEFAULT_PING)
    }

    /// Create a new service invoking `ping` as the ping binary.
    pub fn with_ping(runner: R, host: impl Into<String>, ping: impl Into<String>) -> Self {
        Self {
            runner,
            host: host.into(),
            ping: ping.into(),
        }
    }

    /// Probe the configured device.
    pub async fn probe(&self) -> PingResult {
        self.probe_host(&self.host).await
    }

    /// Probe an arbitrary host. Brackets around IPv6 literals are stripped.
    #[tracing::instrument(skip(self))]
    pub async fn probe_host(&self, host: &str) -> PingResult {
        let args = [
            "-6".to_string(),
            "-c".to_string(),
            "1".to_string(),
            "-W".to_string(),
            "1".to_string(),
            strip_ipv6_brackets(host).to_string(),
        ];

        let result = match self.runner.run(&self.ping, &args, PING_TIMEOUT).await {
            Ok(output) => PingResult::from(output),
            Err(err) => PingResult::failure(describe(&err)),
        };

        match result.rtt_ms {
            Some(rtt_ms) => tracing::debug!(rtt_ms, "device reachable"),
            None if result.success => tracing::debug!("device reachable, no rtt reported"),
            None => tracing::info!(error = %result.error, "device unreachable"),
        }
        result
    }
}

fn describe(err: &CommandError) -> String {
    match err {
        CommandError::TimedOut => "Ping timed out".to_string(),
        CommandError::NotFound { program } => {
            format!("{program} not found. Please install iputils-ping")
        }
        CommandError::Io(err) => err.to_string(),
    }
}
