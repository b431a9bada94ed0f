//! Reachability — whether the remote device answers an ICMPv6 echo.

use serde::Serialize;

use crate::command::CommandOutput;

/// Result of a single reachability probe.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PingResult {
    pub success: bool,
    /// Round-trip time in milliseconds, when the reply reported one.
    pub rtt_ms: Option<f64>,
    pub output: String,
    pub error: String,
}

impl PingResult {
    /// A probe that could not be carried out (timeout, missing binary, …).
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            rtt_ms: None,
            output: String::new(),
            error: error.into(),
        }
    }
}

impl From<CommandOutput> for PingResult {
    fn from(out: CommandOutput) -> Self {
        let success = out.success();
        let rtt_ms = if success {
            parse_rtt_ms(&out.stdout)
        } else {
            None
        };
        Self {
            success,
            rtt_ms,
            output: out.stdout,
            error: out.stderr,
        }
    }
}

/// Extract the round-trip time from `ping` output.
///
/// Looks only at the first line containing `" time="`. Returns `None` when
/// no such line exists or its value is not a number.
#[must_use]
pub fn parse_rtt_ms(stdout: &str) -> Option<f64> {
    let line = stdout.lines().find(|line| line.contains(" time="))?;
    let (_, tail) = line.rsplit_once(" time=")?;
    tail.split(' ').next()?.parse().ok()
}

/// Remove URL-literal brackets from an IPv6 host (`[fd12::1]` → `fd12::1`).
///
/// Hosts without a matching pair of brackets are returned unchanged.
#[must_use]
pub fn strip_ipv6_brackets(host: &str) -> &str {
    host.strip_prefix('[')
        .and_then(|h| h.strip_suffix(']'))
        .unwrap_or(host)
}
