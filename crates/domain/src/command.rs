//! Command results — what running an external program produced.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::relay::RelayNumber;

/// Raw outcome of a program that ran to completion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` when the process was terminated by a signal.
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// Whether the program exited with status zero.
    #[must_use]
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Normalized result of one command invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandResult {
    pub success: bool,
    pub output: String,
    pub error: String,
}

impl CommandResult {
    /// A failure that never produced process output (timeout, missing binary, …).
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            output: String::new(),
            error: error.into(),
        }
    }
}

impl From<CommandOutput> for CommandResult {
    fn from(out: CommandOutput) -> Self {
        Self {
            success: out.success(),
            output: out.stdout,
            error: out.stderr,
        }
    }
}

/// Result of switching every relay at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregateResult {
    /// `true` only if every relay command succeeded.
    pub success: bool,
    pub results: BTreeMap<RelayNumber, CommandResult>,
}

impl AggregateResult {
    /// Collect per-relay results; overall success is the AND of all of them.
    #[must_use]
    pub fn new(results: BTreeMap<RelayNumber, CommandResult>) -> Self {
        let success = results.values().all(|r| r.success);
        Self { success, results }
    }
}
