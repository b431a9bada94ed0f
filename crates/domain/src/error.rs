//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors. Client input problems are
//! [`ValidationError`]s; failures to run an external program are
//! [`CommandError`]s, which services fold into result values instead of
//! propagating them to the HTTP layer.

/// Invalid client input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Relay number is not an integer in `1..=4`.
    #[error("Relay number must be between 1 and 4")]
    RelayOutOfRange,

    /// Action is neither `on` nor `off`.
    #[error("Action must be 'on' or 'off'")]
    UnknownAction,
}

/// Failure to run an external program to completion.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// The program did not exit before its timeout and was killed.
    #[error("timed out")]
    TimedOut,

    /// The program does not exist on this system.
    #[error("{program} not found")]
    NotFound {
        /// Program name as it was requested.
        program: String,
    },

    /// Any other launch or wait failure.
    #[error("{0}")]
    Io(#[from] std::io::Error),
}
