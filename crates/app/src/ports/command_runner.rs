//! Command runner port — execution of external programs.

use std::future::Future;
use std::time::Duration;

use relayhub_domain::command::CommandOutput;
use relayhub_domain::error::CommandError;

/// Runs an external program to completion, or aborts it at a timeout.
///
/// Implementations capture stdout and stderr as text. A non-zero exit is
/// **not** an error: it is reported through [`CommandOutput::exit_code`].
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args`, killing it if it outlives `timeout`.
    ///
    /// # Errors
    ///
    /// - [`CommandError::TimedOut`] if the program did not exit in time
    /// - [`CommandError::NotFound`] if `program` does not exist
    /// - [`CommandError::Io`] for any other launch or wait failure
    fn run(
        &self,
        program: &str,
        args: &[String],
        timeout: Duration,
    ) -> impl Future<Output = Result<CommandOutput, CommandError>> + Send;
}
