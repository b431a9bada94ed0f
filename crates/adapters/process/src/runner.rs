//! `tokio::process` implementation of [`CommandRunner`].

use std::io;
use std::process::Stdio;
use std::time::Duration;

use relayhub_app::ports::CommandRunner;
use relayhub_domain::command::CommandOutput;
use relayhub_domain::error::CommandError;
use tokio::process::Command;

/// Runs programs as child processes of the daemon.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioCommandRunner;

impl CommandRunner for TokioCommandRunner {
    async fn run(
        &self,
        program: &str,
        args: &[String],
        timeout: Duration,
    ) -> Result<CommandOutput, CommandError> {
        let mut command = Command::new(program);
        command.args(args).stdin(Stdio::null()).kill_on_drop(true);

        tracing::debug!(program, ?args, "running command");
        let output = match tokio::time::timeout(timeout, command.output()).await {
            Ok(result) => result.map_err(|err| classify(program, err))?,
            Err(_elapsed) => {
                tracing::warn!(program, ?timeout, "command timed out, killed");
                return Err(CommandError::TimedOut);
            }
        };

        Ok(CommandOutput {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

fn classify(program: &str, err: io::Error) -> CommandError {
    if err.kind() == io::ErrorKind::NotFound {
        CommandError::NotFound {
            program: program.to_string(),
        }
    } else {
        CommandError::Io(err)
    }
}
