//! # relayhub-adapter-process
//!
//! Driven adapter implementing the `CommandRunner` port on top of
//! [`tokio::process`].
//!
//! ## Behaviour
//! - stdin is closed, stdout and stderr are captured and decoded lossily
//! - the child is killed when its timeout expires (`kill_on_drop`)
//! - a missing executable is reported as `CommandError::NotFound`, every
//!   other spawn or wait failure as `CommandError::Io`
//!
//! ## Dependency rule
//! Depends on `relayhub-app` (port trait) and `relayhub-domain` only.

mod runner;

pub use runner::TokioCommandRunner;
