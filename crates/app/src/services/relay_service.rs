//! Relay service — switch relays on the remote device over CoAP.

use std::collections::BTreeMap;
use std::time::Duration;

use relayhub_domain::command::{AggregateResult, CommandResult};
use relayhub_domain::error::CommandError;
use relayhub_domain::relay::{CoapTarget, RelayAction, RelayNumber, endpoint};

use crate::ports::CommandRunner;

/// CoAP client used when none is configured.
pub const DEFAULT_COAP_CLIENT: &str = "coap-client-notls";

/// How long a single CoAP request may take.
pub const COAP_TIMEOUT: Duration = Duration::from_secs(5);

/// Application service dispatching relay commands to the device.
pub struct RelayService<R> {
    runner: R,
    target: CoapTarget,
    client: String,
}

impl<R: CommandRunner> RelayService<R> {
    /// Create a new service using the default CoAP client binary.
    pub fn new(runner: R, target: CoapTarget) -> Self {
        Self::with_client(runner, target, DEFAULT_COAP_CLIENT)
    }

    /// Create a new service invoking `client` as the CoAP client binary.
    pub fn with_client(runner: R, target: CoapTarget, client: impl Into<String>) -> Self {
        Self {
            runner,
            target,
            client: client.into(),
        }
    }

    /// The device this service talks to.
    #[must_use]
    pub fn target(&self) -> &CoapTarget {
        &self.target
    }

    /// Switch a single relay.
    ///
    /// Never fails: runner errors are folded into an unsuccessful
    /// [`CommandResult`].
    #[tracing::instrument(skip_all, fields(relay = %relay, action = %action))]
    pub async fn switch(&self, relay: RelayNumber, action: RelayAction) -> CommandResult {
        let url = self.target.url(&endpoint(relay, action));
        let args = ["-m".to_string(), "get".to_string(), url];

        let result = match self.runner.run(&self.client, &args, COAP_TIMEOUT).await {
            Ok(output) => CommandResult::from(output),
            Err(err) => CommandResult::failure(describe(&err)),
        };

        if result.success {
            tracing::debug!("relay command succeeded");
        } else {
            tracing::warn!(error = %result.error, "relay command failed");
        }
        result
    }

    /// Switch every relay concurrently and wait for all four to finish.
    ///
    /// Latency is bounded by the slowest relay, not the sum.
    #[tracing::instrument(skip_all, fields(action = %action))]
    pub async fn switch_all(&self, action: RelayAction) -> AggregateResult {
        let [r1, r2, r3, r4] = RelayNumber::all();
        let (a, b, c, d) = tokio::join!(
            self.switch(r1, action),
            self.switch(r2, action),
            self.switch(r3, action),
            self.switch(r4, action),
        );

        let aggregate = AggregateResult::new(BTreeMap::from([(r1, a), (r2, b), (r3, c), (r4, d)]));
        if !aggregate.success {
            tracing::warn!("at least one relay command failed");
        }
        aggregate
    }
}

fn describe(err: &CommandError) -> String {
    match err {
        CommandError::TimedOut => "Command timed out".to_string(),
        CommandError::NotFound { program } => {
            format!("{program} not found. Please install libcoap2-dev")
        }
        CommandError::Io(err) => err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relayhub_domain::command::CommandOutput;
    use std::future::Future;
    use std::sync::{Arc, Mutex};
    use tokio::sync::Barrier;

    type Respond = dyn Fn(&str) -> Result<CommandOutput, CommandError> + Send + Sync;

    #[derive(Debug, Clone, PartialEq)]
    struct Call {
        program: String,
        args: Vec<String>,
        timeout: Duration,
    }

    /// Runner answering by the last argument (the CoAP URL).
    #[derive(Clone)]
    struct ScriptedRunner {
        calls: Arc<Mutex<Vec<Call>>>,
        respond: Arc<Respond>,
    }

    impl ScriptedRunner {
        fn new(
            respond: impl Fn(&str) -> Result<CommandOutput, CommandError> + Send + Sync + 'static,
        ) -> Self {
            Self {
                calls: Arc::default(),
                respond: Arc::new(respond),
            }
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl CommandRunner for ScriptedRunner {
        fn run(
            &self,
            program: &str,
            args: &[String],
            timeout: Duration,
        ) -> impl Future<Output = Result<CommandOutput, CommandError>> + Send {
            self.calls.lock().unwrap().push(Call {
                program: program.to_string(),
                args: args.to_vec(),
                timeout,
            });
            let result = (self.respond)(args.last().map_or("", String::as_str));
            async { result }
        }
    }

    /// Runner whose calls only complete once four are in flight.
    struct BarrierRunner {
        barrier: Barrier,
    }

    impl CommandRunner for BarrierRunner {
        async fn run(
            &self,
            _program: &str,
            _args: &[String],
            _timeout: Duration,
        ) -> Result<CommandOutput, CommandError> {
            self.barrier.wait().await;
            Ok(exit(0))
        }
    }

    fn exit(code: i32) -> CommandOutput {
        CommandOutput {
            exit_code: Some(code),
            stdout: String::new(),
            stderr: String::new(),
        }
    }

    fn target() -> CoapTarget {
        CoapTarget::new("[fd12::1]", 5683)
    }

    fn relay(n: u8) -> RelayNumber {
        RelayNumber::new(n).unwrap()
    }

    #[tokio::test]
    async fn should_invoke_coap_client_with_get_url() {
        let runner = ScriptedRunner::new(|_| Ok(exit(0)));
        let service = RelayService::new(runner.clone(), target());

        let result = service.switch(relay(2), RelayAction::On).await;

        assert!(result.success);
        assert_eq!(
            runner.calls(),
            vec![Call {
                program: "coap-client-notls".to_string(),
                args: vec![
                    "-m".to_string(),
                    "get".to_string(),
                    "coap://[fd12::1]:5683/relay2on".to_string(),
                ],
                timeout: Duration::from_secs(5),
            }]
        );
    }

    #[tokio::test]
    async fn should_use_configured_client_binary() {
        let runner = ScriptedRunner::new(|_| Ok(exit(0)));
        let service = RelayService::with_client(runner.clone(), target(), "/opt/coap/client");

        service.switch(relay(1), RelayAction::Off).await;

        assert_eq!(runner.calls()[0].program, "/opt/coap/client");
    }

    #[tokio::test]
    async fn should_report_failure_on_non_zero_exit() {
        let runner = ScriptedRunner::new(|_| {
            Ok(CommandOutput {
                exit_code: Some(1),
                stdout: String::new(),
                stderr: "4.04".to_string(),
            })
        });
        let service = RelayService::new(runner, target());

        let result = service.switch(relay(1), RelayAction::On).await;

        assert!(!result.success);
        assert_eq!(result.error, "4.04");
    }

    #[tokio::test]
    async fn should_report_timeout() {
        let runner = ScriptedRunner::new(|_| Err(CommandError::TimedOut));
        let service = RelayService::new(runner, target());

        let result = service.switch(relay(1), RelayAction::On).await;

        assert_eq!(result, CommandResult::failure("Command timed out"));
    }

    #[tokio::test]
    async fn should_report_missing_client_with_install_hint() {
        let runner = ScriptedRunner::new(|_| {
            Err(CommandError::NotFound {
                program: "coap-client-notls".to_string(),
            })
        });
        let service = RelayService::new(runner, target());

        let result = service.switch(relay(1), RelayAction::On).await;

        assert!(!result.success);
        assert_eq!(
            result.error,
            "coap-client-notls not found. Please install libcoap2-dev"
        );
    }

    #[tokio::test]
    async fn should_pass_through_other_runner_errors() {
        let runner = ScriptedRunner::new(|_| {
            Err(CommandError::Io(std::io::Error::other("permission denied")))
        });
        let service = RelayService::new(runner, target());

        let result = service.switch(relay(1), RelayAction::On).await;

        assert_eq!(result.error, "permission denied");
    }

    #[tokio::test]
    async fn should_switch_all_relays_and_aggregate() {
        let runner = ScriptedRunner::new(|_| Ok(exit(0)));
        let service = RelayService::new(runner.clone(), target());

        let aggregate = service.switch_all(RelayAction::Off).await;

        assert!(aggregate.success);
        assert_eq!(aggregate.results.len(), 4);
        let mut urls: Vec<String> = runner
            .calls()
            .into_iter()
            .map(|c| c.args[2].clone())
            .collect();
        urls.sort();
        assert_eq!(
            urls,
            vec![
                "coap://[fd12::1]:5683/relay1off",
                "coap://[fd12::1]:5683/relay2off",
                "coap://[fd12::1]:5683/relay3off",
                "coap://[fd12::1]:5683/relay4off",
            ]
        );
    }

    #[tokio::test]
    async fn should_fail_aggregate_when_one_relay_fails() {
        let runner = ScriptedRunner::new(|url| {
            if url.ends_with("/relay3off") {
                Err(CommandError::TimedOut)
            } else {
                Ok(exit(0))
            }
        });
        let service = RelayService::new(runner, target());

        let aggregate = service.switch_all(RelayAction::Off).await;

        assert!(!aggregate.success);
        assert!(!aggregate.results[&relay(3)].success);
        for n in [1, 2, 4] {
            assert!(aggregate.results[&relay(n)].success, "relay {n}");
        }
    }

    #[tokio::test]
    async fn should_run_all_relay_commands_concurrently() {
        let service = RelayService::new(
            BarrierRunner {
                barrier: Barrier::new(4),
            },
            target(),
        );

        // Sequential dispatch would never release the barrier.
        let aggregate =
            tokio::time::timeout(Duration::from_secs(5), service.switch_all(RelayAction::On))
                .await
                .expect("all four commands should be in flight together");

        assert!(aggregate.success);
    }
}
