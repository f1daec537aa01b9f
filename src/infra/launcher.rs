//! Infrastructure implementation of the `ServerLauncher` port.
//!
//! `MongodLauncher<R>` routes the mongod invocation through a
//! `CommandRunner`, generic over `R` so tests can inject a mock runner
//! without spawning real processes.

use crate::application::ports::{ServerHandle, ServerLauncher};
use crate::command_runner::{CommandRunner, DEFAULT_LAUNCH_TIMEOUT, TokioCommandRunner};
use crate::domain::{InstanceLayout, ProvisionError};

/// Launches mongod with `--fork`, returning once the parent process exits.
///
/// `--fork` makes mongod daemonize itself and block until the server is
/// ready for connections, so a zero exit status means "started and
/// detached". The forked server's lifetime is independent of ours from
/// that point on.
pub struct MongodLauncher<R: CommandRunner> {
    program: String,
    runner: R,
}

impl MongodLauncher<TokioCommandRunner> {
    /// Convenience constructor for production use.
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            runner: TokioCommandRunner::new(DEFAULT_LAUNCH_TIMEOUT),
        }
    }
}

impl<R: CommandRunner> MongodLauncher<R> {
    /// Create a launcher with an explicit runner instance.
    pub fn with_runner(program: impl Into<String>, runner: R) -> Self {
        Self {
            program: program.into(),
            runner,
        }
    }
}

impl<R: CommandRunner> ServerLauncher for MongodLauncher<R> {
    async fn launch_detached(
        &self,
        layout: &InstanceLayout,
    ) -> Result<ServerHandle, ProvisionError> {
        let dbpath = layout.data_dir().display().to_string();
        let logpath = layout.log_path().display().to_string();
        let args = ["--dbpath", &dbpath, "--logpath", &logpath, "--fork"];

        let output = self
            .runner
            .run(&self.program, &args)
            .await
            .map_err(|e| ProvisionError::Spawn {
                program: self.program.clone(),
                reason: format!("{e:#}"),
            })?;

        if !output.status.success() {
            return Err(ProvisionError::Spawn {
                program: self.program.clone(),
                reason: failure_reason(&output),
            });
        }

        Ok(ServerHandle {
            program: self.program.clone(),
            args: args.iter().map(|s| (*s).to_owned()).collect(),
            pid: parse_forked_pid(&output.stdout),
        })
    }
}

/// Pick the most useful diagnostic out of a failed mongod run.
///
/// mongod with `--fork` reports startup errors on stdout; other failures
/// land on stderr. Prefer stderr when present.
fn failure_reason(output: &std::process::Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let text = if stderr.trim().is_empty() { stdout } else { stderr };
    let text = text.trim();
    if text.is_empty() {
        format!("exited with {}", output.status)
    } else {
        text.to_owned()
    }
}

/// Extract the child pid from mongod's fork banner:
/// `forked process: 12345`. Absent or unparseable output yields `None`.
fn parse_forked_pid(stdout: &[u8]) -> Option<u32> {
    let text = String::from_utf8_lossy(stdout);
    text.lines()
        .find_map(|line| line.strip_prefix("forked process:"))
        .and_then(|rest| rest.trim().parse().ok())
}
