//! Generic external command execution with timeout and guaranteed kill.

use std::process::{Output, Stdio};
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::io::AsyncReadExt;

/// Default timeout for a mongod launch. `--fork` blocks until the server is
/// ready for connections, which can take a while on a cold filesystem.
pub const DEFAULT_LAUNCH_TIMEOUT: Duration = Duration::from_secs(120);

/// Runs an external command and captures its output.
///
/// The production implementation uses tokio; test doubles can record calls
/// and return canned results without spawning processes.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a command with the runner's default timeout.
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output>;

    /// Run a command with a custom timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or exceeds
    /// `timeout`. On timeout, the child process is killed, not left orphaned.
    async fn run_with_timeout(
        &self,
        program: &str,
        args: &[&str],
        timeout: Duration,
    ) -> Result<Output>;
}

/// Production `CommandRunner` — tokio process execution with guaranteed
/// timeout and kill on all platforms.
///
/// On Windows, `tokio::time::timeout` around `.output().await` does NOT kill
/// the child process when the timeout fires — the future is dropped but the
/// OS process keeps running. This implementation uses `tokio::select!` with
/// explicit `child.kill()` to guarantee the process is terminated.
pub struct TokioCommandRunner {
    timeout: Duration,
}

impl TokioCommandRunner {
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl CommandRunner for TokioCommandRunner {
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output> {
        self.run_with_timeout(program, args, self.timeout).await
    }

    async fn run_with_timeout(
        &self,
        program: &str,
        args: &[&str],
        timeout: Duration,
    ) -> Result<Output> {
        let mut child = tokio::process::Command::new(program)
            .args(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("failed to spawn {program}"))?;

        let mut stdout_handle = child.stdout.take();
        let mut stderr_handle = child.stderr.take();

        // Read stdout/stderr CONCURRENTLY with wait() to avoid pipe deadlock.
        // If the child writes more than the OS pipe buffer, it blocks on
        // write; calling wait() alone would then never resolve.
        tokio::select! {
            result = async {
                let (status, stdout, stderr) = tokio::join!(
                    child.wait(),
                    async {
                        let mut buf = Vec::new();
                        if let Some(ref mut h) = stdout_handle {
                            let _ = h.read_to_end(&mut buf).await;
                        }
                        buf
                    },
                    async {
                        let mut buf = Vec::new();
                        if let Some(ref mut h) = stderr_handle {
                            let _ = h.read_to_end(&mut buf).await;
                        }
                        buf
                    },
                );
                Ok(Output {
                    status: status.with_context(|| format!("waiting for {program}"))?,
                    stdout,
                    stderr,
                })
            } => result,
            () = tokio::time::sleep(timeout) => {
                let _ = child.kill().await;
                anyhow::bail!("{program} timed out after {}s", timeout.as_secs())
            }
        }
    }
}
