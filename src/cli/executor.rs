// src/cli/executor.rs
//! Runs the `stellar` binary as a child process.
//!
//! Arguments are handed to the OS as a vector, never through a shell. Each
//! run captures stdout and stderr concurrently, is bounded by a deadline, and
//! fails with a typed [`CliError`] when the process cannot be started, exits
//! non-zero, or runs past the deadline.

use std::path::PathBuf;
use std::process::Stdio;
use std::sync::Arc;
use std::time::Duration;

use lazy_static::lazy_static;
use regex::Regex;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::{Child, Command};
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, warn};

use crate::cli::error::CliError;

/// Time a timed-out child gets between SIGTERM and SIGKILL.
pub const KILL_GRACE: Duration = Duration::from_secs(5);

/// Budget for the `version` probe used by [`CliExecutor::check_availability`].
pub const AVAILABILITY_TIMEOUT: Duration = Duration::from_secs(5);

lazy_static! {
    static ref ERROR_LINE: Regex = Regex::new(r"(?:error|Error):\s*(.+)").unwrap();
}

/// Captured, trimmed output of a process that exited with status 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

/// Per-call overrides.
#[derive(Debug, Clone, Default)]
pub struct ExecOptions {
    pub cwd: Option<PathBuf>,
    pub env: Vec<(String, String)>,
    pub timeout: Option<Duration>,
}

impl ExecOptions {
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone)]
pub struct CliExecutor {
    program: String,
    default_timeout: Duration,
    limiter: Option<Arc<Semaphore>>,
}

impl CliExecutor {
    pub fn new(program: impl Into<String>, default_timeout: Duration) -> Self {
        Self {
            program: program.into(),
            default_timeout,
            limiter: None,
        }
    }

    /// Caps the number of child processes alive at once. Calls beyond the
    /// cap wait for a slot; the deadline starts once the process is spawned.
    pub fn with_max_concurrency(mut self, max: usize) -> Self {
        self.limiter = Some(Arc::new(Semaphore::new(max.max(1))));
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn default_timeout(&self) -> Duration {
        self.default_timeout
    }

    pub async fn execute(&self, args: &[String]) -> Result<CliOutput, CliError> {
        self.execute_with(args, &ExecOptions::default()).await
    }

    pub async fn execute_with(
        &self,
        args: &[String],
        opts: &ExecOptions,
    ) -> Result<CliOutput, CliError> {
        let _permit = match &self.limiter {
            Some(limiter) => limiter.clone().acquire_owned().await.ok(),
            None => None,
        };

        let timeout = opts.timeout.unwrap_or(self.default_timeout);

        let mut cmd = Command::new(&self.program);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        if let Some(cwd) = &opts.cwd {
            cmd.current_dir(cwd);
        }
        for (key, value) in &opts.env {
            cmd.env(key, value);
        }

        debug!("Executing: {} {}", self.program, args.join(" "));
        let started = Instant::now();
        let mut child = cmd.spawn().map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                CliError::NotFound {
                    program: self.program.clone(),
                }
            } else {
                CliError::Spawn {
                    program: self.program.clone(),
                    source,
                }
            }
        })?;

        let mut stdout_task = spawn_reader(child.stdout.take());
        let mut stderr_task = spawn_reader(child.stderr.take());

        let finished = tokio::time::timeout_at(started + timeout, async {
            let status = child.wait().await;
            let stdout = (&mut stdout_task).await;
            let stderr = (&mut stderr_task).await;
            (status, stdout, stderr)
        })
        .await;

        let (status, stdout, stderr) = match finished {
            Ok(done) => done,
            Err(_) => {
                stdout_task.abort();
                stderr_task.abort();
                warn!(
                    "'{} {}' exceeded {}ms, terminating",
                    self.program,
                    args.join(" "),
                    timeout.as_millis()
                );
                terminate(&mut child);
                reap(child, KILL_GRACE);
                return Err(CliError::Timeout(timeout.as_millis() as u64));
            }
        };

        let status = status.map_err(|source| self.io_error(source))?;
        let stdout = self.collect(stdout)?.trim().to_string();
        let stderr = self.collect(stderr)?.trim().to_string();
        // Killed by a signal outside our own timeout: no exit code.
        let exit_code = status.code().unwrap_or(-1);

        debug!(
            "'{}' exited with {} after {}ms",
            self.program,
            exit_code,
            started.elapsed().as_millis()
        );

        if exit_code == 0 {
            Ok(CliOutput {
                stdout,
                stderr,
                exit_code,
            })
        } else {
            Err(CliError::Failed {
                exit_code,
                message: failure_message(&stdout, &stderr, exit_code),
                stdout,
                stderr,
            })
        }
    }

    /// `true` when `<program> version` succeeds within
    /// [`AVAILABILITY_TIMEOUT`].
    pub async fn check_availability(&self) -> bool {
        let args = ["version".to_string()];
        match self
            .execute_with(&args, &ExecOptions::with_timeout(AVAILABILITY_TIMEOUT))
            .await
        {
            Ok(_) => true,
            Err(e) => {
                warn!("Stellar CLI unavailable: {}", e);
                false
            }
        }
    }

    pub async fn version(&self) -> Result<String, CliError> {
        let output = self.execute(&["version".to_string()]).await?;
        Ok(output.stdout)
    }

    fn collect(
        &self,
        joined: Result<std::io::Result<Vec<u8>>, tokio::task::JoinError>,
    ) -> Result<String, CliError> {
        let bytes = joined
            .map_err(|e| self.io_error(std::io::Error::new(std::io::ErrorKind::Other, e)))?
            .map_err(|e| self.io_error(e))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn io_error(&self, source: std::io::Error) -> CliError {
        CliError::Io {
            program: self.program.clone(),
            source,
        }
    }
}

fn spawn_reader<R>(stream: Option<R>) -> JoinHandle<std::io::Result<Vec<u8>>>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let mut buf = Vec::new();
        if let Some(mut stream) = stream {
            stream.read_to_end(&mut buf).await?;
        }
        Ok(buf)
    })
}

#[cfg(unix)]
fn terminate(child: &mut Child) {
    if let Some(pid) = child.id() {
        // SAFETY: the pid belongs to a child that has not been reaped yet.
        unsafe {
            libc::kill(pid as libc::pid_t, libc::SIGTERM);
        }
    }
}

#[cfg(not(unix))]
fn terminate(child: &mut Child) {
    let _ = child.start_kill();
}

/// Waits out the grace period in the background and force-kills the child
/// only if it is still running.
fn reap(mut child: Child, grace: Duration) {
    tokio::spawn(async move {
        if tokio::time::timeout(grace, child.wait()).await.is_err() {
            warn!("child ignored SIGTERM for {}ms, killing", grace.as_millis());
            let _ = child.kill().await;
        }
    });
}

/// Human-readable reason for a non-zero exit.
pub fn failure_message(stdout: &str, stderr: &str, exit_code: i32) -> String {
    if let Some(m) = ERROR_LINE.captures(stderr).and_then(|c| c.get(1)) {
        let message = m.as_str().trim();
        if !message.is_empty() {
            return message.to_string();
        }
    }
    let stderr = stderr.trim();
    if !stderr.is_empty() {
        return stderr.to_string();
    }
    if stdout.to_lowercase().contains("error") {
        return stdout.trim().to_string();
    }
    format!("Command failed with exit code {}", exit_code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_line_is_preferred() {
        let stderr = "warning: something\nerror: Account not found\n  caused by: x\n";
        assert_eq!(failure_message("", stderr, 1), "Account not found");
    }

    #[test]
    fn whole_stderr_without_error_line() {
        assert_eq!(failure_message("", "  bad things\n", 2), "bad things");
    }

    #[test]
    fn stdout_used_when_it_mentions_an_error() {
        assert_eq!(
            failure_message("ERROR contract trapped\n", "", 3),
            "ERROR contract trapped"
        );
        assert_eq!(failure_message("all fine", "", 3), "Command failed with exit code 3");
    }

    #[test]
    fn signal_exit_is_reported_with_minus_one() {
        assert_eq!(failure_message("", "", -1), "Command failed with exit code -1");
    }
}
