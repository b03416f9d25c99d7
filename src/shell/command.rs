//! External command execution.
//!
//! Probes never spawn processes directly; they go through a
//! [`CommandRunner`] so tests can substitute canned output.

use std::io::ErrorKind;
use std::process::Command;
use std::time::{Duration, Instant};

use crate::error::{OnboardError, Result};

/// Result of executing an external command.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandOutput {
    /// Create a success result.
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            exit_code: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
            duration: Duration::ZERO,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: Option<i32>, stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            exit_code,
            stdout: stdout.into(),
            stderr: stderr.into(),
            duration: Duration::ZERO,
            success: false,
        }
    }

    /// Standard output followed by standard error, like `2>&1`.
    pub fn combined(&self) -> String {
        format!("{}{}", self.stdout, self.stderr)
    }
}

/// Runs external programs on behalf of probes.
///
/// A non-zero exit status is not an error: several tools (`ssh -T`,
/// `git config` on an unset key) exit non-zero on perfectly usable output.
/// Only a program that cannot be started is reported as an error.
pub trait CommandRunner {
    /// Run `program` with `args` and capture its output.
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput>;
}

/// [`CommandRunner`] backed by `std::process::Command`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemCommandRunner;

impl CommandRunner for SystemCommandRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput> {
        let command_line = display_command(program, args);
        tracing::debug!("Running `{}`", command_line);

        let start = Instant::now();
        let output = Command::new(program).args(args).output().map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                OnboardError::CommandNotFound {
                    command: command_line.clone(),
                }
            } else {
                OnboardError::Io(e)
            }
        })?;
        let duration = start.elapsed();

        let result = CommandOutput {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            duration,
            success: output.status.success(),
        };

        tracing::debug!(
            "`{}` exited with {:?} after {:?}",
            command_line,
            result.exit_code,
            result.duration
        );
        Ok(result)
    }
}

/// Render a program and its arguments the way a user would type them.
pub fn display_command(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}
