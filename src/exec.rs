//! External process execution behind a mockable trait seam.

use std::io::Write as _;
use std::process::{Command, Output, Stdio};

use anyhow::{Context as _, Result};

/// Result of a command execution.
#[derive(Debug)]
pub struct ExecResult {
    /// Captured standard output, lossily decoded.
    pub stdout: String,
    /// Captured standard error, lossily decoded.
    pub stderr: String,
    /// Whether the process exited with status zero.
    pub success: bool,
    /// Exit code, if the process was not killed by a signal.
    pub code: Option<i32>,
}

impl From<Output> for ExecResult {
    fn from(output: Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            success: output.status.success(),
            code: output.status.code(),
        }
    }
}

/// Command execution interface (for testing or real system calls).
pub trait Executor: Send + Sync {
    /// Run a command, writing `input` to its stdin and collecting its output.
    ///
    /// A non-zero exit is not an error at this layer; callers inspect
    /// [`ExecResult::success`].
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or its stdin/stdout
    /// cannot be driven.
    fn run_with_input(&self, program: &str, args: &[&str], input: &str) -> Result<ExecResult>;

    /// Check if a program is available on PATH.
    fn which(&self, program: &str) -> bool;
}

/// [`Executor`] implementation that runs real system processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemExecutor;

impl Executor for SystemExecutor {
    fn run_with_input(&self, program: &str, args: &[&str], input: &str) -> Result<ExecResult> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .with_context(|| format!("failed to execute: {program}"))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(input.as_bytes())
                .with_context(|| format!("failed to write stdin of: {program}"))?;
            // stdin drops here, closing the pipe so the child sees EOF
        }

        let output = child
            .wait_with_output()
            .with_context(|| format!("failed to collect output of: {program}"))?;
        Ok(ExecResult::from(output))
    }

    fn which(&self, program: &str) -> bool {
        #[cfg(target_os = "windows")]
        let check = Command::new("where").arg(program).output();

        #[cfg(not(target_os = "windows"))]
        let check = Command::new("which").arg(program).output();

        check.is_ok_and(|o| o.status.success())
    }
}
