use std::process::{Command, Stdio};

use crate::domain::{AppError, CommandOutput, Invocation};
use crate::ports::CommandRunner;

/// Runs invocations as child processes of the current process.
#[derive(Debug, Clone, Default)]
pub struct ProcessCommandRunner;

impl ProcessCommandRunner {
    pub fn new() -> Self {
        Self
    }

    fn command(invocation: &Invocation) -> Command {
        let mut cmd = Command::new(&invocation.program);
        cmd.args(&invocation.args);
        if let Some(cwd) = &invocation.cwd {
            cmd.current_dir(cwd);
        }
        cmd
    }

    fn spawn_error(invocation: &Invocation, err: std::io::Error) -> AppError {
        AppError::ExternalToolError {
            tool: invocation.label(),
            error: format!("Failed to execute {}: {}", invocation.program, err),
        }
    }
}

impl CommandRunner for ProcessCommandRunner {
    fn capture(&self, invocation: &Invocation) -> Result<CommandOutput, AppError> {
        let output = Self::command(invocation)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| Self::spawn_error(invocation, e))?;

        Ok(CommandOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }

    fn stream(&self, invocation: &Invocation) -> Result<bool, AppError> {
        let status = Self::command(invocation)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| Self::spawn_error(invocation, e))?;

        Ok(status.success())
    }
}
