use crate::domain::{AppError, CommandOutput, Invocation};

/// Port for running external programs synchronously.
///
/// Neither method imposes a timeout; a hung child hangs the caller.
pub trait CommandRunner {
    /// Run to completion and capture stdout/stderr.
    fn capture(&self, invocation: &Invocation) -> Result<CommandOutput, AppError>;

    /// Run to completion with the child attached to the current terminal.
    ///
    /// Returns whether the child exited successfully. Its diagnostics are
    /// shown to the user as-is rather than captured.
    fn stream(&self, invocation: &Invocation) -> Result<bool, AppError>;
}
