use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::PipelineState;

/// Library-wide error type for dxpack operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Project name cannot be used as a package or directory name.
    #[error(
        "Invalid project name '{0}': must start with a letter and contain only ASCII letters, digits, hyphens, or underscores"
    )]
    InvalidProjectName(String),

    /// Base path is not a usable URL subpath.
    #[error("Invalid base path '{path}': {reason}")]
    InvalidBasePath { path: String, reason: String },

    /// A mandatory tool is missing or unusable.
    #[error("{tool} is required but {problem}.\n{remedy}")]
    MissingTool { tool: String, problem: String, remedy: String },

    /// Automatic installation ran but the tool is still not usable.
    #[error("Failed to install {tool}: {details}")]
    InstallFailed { tool: String, details: String },

    /// External tool exited unsuccessfully or could not be spawned.
    #[error("{tool} failed: {error}")]
    ExternalToolError { tool: String, error: String },

    /// The build reported success but produced no output directory.
    #[error("Build output not found at {}", .0.display())]
    BuildOutputMissing(PathBuf),

    /// The archiver reported success but produced no archive.
    #[error("Archive not found at {}", .0.display())]
    ArchiveMissing(PathBuf),

    /// The user answered no to a confirmation.
    #[error("Aborted: {0}")]
    Declined(String),

    /// A pipeline stage failed; later stages were not run. `stage` is the
    /// state the failed step would have reached.
    #[error("{source}\n(pipeline aborted during {})", .stage.step())]
    Aborted {
        stage: PipelineState,
        #[source]
        source: Box<AppError>,
    },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Invariant violation inside dxpack itself.
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn external<T: Into<String>, E: Into<String>>(tool: T, error: E) -> Self {
        AppError::ExternalToolError { tool: tool.into(), error: error.into() }
    }

    /// Innermost error, unwrapping pipeline abort wrappers.
    pub fn root_cause(&self) -> &AppError {
        match self {
            AppError::Aborted { source, .. } => source.root_cause(),
            other => other,
        }
    }
}
