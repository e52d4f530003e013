//! Project identity and deployment configuration.

use std::fmt;
use std::ops::Deref;

use serde::Serialize;

use super::AppError;

pub const DEFAULT_PROJECT_NAME: &str = "dioxus-web-demo";
pub const DEFAULT_TITLE: &str = "Dioxus Web Demo";

/// Project name, used as the Cargo package name and the project directory name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ProjectName(String);

impl ProjectName {
    /// Validate and create a new instance.
    pub fn new(name: &str) -> Result<Self, AppError> {
        if validate_project_name(name) {
            Ok(Self(name.to_string()))
        } else {
            Err(AppError::InvalidProjectName(name.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Checks:
/// - Starts with an ASCII letter
/// - Remaining characters are ASCII alphanumeric, '-', or '_'
fn validate_project_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// URL subpath under which the built assets are served, e.g. `/my-demo`.
///
/// The last segment must match the hosting folder the archive is unpacked
/// into. That part cannot be checked here; only the shape is validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BasePath(String);

impl BasePath {
    pub fn new(path: &str) -> Result<Self, AppError> {
        let invalid = |reason: &str| AppError::InvalidBasePath {
            path: path.to_string(),
            reason: reason.to_string(),
        };

        if !path.starts_with('/') {
            return Err(invalid("must start with '/'"));
        }
        if path.chars().any(char::is_whitespace) {
            return Err(invalid("must not contain whitespace"));
        }
        if path.contains(['"', '\\', '$', '`']) {
            return Err(invalid("must not contain quotes, backslashes, '$' or '`'"));
        }
        if path == "/" {
            return Ok(Self(path.to_string()));
        }
        if path.ends_with('/') {
            return Err(invalid("must not end with '/'"));
        }
        if path[1..].split('/').any(|segment| matches!(segment, "" | "." | "..")) {
            return Err(invalid("must not contain empty, '.' or '..' segments"));
        }

        Ok(Self(path.to_string()))
    }

    /// Default base path for a project: `/<name>`.
    pub fn for_project(name: &ProjectName) -> Self {
        Self(format!("/{}", name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

macro_rules! impl_string_view {
    ($name:ident) => {
        impl Deref for $name {
            type Target = str;
            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

impl_string_view!(ProjectName);
impl_string_view!(BasePath);

/// Immutable configuration passed into every pipeline stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectConfig {
    pub name: ProjectName,
    pub title: String,
    pub base_path: BasePath,
}

impl ProjectConfig {
    pub fn new(
        name: ProjectName,
        title: impl Into<String>,
        base_path: BasePath,
    ) -> Result<Self, AppError> {
        let title = title.into();
        validate_title(&title)?;
        Ok(Self { name, title, base_path })
    }
}

/// Titles are emitted inside quoted TOML and YAML strings, and GitHub
/// evaluates `${{ ... }}` anywhere in a workflow.
fn validate_title(title: &str) -> Result<(), AppError> {
    if title.trim().is_empty() {
        return Err(AppError::config_error("Page title must not be empty"));
    }
    if title.contains('"') || title.contains('\\') || title.chars().any(char::is_control) {
        return Err(AppError::config_error(format!(
            "Invalid page title '{}': must not contain quotes, backslashes, or control characters",
            title
        )));
    }
    if title.contains("${{") {
        return Err(AppError::config_error(format!(
            "Invalid page title '{}': must not contain '${{{{'",
            title
        )));
    }
    Ok(())
}

impl Default for ProjectConfig {
    fn default() -> Self {
        let name = ProjectName(DEFAULT_PROJECT_NAME.to_string());
        let base_path = BasePath::for_project(&name);
        Self { name, title: DEFAULT_TITLE.to_string(), base_path }
    }
}
