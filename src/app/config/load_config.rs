use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::domain::project::{DEFAULT_PROJECT_NAME, DEFAULT_TITLE};
use crate::domain::{AppError, BasePath, ProjectConfig, ProjectName, paths};

/// On-disk shape of `dxpack.toml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub name: Option<String>,
    pub title: Option<String>,
    pub base_path: Option<String>,
}

/// Values given on the command line; these win over the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub name: Option<String>,
    pub title: Option<String>,
    pub base_path: Option<String>,
}

pub fn parse_config_content(content: &str) -> Result<ConfigFile, AppError> {
    Ok(toml::from_str(content)?)
}

/// Resolve the project configuration for `root`.
///
/// An explicit `config_path` must exist. Without one, `<root>/dxpack.toml`
/// is read if present.
pub fn load_project_config(
    root: &Path,
    config_path: Option<&Path>,
    overrides: &ConfigOverrides,
) -> Result<ProjectConfig, AppError> {
    let file = match config_path {
        Some(path) => {
            if !path.is_file() {
                return Err(AppError::config_error(format!(
                    "Configuration file not found: {}",
                    path.display()
                )));
            }
            read_config_file(path)?
        }
        None => {
            let default_path = root.join(paths::CONFIG_FILE);
            if default_path.is_file() {
                read_config_file(&default_path)?
            } else {
                ConfigFile::default()
            }
        }
    };

    resolve(file, overrides)
}

fn read_config_file(path: &Path) -> Result<ConfigFile, AppError> {
    let content = fs::read_to_string(path)?;
    parse_config_content(&content).map_err(|e| match e {
        AppError::TomlParseError(inner) => {
            AppError::config_error(format!("Invalid {}: {}", path.display(), inner))
        }
        other => other,
    })
}

fn resolve(file: ConfigFile, overrides: &ConfigOverrides) -> Result<ProjectConfig, AppError> {
    let name =
        overrides.name.clone().or(file.name).unwrap_or_else(|| DEFAULT_PROJECT_NAME.to_string());
    let name = ProjectName::new(&name)?;

    let title = overrides.title.clone().or(file.title).unwrap_or_else(|| DEFAULT_TITLE.to_string());

    // The default base path follows the resolved name, not the default name.
    let base_path = match overrides.base_path.clone().or(file.base_path) {
        Some(path) => BasePath::new(&path)?,
        None => BasePath::for_project(&name),
    };

    ProjectConfig::new(name, title, base_path)
}
