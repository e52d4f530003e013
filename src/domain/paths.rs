//! Filesystem locations derived from the project configuration.

use std::path::{Path, PathBuf};

use super::ProjectName;

/// Configuration file looked up in the root directory when `--config` is absent.
pub const CONFIG_FILE: &str = "dxpack.toml";

/// Dogfooding workflow location, relative to a repository root.
pub const DOGFOOD_WORKFLOW: &str = ".github/workflows/dxpack-dogfood.yml";

pub fn project_dir(root: &Path, name: &ProjectName) -> PathBuf {
    root.join(name.as_str())
}

/// Directory `dx build --release --platform web` writes the static bundle to.
pub fn build_output_dir(project_dir: &Path, name: &ProjectName) -> PathBuf {
    project_dir.join("target/dx").join(name.as_str()).join("release/web/public")
}

/// Deployment archive, placed next to the project directory.
pub fn archive_path(root: &Path, name: &ProjectName) -> PathBuf {
    root.join(format!("{}.zip", name))
}
