//! Embedded file set for the generated Dioxus project.

use include_dir::{Dir, include_dir};
use minijinja::context;

use crate::domain::tool::DX_VERSION_SERIES;
use crate::domain::{AppError, ProjectConfig};

use super::asset_collect::collect_asset_sources;
use super::template_engine::{RenderedAsset, render_all};

static PROJECT_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/project");

/// Render the project file set for `config`, sorted by path.
///
/// `base_path` is only referenced from `Dioxus.toml`.
pub fn render_project_files(config: &ProjectConfig) -> Result<Vec<RenderedAsset>, AppError> {
    let sources = collect_asset_sources(&PROJECT_DIR)?;
    let ctx = context! {
        name => config.name.as_str(),
        title => config.title.as_str(),
        base_path => config.base_path.as_str(),
        dx_version => DX_VERSION_SERIES,
    };
    render_all(&sources, &ctx)
}
