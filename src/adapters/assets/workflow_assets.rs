//! Embedded GitHub Actions workflow that regenerates the demo on every push.

use include_dir::{Dir, include_dir};
use minijinja::context;

use crate::domain::tool::DX_VERSION_SERIES;
use crate::domain::{AppError, ProjectConfig};

use super::asset_collect::collect_asset_sources;
use super::template_engine::{RenderedAsset, render_all};

static WORKFLOW_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/workflow");

/// Render the workflow files and check that each one is valid YAML.
pub fn render_workflow_files(config: &ProjectConfig) -> Result<Vec<RenderedAsset>, AppError> {
    let sources = collect_asset_sources(&WORKFLOW_DIR)?;
    let ctx = context! {
        name => config.name.as_str(),
        title => config.title.as_str(),
        base_path => config.base_path.as_str(),
        dx_version => DX_VERSION_SERIES,
    };
    let files = render_all(&sources, &ctx)?;

    for file in &files {
        serde_yaml::from_str::<serde_yaml::Value>(&file.content).map_err(|e| {
            let message = format!("Rendered workflow {} is not valid YAML: {}", file.path, e);
            AppError::InternalError(message)
        })?;
    }

    Ok(files)
}
