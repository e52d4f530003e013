//! Dogfooding workflow installation.

use std::path::PathBuf;

use crate::adapters::assets::workflow_assets::render_workflow_files;
use crate::app::AppContext;
use crate::app::commands::materialize::write_assets;
use crate::domain::{AppError, ProjectConfig};
use crate::ports::{CommandRunner, Confirmer, ToolLocator};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowOutcome {
    pub files: Vec<PathBuf>,
    pub replaced: bool,
}

/// Write the regeneration workflow under the repository root.
pub fn install<R, L, C>(
    ctx: &AppContext<R, L, C>,
    config: &ProjectConfig,
) -> Result<WorkflowOutcome, AppError>
where
    R: CommandRunner,
    L: ToolLocator,
    C: Confirmer,
{
    let files = render_workflow_files(config)?;

    let existing: Vec<&str> = files
        .iter()
        .map(|file| file.path.as_str())
        .filter(|path| ctx.root().join(path).exists())
        .collect();

    let replaced = !existing.is_empty();
    if replaced {
        let prompt = format!("Overwrite existing workflow {}?", existing.join(", "));
        if !ctx.confirmer().confirm(&prompt)? {
            return Err(AppError::Declined("existing workflow was left unchanged".to_string()));
        }
    }

    let files = write_assets(ctx.root(), &files)?;
    Ok(WorkflowOutcome { files, replaced })
}
