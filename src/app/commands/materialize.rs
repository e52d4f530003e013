//! Project materialization: write the embedded file set to disk.

use std::fs;
use std::path::{Path, PathBuf};

use crate::adapters::assets::RenderedAsset;
use crate::adapters::assets::project_assets::render_project_files;
use crate::app::AppContext;
use crate::domain::{AppError, ProjectConfig, paths};
use crate::ports::{CommandRunner, Confirmer, ToolLocator};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterializeOutcome {
    pub project_dir: PathBuf,
    pub files: Vec<PathBuf>,
    /// Whether an existing project directory was deleted first.
    pub replaced: bool,
}

/// Create `<root>/<name>/` with the generated project.
///
/// An existing directory is only deleted after confirmation; declining
/// leaves it exactly as it was.
pub fn execute<R, L, C>(
    ctx: &AppContext<R, L, C>,
    config: &ProjectConfig,
) -> Result<MaterializeOutcome, AppError>
where
    R: CommandRunner,
    L: ToolLocator,
    C: Confirmer,
{
    let project_dir = paths::project_dir(ctx.root(), &config.name);
    let files = render_project_files(config)?;

    let replaced = project_dir.exists();
    if replaced {
        let prompt =
            format!("{} already exists. Delete and recreate it?", project_dir.display());
        if !ctx.confirmer().confirm(&prompt)? {
            return Err(AppError::Declined(format!(
                "{} was left unchanged",
                project_dir.display()
            )));
        }
        fs::remove_dir_all(&project_dir)?;
    }

    fs::create_dir_all(&project_dir)?;
    let files = write_assets(&project_dir, &files)?;

    Ok(MaterializeOutcome { project_dir, files, replaced })
}

/// Write rendered assets under `dir`, replacing whole files.
pub(crate) fn write_assets(dir: &Path, files: &[RenderedAsset]) -> Result<Vec<PathBuf>, AppError> {
    let mut written = Vec::with_capacity(files.len());

    for file in files {
        let target = file.path.split('/').fold(dir.to_path_buf(), |path, part| path.join(part));
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&target, &file.content)?;
        if file.executable {
            set_executable(&target)?;
        }
        written.push(target);
    }

    Ok(written)
}

fn set_executable(path: &Path) -> Result<(), AppError> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(path)?.permissions();
        perms.set_mode(0o755);
        fs::set_permissions(path, perms)?;
    }
    #[cfg(not(unix))]
    let _ = path;
    Ok(())
}
