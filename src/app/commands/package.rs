//! Packaging of the build output into a flat zip archive.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use crate::app::AppContext;
use crate::domain::{AppError, Invocation, ProjectConfig, paths};
use crate::ports::{CommandRunner, Confirmer, ToolLocator};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackageOutcome {
    Archived { archive: PathBuf, sha256: String },
    /// No archiver available; the raw files are left for manual upload.
    Skipped { output_dir: PathBuf },
}

/// `zip` runs inside the output directory and archives `.`, so entries sit
/// at the archive root instead of under a `public/` folder.
pub fn zip_invocation(archive: &Path, output_dir: &Path) -> Invocation {
    let archive = archive.display().to_string();
    Invocation::new("zip", ["-r", "-q", "-X", archive.as_str(), "."]).in_dir(output_dir)
}

/// Archive `output_dir` to `<root>/<name>.zip`, replacing any previous archive.
pub fn execute<R, L, C>(
    ctx: &AppContext<R, L, C>,
    config: &ProjectConfig,
    output_dir: &Path,
    archiver_available: bool,
) -> Result<PackageOutcome, AppError>
where
    R: CommandRunner,
    L: ToolLocator,
    C: Confirmer,
{
    if !output_dir.is_dir() {
        return Err(AppError::BuildOutputMissing(output_dir.to_path_buf()));
    }

    if !archiver_available {
        return Ok(PackageOutcome::Skipped { output_dir: output_dir.to_path_buf() });
    }

    let archive = std::path::absolute(paths::archive_path(ctx.root(), &config.name))?;
    if archive.exists() {
        fs::remove_file(&archive)?;
    }

    let invocation = zip_invocation(&archive, output_dir);
    let output = ctx.runner().capture(&invocation)?;
    if !output.success {
        let details =
            if output.stderr.is_empty() { "Unknown error".to_string() } else { output.stderr };
        return Err(AppError::external(invocation.label(), details));
    }

    if !archive.is_file() {
        return Err(AppError::ArchiveMissing(archive));
    }

    let sha256 = file_sha256(&archive)?;
    Ok(PackageOutcome::Archived { archive, sha256 })
}

fn file_sha256(path: &Path) -> Result<String, AppError> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    io::copy(&mut file, &mut hasher)?;
    Ok(hasher.finalize().iter().map(|byte| format!("{:02x}", byte)).collect())
}
