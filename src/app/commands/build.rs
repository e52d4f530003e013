//! Release build of the generated project.

use std::path::{Path, PathBuf};

use crate::app::AppContext;
use crate::domain::tool::WASM_TARGET;
use crate::domain::{AppError, Invocation, ProjectConfig, paths};
use crate::ports::{CommandRunner, Confirmer, ToolLocator};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOutcome {
    pub output_dir: PathBuf,
}

pub fn check_invocation(project_dir: &Path) -> Invocation {
    Invocation::new("cargo", ["check", "--target", WASM_TARGET]).in_dir(project_dir)
}

pub fn build_invocation(project_dir: &Path) -> Invocation {
    Invocation::new("dx", ["build", "--release", "--platform", "web"]).in_dir(project_dir)
}

/// Type-check for the wasm target, then run the release build.
///
/// The build only counts as successful if the output directory exists afterwards.
pub fn execute<R, L, C>(
    ctx: &AppContext<R, L, C>,
    config: &ProjectConfig,
) -> Result<BuildOutcome, AppError>
where
    R: CommandRunner,
    L: ToolLocator,
    C: Confirmer,
{
    let project_dir = paths::project_dir(ctx.root(), &config.name);
    if !project_dir.join("Cargo.toml").is_file() {
        return Err(AppError::config_error(format!(
            "No generated project found at {}. Run `dxpack init` first.",
            project_dir.display()
        )));
    }

    run_step(ctx, &check_invocation(&project_dir))?;
    run_step(ctx, &build_invocation(&project_dir))?;

    let output_dir = paths::build_output_dir(&project_dir, &config.name);
    if !output_dir.is_dir() {
        return Err(AppError::BuildOutputMissing(output_dir));
    }

    Ok(BuildOutcome { output_dir })
}

fn run_step<R, L, C>(ctx: &AppContext<R, L, C>, invocation: &Invocation) -> Result<(), AppError>
where
    R: CommandRunner,
    L: ToolLocator,
    C: Confirmer,
{
    println!("⚙️  Running `{}`", invocation);
    if ctx.runner().stream(invocation)? {
        Ok(())
    } else {
        Err(AppError::ExternalToolError {
            tool: invocation.label(),
            error: "exited with a non-zero status (see output above)".to_string(),
        })
    }
}
