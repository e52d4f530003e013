//! Full run: check, materialize, build, package.

use crate::app::AppContext;
use crate::app::commands::build::BuildOutcome;
use crate::app::commands::materialize::MaterializeOutcome;
use crate::app::commands::package::PackageOutcome;
use crate::app::commands::{build, check, materialize, package};
use crate::domain::{AppError, PipelineState, PrerequisiteReport, ProjectConfig, paths};
use crate::ports::{CommandRunner, Confirmer, ToolLocator};

#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    pub config: ProjectConfig,
    pub prerequisites: PrerequisiteReport,
    pub project: MaterializeOutcome,
    pub build: BuildOutcome,
    pub package: PackageOutcome,
    pub state: PipelineState,
}

/// Run every stage in order. The first failure aborts the run; earlier
/// stages are not rolled back.
pub fn execute<R, L, C>(
    ctx: &AppContext<R, L, C>,
    config: &ProjectConfig,
) -> Result<PipelineOutcome, AppError>
where
    R: CommandRunner,
    L: ToolLocator,
    C: Confirmer,
{
    let prompt = format!(
        "Generate {} (base path {}), build it with dx, and package {}?",
        paths::project_dir(ctx.root(), &config.name).display(),
        config.base_path,
        paths::archive_path(ctx.root(), &config.name).display(),
    );
    if !ctx.confirmer().confirm(&prompt)? {
        return Err(AppError::Declined("nothing was changed".to_string()));
    }

    let mut state = PipelineState::Start;

    let prerequisites = stage(&mut state, || check::execute(ctx))?;
    println!("✅ Toolchain ready");

    let project = stage(&mut state, || materialize::execute(ctx, config))?;
    println!("✅ Generated {} ({} files)", project.project_dir.display(), project.files.len());

    let build = stage(&mut state, || build::execute(ctx, config))?;
    println!("✅ Built web bundle at {}", build.output_dir.display());

    let package = stage(&mut state, || {
        package::execute(ctx, config, &build.output_dir, prerequisites.archiver_available())
    })?;

    state = state.advance(PipelineState::Done)?;

    Ok(PipelineOutcome { config: config.clone(), prerequisites, project, build, package, state })
}

fn stage<T>(
    state: &mut PipelineState,
    run: impl FnOnce() -> Result<T, AppError>,
) -> Result<T, AppError> {
    let next = state.next().ok_or_else(|| {
        AppError::InternalError(format!("No stage follows '{}'", state.label()))
    })?;

    match run() {
        Ok(value) => {
            *state = state.advance(next)?;
            Ok(value)
        }
        Err(err) => {
            *state = state.advance(PipelineState::Aborted)?;
            Err(AppError::Aborted { stage: next, source: Box::new(err) })
        }
    }
}
