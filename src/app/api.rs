//! API Facade for the application.
//!
//! Each function wires the process-backed adapters into an `AppContext`
//! rooted at an explicit directory and runs one command. Callers that need
//! different ports build their own `AppContext` and call the stage modules
//! under `app::commands` directly.

use std::path::{Path, PathBuf};

use crate::adapters::dialoguer_confirmer::{AssumeYes, DialoguerConfirmer};
use crate::adapters::path_locator::PathToolLocator;
use crate::adapters::process_runner::ProcessCommandRunner;
use crate::app::{
    AppContext,
    commands::{build, check, materialize, package, pipeline, workflow},
};
use crate::domain::{Tool, paths};
use crate::ports::{Confirmer, ToolLocator};

pub use crate::app::commands::build::BuildOutcome;
pub use crate::app::commands::materialize::MaterializeOutcome;
pub use crate::app::commands::package::PackageOutcome;
pub use crate::app::commands::pipeline::PipelineOutcome;
pub use crate::app::commands::workflow::WorkflowOutcome;
pub use crate::app::config::{ConfigOverrides, load_project_config};
pub use crate::domain::{
    AppError, BasePath, PipelineState, PrerequisiteReport, ProjectConfig, ProjectName,
};

type SystemContext = AppContext<ProcessCommandRunner, PathToolLocator, Box<dyn Confirmer>>;

/// Create an `AppContext` backed by real processes and `PATH` lookups.
fn create_context(root: PathBuf, assume_yes: bool) -> SystemContext {
    let confirmer: Box<dyn Confirmer> =
        if assume_yes { Box::new(AssumeYes) } else { Box::new(DialoguerConfirmer::new()) };
    AppContext::new(root, ProcessCommandRunner::new(), PathToolLocator::new(), confirmer)
}

/// Run the whole pipeline under the current directory.
pub fn run(config: &ProjectConfig, assume_yes: bool) -> Result<PipelineOutcome, AppError> {
    run_at(std::env::current_dir()?, config, assume_yes)
}

/// Check, generate, build and package under `root`.
pub fn run_at(
    root: impl Into<PathBuf>,
    config: &ProjectConfig,
    assume_yes: bool,
) -> Result<PipelineOutcome, AppError> {
    let ctx = create_context(root.into(), assume_yes);
    pipeline::execute(&ctx, config)
}

/// Probe the toolchain, installing what can be installed.
pub fn check_at(root: impl Into<PathBuf>) -> Result<PrerequisiteReport, AppError> {
    let ctx = create_context(root.into(), false);
    check::execute(&ctx)
}

/// Write the project directory only.
pub fn init_at(
    root: impl Into<PathBuf>,
    config: &ProjectConfig,
    assume_yes: bool,
) -> Result<MaterializeOutcome, AppError> {
    let ctx = create_context(root.into(), assume_yes);
    materialize::execute(&ctx, config)
}

/// Build a project that was already generated under `root`.
pub fn build_at(
    root: impl Into<PathBuf>,
    config: &ProjectConfig,
) -> Result<BuildOutcome, AppError> {
    let ctx = create_context(root.into(), false);
    build::execute(&ctx, config)
}

/// Package an existing build output. Skips archiving when `zip` is not on `PATH`.
pub fn package_at(
    root: impl Into<PathBuf>,
    config: &ProjectConfig,
) -> Result<PackageOutcome, AppError> {
    let ctx = create_context(root.into(), false);
    let output_dir = build_output_dir(ctx.root(), config);
    let archiver_available = ctx.locator().locate(Tool::Zip.program()).is_some();
    package::execute(&ctx, config, &output_dir, archiver_available)
}

/// Install the dogfooding workflow into the repository at `root`.
pub fn install_workflow_at(
    root: impl Into<PathBuf>,
    config: &ProjectConfig,
    assume_yes: bool,
) -> Result<WorkflowOutcome, AppError> {
    let ctx = create_context(root.into(), assume_yes);
    workflow::install(&ctx, config)
}

fn build_output_dir(root: &Path, config: &ProjectConfig) -> PathBuf {
    paths::build_output_dir(&paths::project_dir(root, &config.name), &config.name)
}
