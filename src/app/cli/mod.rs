//! CLI Adapter.

mod check;
mod report;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

use crate::app::api;
use crate::app::config::ConfigOverrides;
use crate::domain::{AppError, ProjectConfig};

#[derive(Parser)]
#[command(name = "dxpack")]
#[command(version)]
#[command(
    about = "Scaffold a Dioxus web demo, build it, and package it for static hosting",
    long_about = None
)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,
    /// Run a single stage instead of the whole pipeline
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args)]
struct GlobalArgs {
    /// Answer yes to every confirmation
    #[arg(short = 'y', long, global = true)]
    yes: bool,
    /// Project name (directory, package and archive name)
    #[arg(short = 'n', long, global = true)]
    name: Option<String>,
    /// URL subpath the site is served from, e.g. /my-demo
    #[arg(short = 'b', long, global = true)]
    base_path: Option<String>,
    /// Page title
    #[arg(short = 't', long, global = true)]
    title: Option<String>,
    /// Configuration file (default: dxpack.toml in the root directory)
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,
    /// Directory to work in (default: current directory)
    #[arg(short = 'C', long, global = true)]
    dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check the toolchain and install missing pieces
    #[clap(visible_alias = "c")]
    Check {
        /// Output format
        #[arg(long, value_enum, default_value_t = check::OutputFormat::Text)]
        format: check::OutputFormat,
    },
    /// Generate the project directory
    #[clap(visible_alias = "i")]
    Init,
    /// Build an already generated project
    #[clap(visible_alias = "b")]
    Build,
    /// Package an existing build output
    #[clap(visible_alias = "p")]
    Package,
    /// Install the GitHub Actions workflow that regenerates the demo on push
    #[clap(visible_alias = "wf")]
    Workflow,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    if let Err(e) = execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn execute(cli: Cli) -> Result<(), AppError> {
    let global = cli.global;
    let root = match &global.dir {
        Some(dir) => resolve_root(dir)?,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Some(Commands::Check { format }) => check::run_check(&root, format),
        Some(Commands::Init) => {
            let config = load_config(&root, &global)?;
            let outcome = api::init_at(&root, &config, global.yes)?;
            report::materialized(&outcome);
            Ok(())
        }
        Some(Commands::Build) => {
            let config = load_config(&root, &global)?;
            let outcome = api::build_at(&root, &config)?;
            report::built(&outcome);
            Ok(())
        }
        Some(Commands::Package) => {
            let config = load_config(&root, &global)?;
            let outcome = api::package_at(&root, &config)?;
            report::packaged(&outcome, &config);
            Ok(())
        }
        Some(Commands::Workflow) => {
            let config = load_config(&root, &global)?;
            let outcome = api::install_workflow_at(&root, &config, global.yes)?;
            report::workflow_installed(&outcome);
            Ok(())
        }
        None => {
            let config = load_config(&root, &global)?;
            let outcome = api::run_at(&root, &config, global.yes)?;
            report::packaged(&outcome.package, &outcome.config);
            Ok(())
        }
    }
}

fn resolve_root(dir: &Path) -> Result<PathBuf, AppError> {
    if !dir.is_dir() {
        return Err(AppError::config_error(format!("Directory not found: {}", dir.display())));
    }
    Ok(dir.to_path_buf())
}

fn load_config(root: &Path, global: &GlobalArgs) -> Result<ProjectConfig, AppError> {
    let overrides = ConfigOverrides {
        name: global.name.clone(),
        title: global.title.clone(),
        base_path: global.base_path.clone(),
    };
    api::load_project_config(root, global.config.as_deref(), &overrides)
}
