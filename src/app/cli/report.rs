//! Human-readable summaries printed after each command.

use crate::app::api::{BuildOutcome, MaterializeOutcome, PackageOutcome, WorkflowOutcome};
use crate::domain::ProjectConfig;

pub fn materialized(outcome: &MaterializeOutcome) {
    let verb = if outcome.replaced { "Recreated" } else { "Created" };
    println!("✅ {} {} ({} files)", verb, outcome.project_dir.display(), outcome.files.len());
}

pub fn built(outcome: &BuildOutcome) {
    println!("✅ Build output ready at {}", outcome.output_dir.display());
}

pub fn packaged(outcome: &PackageOutcome, config: &ProjectConfig) {
    match outcome {
        PackageOutcome::Archived { archive, sha256 } => {
            println!("✅ Packaged {}", archive.display());
            println!("  sha256: {}", sha256);
            println!(
                "ℹ️  Unpack it into a folder served at {} on your static host",
                config.base_path
            );
        }
        PackageOutcome::Skipped { output_dir } => {
            println!("ℹ️  zip is not installed; no archive was created");
            println!(
                "ℹ️  Upload the contents of {} to a folder served at {}",
                output_dir.display(),
                config.base_path
            );
        }
    }
}

pub fn workflow_installed(outcome: &WorkflowOutcome) {
    let verb = if outcome.replaced { "Replaced" } else { "Installed" };
    for file in &outcome.files {
        println!("✅ {} {}", verb, file.display());
    }
}
