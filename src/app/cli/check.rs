//! Check command implementation.

use std::path::Path;

use clap::ValueEnum;

use crate::domain::{AppError, Capability, PrerequisiteReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

pub fn run_check(root: &Path, format: OutputFormat) -> Result<(), AppError> {
    let report = crate::app::api::check_at(root)?;

    match format {
        OutputFormat::Text => print_text(&report),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report).map_err(|e| {
                AppError::InternalError(format!("Failed to serialize report: {}", e))
            })?;
            println!("{}", json);
        }
    }
    Ok(())
}

fn print_text(report: &PrerequisiteReport) {
    for entry in &report.entries {
        let marker = match entry.capability {
            Capability::Present { .. } => "✅",
            _ => "⚠️ ",
        };
        let suffix = if entry.installed { " [installed]" } else { "" };
        println!("{} {} {}{}", marker, entry.tool.label(), entry.capability.describe(), suffix);
    }

    if !report.archiver_available() {
        println!("ℹ️  Packaging will be skipped until zip is installed");
    }
}
