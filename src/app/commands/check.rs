//! Prerequisite checks for the external toolchain.

use crate::app::AppContext;
use crate::domain::{AppError, Capability, PrerequisiteReport, Requirement, Tool, ToolStatus};
use crate::ports::{CommandRunner, Confirmer, ToolLocator};

/// Probe every tool in order, installing installable ones that are missing.
///
/// Returns before anything is installed if `cargo` itself is unusable.
pub fn execute<R, L, C>(ctx: &AppContext<R, L, C>) -> Result<PrerequisiteReport, AppError>
where
    R: CommandRunner,
    L: ToolLocator,
    C: Confirmer,
{
    let mut report = PrerequisiteReport::default();

    for tool in Tool::ALL {
        let capability = probe(ctx, tool);
        let requirement = tool.requirement();

        let status = match (requirement, capability) {
            (_, capability @ Capability::Present { .. }) => {
                ToolStatus { tool, requirement, capability, installed: false }
            }
            (Requirement::Mandatory, capability) => {
                return Err(AppError::MissingTool {
                    tool: tool.label().to_string(),
                    problem: capability.describe(),
                    remedy: tool.remedy(),
                });
            }
            (Requirement::Installable, capability) => {
                let capability = install(ctx, tool, &capability)?;
                ToolStatus { tool, requirement, capability, installed: true }
            }
            (Requirement::Optional, capability) => {
                println!(
                    "⚠️  {} {}; packaging will be skipped. {}",
                    tool.label(),
                    capability.describe(),
                    tool.remedy()
                );
                ToolStatus { tool, requirement, capability, installed: false }
            }
        };

        report.entries.push(status);
    }

    Ok(report)
}

/// Failing to run a located program counts as absent, not as an error.
fn probe<R, L, C>(ctx: &AppContext<R, L, C>, tool: Tool) -> Capability
where
    R: CommandRunner,
    L: ToolLocator,
    C: Confirmer,
{
    if ctx.locator().locate(tool.program()).is_none() {
        return Capability::Absent;
    }

    let Some(invocation) = tool.probe_command() else {
        return Capability::Present { version: None };
    };

    match ctx.runner().capture(&invocation) {
        Ok(output) if output.success => tool.assess(&output.stdout),
        _ => Capability::Absent,
    }
}

fn install<R, L, C>(
    ctx: &AppContext<R, L, C>,
    tool: Tool,
    before: &Capability,
) -> Result<Capability, AppError>
where
    R: CommandRunner,
    L: ToolLocator,
    C: Confirmer,
{
    let invocation = tool.install_command().ok_or_else(|| {
        AppError::InternalError(format!("No install command for {}", tool.label()))
    })?;

    if ctx.locator().locate(&invocation.program).is_none() {
        return Err(AppError::InstallFailed {
            tool: tool.label().to_string(),
            details: format!("{} is not available. {}", invocation.program, tool.remedy()),
        });
    }

    println!("⚙️  {} {}; running `{}`", tool.label(), before.describe(), invocation);
    if !ctx.runner().stream(&invocation)? {
        return Err(AppError::InstallFailed {
            tool: tool.label().to_string(),
            details: format!("`{}` exited with an error", invocation),
        });
    }

    let after = probe(ctx, tool);
    if !after.is_present() {
        return Err(AppError::InstallFailed {
            tool: tool.label().to_string(),
            details: format!("still {} after installation", after.describe()),
        });
    }

    println!("✅ Installed {}", tool.label());
    Ok(after)
}
