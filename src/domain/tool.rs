//! External tools the pipeline depends on and their probe results.

use serde::Serialize;

use super::Invocation;

pub const WASM_TARGET: &str = "wasm32-unknown-unknown";

/// Dioxus CLI release series the generated project is written against.
pub const DX_VERSION_SERIES: &str = "0.6";

/// How the pipeline reacts when a tool is unavailable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Requirement {
    /// Abort with remediation instructions.
    Mandatory,
    /// Install automatically, then verify again.
    Installable,
    /// Warn and degrade the dependent stage.
    Optional,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tool {
    Cargo,
    WasmTarget,
    DioxusCli,
    Zip,
}

impl Tool {
    /// Probe order. Cargo comes first so nothing is installed without it.
    pub const ALL: [Tool; 4] = [Tool::Cargo, Tool::WasmTarget, Tool::DioxusCli, Tool::Zip];

    pub fn label(self) -> &'static str {
        match self {
            Tool::Cargo => "cargo",
            Tool::WasmTarget => "wasm32-unknown-unknown target",
            Tool::DioxusCli => "dioxus-cli (dx)",
            Tool::Zip => "zip",
        }
    }

    pub fn requirement(self) -> Requirement {
        match self {
            Tool::Cargo => Requirement::Mandatory,
            Tool::WasmTarget | Tool::DioxusCli => Requirement::Installable,
            Tool::Zip => Requirement::Optional,
        }
    }

    /// Program that must be on `PATH` to probe this tool.
    pub fn program(self) -> &'static str {
        match self {
            Tool::Cargo => "cargo",
            Tool::WasmTarget => "rustup",
            Tool::DioxusCli => "dx",
            Tool::Zip => "zip",
        }
    }

    /// Command whose output identifies the installed version or state.
    pub fn probe_command(self) -> Option<Invocation> {
        match self {
            Tool::Cargo => Some(Invocation::new("cargo", ["--version"])),
            Tool::WasmTarget => Some(Invocation::new("rustup", ["target", "list", "--installed"])),
            Tool::DioxusCli => Some(Invocation::new("dx", ["--version"])),
            Tool::Zip => None,
        }
    }

    pub fn required_version(self) -> Option<&'static str> {
        match self {
            Tool::DioxusCli => Some(DX_VERSION_SERIES),
            _ => None,
        }
    }

    pub fn install_command(self) -> Option<Invocation> {
        match self {
            Tool::WasmTarget => Some(Invocation::new("rustup", ["target", "add", WASM_TARGET])),
            Tool::DioxusCli => Some(Invocation::new(
                "cargo",
                [
                    "install".to_string(),
                    "dioxus-cli".to_string(),
                    "--locked".to_string(),
                    "--version".to_string(),
                    format!("^{}", DX_VERSION_SERIES),
                ],
            )),
            Tool::Cargo | Tool::Zip => None,
        }
    }

    /// What the user can do about a missing tool. Installable tools get the
    /// exact command `check` would have run.
    pub fn remedy(self) -> String {
        if let Some(install) = self.install_command() {
            return format!("Run: {}", install);
        }
        match self {
            Tool::Cargo => "Install the Rust toolchain from https://rustup.rs:\n  \
                curl --proto '=https' --tlsv1.2 -sSf https://sh.rustup.rs | sh"
                .to_string(),
            _ => "Install zip with your system package manager to enable packaging.".to_string(),
        }
    }

    /// Interpret the probe command's stdout.
    pub fn assess(self, probe_stdout: &str) -> Capability {
        match self {
            Tool::WasmTarget => {
                if probe_stdout.lines().any(|line| line.trim() == WASM_TARGET) {
                    Capability::Present { version: None }
                } else {
                    Capability::Absent
                }
            }
            _ => {
                let version = extract_version(probe_stdout);
                match (self.required_version(), version) {
                    (Some(required), Some(found)) if !version_in_series(&found, required) => {
                        Capability::WrongVersion { found, required: required.to_string() }
                    }
                    (Some(required), None) => Capability::WrongVersion {
                        found: probe_stdout.trim().to_string(),
                        required: required.to_string(),
                    },
                    (_, version) => Capability::Present { version },
                }
            }
        }
    }
}

/// Probe result for one tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum Capability {
    Present { version: Option<String> },
    Absent,
    WrongVersion { found: String, required: String },
}

impl Capability {
    pub fn is_present(&self) -> bool {
        matches!(self, Capability::Present { .. })
    }

    pub fn describe(&self) -> String {
        match self {
            Capability::Present { version: Some(v) } => format!("present ({})", v),
            Capability::Present { version: None } => "present".to_string(),
            Capability::Absent => "was not found".to_string(),
            Capability::WrongVersion { found, required } => {
                format!("has version {} (need {}.x)", found, required)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolStatus {
    pub tool: Tool,
    pub requirement: Requirement,
    pub capability: Capability,
    /// Whether dxpack installed the tool during this check.
    pub installed: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PrerequisiteReport {
    pub entries: Vec<ToolStatus>,
}

impl PrerequisiteReport {
    pub fn status(&self, tool: Tool) -> Option<&ToolStatus> {
        self.entries.iter().find(|entry| entry.tool == tool)
    }

    /// Packaging degrades to "print the output path" without an archiver.
    pub fn archiver_available(&self) -> bool {
        self.status(Tool::Zip).is_some_and(|entry| entry.capability.is_present())
    }
}

/// First whitespace-separated token that starts with a digit, e.g. `0.6.3`
/// from `dioxus 0.6.3 (fc1f1c2)`.
pub fn extract_version(output: &str) -> Option<String> {
    output
        .split_whitespace()
        .find(|token| token.starts_with(|c: char| c.is_ascii_digit()))
        .map(|token| token.trim_end_matches(',').to_string())
}

fn version_in_series(version: &str, series: &str) -> bool {
    match version.strip_prefix(series) {
        Some(rest) => rest.is_empty() || rest.starts_with('.') || rest.starts_with('-'),
        None => false,
    }
}
