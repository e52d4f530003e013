pub mod command;
pub mod error;
pub mod paths;
pub mod pipeline;
pub mod project;
pub mod tool;

pub use command::{CommandOutput, Invocation};
pub use error::AppError;
pub use pipeline::PipelineState;
pub use project::{BasePath, ProjectConfig, ProjectName};
pub use tool::{Capability, PrerequisiteReport, Requirement, Tool, ToolStatus};
