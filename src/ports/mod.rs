mod command_runner;
mod confirmer;
mod tool_locator;

pub use command_runner::CommandRunner;
pub use confirmer::Confirmer;
pub use tool_locator::ToolLocator;
