use std::path::PathBuf;

/// Port answering whether a program can be found on the search path.
pub trait ToolLocator {
    fn locate(&self, program: &str) -> Option<PathBuf>;
}
