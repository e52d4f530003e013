use std::path::{Path, PathBuf};

use crate::ports::{CommandRunner, Confirmer, ToolLocator};

/// Application context holding dependencies for command execution.
pub struct AppContext<R: CommandRunner, L: ToolLocator, C: Confirmer> {
    root: PathBuf,
    runner: R,
    locator: L,
    confirmer: C,
}

impl<R: CommandRunner, L: ToolLocator, C: Confirmer> AppContext<R, L, C> {
    /// Create a new application context working under `root`.
    pub fn new(root: impl Into<PathBuf>, runner: R, locator: L, confirmer: C) -> Self {
        Self { root: root.into(), runner, locator, confirmer }
    }

    /// Directory the project and archive are created in.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn locator(&self) -> &L {
        &self.locator
    }

    pub fn confirmer(&self) -> &C {
        &self.confirmer
    }
}
