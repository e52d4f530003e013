use serde::Serialize;

use super::AppError;

/// Progress of a single pipeline run. Transitions only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PipelineState {
    Start,
    Checked,
    Materialized,
    Built,
    Packaged,
    Done,
    Aborted,
}

impl PipelineState {
    pub fn label(self) -> &'static str {
        match self {
            PipelineState::Start => "start",
            PipelineState::Checked => "checked",
            PipelineState::Materialized => "materialized",
            PipelineState::Built => "built",
            PipelineState::Packaged => "packaged",
            PipelineState::Done => "done",
            PipelineState::Aborted => "aborted",
        }
    }

    /// The step that leads into this state, for messages like "aborted during build".
    pub fn step(self) -> &'static str {
        match self {
            PipelineState::Start => "startup",
            PipelineState::Checked => "prerequisite check",
            PipelineState::Materialized => "project generation",
            PipelineState::Built => "build",
            PipelineState::Packaged => "packaging",
            PipelineState::Done => "completion",
            PipelineState::Aborted => "abort",
        }
    }

    pub fn next(self) -> Option<PipelineState> {
        match self {
            PipelineState::Start => Some(PipelineState::Checked),
            PipelineState::Checked => Some(PipelineState::Materialized),
            PipelineState::Materialized => Some(PipelineState::Built),
            PipelineState::Built => Some(PipelineState::Packaged),
            PipelineState::Packaged => Some(PipelineState::Done),
            PipelineState::Done | PipelineState::Aborted => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, PipelineState::Done | PipelineState::Aborted)
    }

    /// Move to `to`, which must be the next state or `Aborted`.
    pub fn advance(self, to: PipelineState) -> Result<PipelineState, AppError> {
        let allowed = match to {
            PipelineState::Aborted => !self.is_terminal(),
            _ => self.next() == Some(to),
        };

        if allowed {
            Ok(to)
        } else {
            Err(AppError::InternalError(format!(
                "Invalid pipeline transition {} -> {}",
                self.label(),
                to.label()
            )))
        }
    }
}
