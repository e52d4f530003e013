//! One module per stage, plus the pipeline that chains them.

pub mod build;
pub mod check;
pub mod materialize;
pub mod package;
pub mod pipeline;
pub mod workflow;
