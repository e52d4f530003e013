//! dxpack: scaffold a Dioxus web demo, build it, and package it for static hosting.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;


pub use app::api::{
    BasePath, BuildOutcome, ConfigOverrides, MaterializeOutcome, PackageOutcome, PipelineOutcome,
    PipelineState, PrerequisiteReport, ProjectConfig, ProjectName, WorkflowOutcome, build_at,
    check_at, init_at, install_workflow_at, load_project_config, package_at, run, run_at,
};
pub use domain::AppError;
