//! Project configuration loading.
//!
//! Values are merged from command-line overrides, an optional `dxpack.toml`
//! and built-in defaults, in that order of precedence.

mod load_config;

pub use load_config::{ConfigFile, ConfigOverrides, load_project_config, parse_config_content};
