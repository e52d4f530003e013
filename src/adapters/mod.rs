pub mod assets;
pub mod dialoguer_confirmer;
pub mod path_locator;
pub mod process_runner;
