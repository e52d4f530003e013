mod asset_collect;
mod template_engine;

pub mod project_assets;
pub mod workflow_assets;

pub use template_engine::RenderedAsset;
