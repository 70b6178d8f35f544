pub mod app_config;
pub mod manifest;

pub use app_config::Config;
pub use manifest::{JsonManifestSource, ManifestError, ManifestSource};
