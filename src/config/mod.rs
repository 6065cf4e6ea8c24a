//! Configuration loading

mod loader;

pub use loader::{content_dir, load_config, SUPPORTED_SCHEMA_VERSION};
