//! File system utilities
//!
//! Path resolution under `.journey` and JSON file operations.

mod json;
mod paths;

pub use json::{
    read_config, read_json, read_progress, write_config, write_json, write_progress,
};
pub use paths::{
    find_journey_root, get_config_path, get_content_path, get_journey_dir, get_progress_path,
    resolve_cwd,
};
