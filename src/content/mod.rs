//! Content providers - where module payloads come from
//!
//! The journey never looks at content. Presentation asks a provider for the
//! payload of a module and mounts a handler with it.

mod builtin;
mod dir;

pub use builtin::BuiltinContent;
pub use dir::DirContentProvider;

use std::path::Path;

use crate::config;
use crate::errors::Result;
use crate::schemas::{Config, ModuleContent, ModuleId};

/// Source of module payloads
pub trait ContentProvider {
    /// # Errors
    /// * `ContentNotFound` - If there is no payload for the module
    fn content(&self, id: ModuleId) -> Result<ModuleContent>;
}

/// Provider for a journey root: the configured content directory, or the
/// built-in payloads when none is set.
pub fn provider_for(root: &Path, config: &Config) -> Box<dyn ContentProvider> {
    match config::content_dir(root, config) {
        Some(dir) => Box::new(DirContentProvider::new(dir)),
        None => Box::new(BuiltinContent),
    }
}
