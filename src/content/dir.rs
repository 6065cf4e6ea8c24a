//! Payloads read from `module-<id>.json` files

use std::path::PathBuf;

use crate::errors::{JourneyError, Result};
use crate::fs::{get_content_path, read_json};
use crate::schemas::{ModuleContent, ModuleId};

use super::ContentProvider;

/// Reads one JSON payload per module from a directory
#[derive(Debug, Clone)]
pub struct DirContentProvider {
    dir: PathBuf,
}

impl DirContentProvider {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        DirContentProvider { dir: dir.into() }
    }

    pub fn dir(&self) -> &std::path::Path {
        &self.dir
    }
}

impl ContentProvider for DirContentProvider {
    fn content(&self, id: ModuleId) -> Result<ModuleContent> {
        let path = get_content_path(&self.dir, id);
        tracing::debug!(module = %id, path = %path.display(), "Reading content");
        read_json(&path).map_err(|e| match e {
            JourneyError::FileNotFound(_) => JourneyError::ContentNotFound(id),
            other => other,
        })
    }
}
