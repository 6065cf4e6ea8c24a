//! JSON file operations
//!
//! Reads map a missing file to `FileNotFound` and bad JSON or a schema
//! mismatch to `InvalidJson`. Writes are atomic.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::{JourneyError, Result};
use crate::schemas::{Config, Progress};

use super::paths::{get_config_path, get_progress_path};

/// Read and deserialize a JSON file.
///
/// # Errors
/// * `FileNotFound` - If the file does not exist
/// * `InvalidJson` - If the file is not valid JSON for `T`
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            JourneyError::FileNotFound(format!("File not found: {}", path.display()))
        } else {
            JourneyError::Io(e)
        }
    })?;

    serde_json::from_str(&content).map_err(|e| {
        JourneyError::InvalidJson(format!("Invalid JSON in file {}: {}", path.display(), e))
    })
}

/// Write a value as pretty JSON, via a temp file and rename.
pub fn write_json<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    let content =
        serde_json::to_string_pretty(data).map_err(|e| JourneyError::InvalidJson(e.to_string()))?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("json.tmp");
    let mut file = fs::File::create(&temp_path)?;
    file.write_all(content.as_bytes())?;
    file.write_all(b"\n")?;
    file.sync_all()?;
    drop(file);

    fs::rename(&temp_path, path)?;

    Ok(())
}

/// Read `.journey/config.json`, or the default config when it is missing.
pub fn read_config(root: &Path) -> Result<Config> {
    let path = get_config_path(root);
    if !path.exists() {
        return Ok(Config::default());
    }
    read_json(&path)
}

pub fn write_config(root: &Path, config: &Config) -> Result<()> {
    write_json(&get_config_path(root), config)
}

/// Read `.journey/progress.json`. `None` means no journey has been saved yet.
pub fn read_progress(root: &Path) -> Result<Option<Progress>> {
    let path = get_progress_path(root);
    if !path.exists() {
        return Ok(None);
    }
    read_json(&path).map(Some)
}

pub fn write_progress(root: &Path, progress: &Progress) -> Result<()> {
    write_json(&get_progress_path(root), progress)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ModuleRegistry;
    use crate::schemas::{ModuleProgress, ModuleStatus, Phase};
    use tempfile::TempDir;

    fn sample_progress() -> Progress {
        Progress {
            schema_version: 1,
            user_name: "Ada".to_string(),
            phase: Phase::InProgress,
            active_module_id: Some(crate::schemas::ModuleId(1)),
            modules: ModuleRegistry::builtin()
                .initial_snapshot()
                .iter()
                .map(|m| ModuleProgress {
                    id: m.id,
                    status: m.status,
                })
                .collect(),
            updated_at: "2026-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_read_json_file_not_found() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nonexistent.json");

        let result: Result<Config> = read_json(&path);
        assert!(matches!(result.unwrap_err(), JourneyError::FileNotFound(_)));
    }

    #[test]
    fn test_read_json_invalid_json() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("invalid.json");
        fs::write(&path, "not valid json {").unwrap();

        let result: Result<Config> = read_json(&path);
        assert!(matches!(result.unwrap_err(), JourneyError::InvalidJson(_)));
    }

    #[test]
    fn test_read_json_schema_mismatch() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("progress.json");
        fs::write(&path, r#"{"phase": "somewhere"}"#).unwrap();

        let result: Result<Progress> = read_json(&path);
        assert!(matches!(result.unwrap_err(), JourneyError::InvalidJson(_)));
    }

    #[test]
    fn test_write_json_creates_parent_dirs_and_no_temp_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("dir").join("config.json");

        write_json(&path, &Config::default()).unwrap();
        assert!(path.exists());
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_read_config_default_when_missing() {
        let temp = TempDir::new().unwrap();
        let config = read_config(temp.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_progress_missing_then_written() {
        let temp = TempDir::new().unwrap();
        assert!(read_progress(temp.path()).unwrap().is_none());

        let progress = sample_progress();
        write_progress(temp.path(), &progress).unwrap();

        let read = read_progress(temp.path()).unwrap().unwrap();
        assert_eq!(read, progress);
        assert_eq!(read.status_of(crate::schemas::ModuleId(1)), Some(ModuleStatus::Unlocked));
    }
}
