//! Path resolution for journey state files
//!
//! Everything lives under a `.journey` directory at the journey root.

use std::path::{Path, PathBuf};

use crate::errors::{JourneyError, Result};
use crate::schemas::ModuleId;

const JOURNEY_DIR: &str = ".journey";

/// Find the closest directory at or above `start_cwd` that contains `.journey`.
///
/// # Errors
/// * `FileNotFound` - If no ancestor holds a `.journey` directory
pub fn find_journey_root(start_cwd: &Path) -> Result<PathBuf> {
    let mut current = start_cwd
        .canonicalize()
        .map_err(|e| JourneyError::FileNotFound(format!("Cannot resolve path: {}", e)))?;

    loop {
        if get_journey_dir(&current).is_dir() {
            return Ok(current);
        }

        match current.parent() {
            Some(parent) if parent != current => {
                current = parent.to_path_buf();
            }
            _ => {
                return Err(JourneyError::FileNotFound(
                    "Could not find a .journey directory (run `journey init` first)".to_string(),
                ));
            }
        }
    }
}

/// Resolve the current working directory, optionally using an override.
pub fn resolve_cwd(cwd_option: Option<&Path>) -> PathBuf {
    match cwd_option {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}

pub fn get_journey_dir(root: &Path) -> PathBuf {
    root.join(JOURNEY_DIR)
}

pub fn get_config_path(root: &Path) -> PathBuf {
    get_journey_dir(root).join("config.json")
}

pub fn get_progress_path(root: &Path) -> PathBuf {
    get_journey_dir(root).join("progress.json")
}

/// Content file for one module inside a content directory
pub fn get_content_path(content_dir: &Path, id: ModuleId) -> PathBuf {
    content_dir.join(format!("module-{}.json", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup_root() -> TempDir {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join(".journey")).unwrap();
        temp
    }

    #[test]
    fn test_find_journey_root_from_root() {
        let temp = setup_root();
        let root = find_journey_root(temp.path()).unwrap();
        assert_eq!(root, temp.path().canonicalize().unwrap());
    }

    #[test]
    fn test_find_journey_root_from_subdir() {
        let temp = setup_root();
        let subdir = temp.path().join("lessons").join("deep");
        std::fs::create_dir_all(&subdir).unwrap();

        let root = find_journey_root(&subdir).unwrap();
        assert_eq!(root, temp.path().canonicalize().unwrap());
    }

    #[test]
    fn test_find_journey_root_not_found() {
        let temp = TempDir::new().unwrap();

        let err = find_journey_root(temp.path()).unwrap_err();
        assert!(matches!(err, JourneyError::FileNotFound(_)));
        assert!(err.to_string().contains("journey init"));
    }

    #[test]
    fn test_paths() {
        let root = PathBuf::from("/srv/course");
        assert_eq!(get_journey_dir(&root), PathBuf::from("/srv/course/.journey"));
        assert_eq!(get_config_path(&root), PathBuf::from("/srv/course/.journey/config.json"));
        assert_eq!(
            get_progress_path(&root),
            PathBuf::from("/srv/course/.journey/progress.json")
        );
        assert_eq!(
            get_content_path(Path::new("/srv/content"), ModuleId(2)),
            PathBuf::from("/srv/content/module-2.json")
        );
    }

    #[test]
    fn test_resolve_cwd() {
        let path = PathBuf::from("/custom/path");
        assert_eq!(resolve_cwd(Some(&path)), path);
        assert!(!resolve_cwd(None).as_os_str().is_empty());
    }
}
