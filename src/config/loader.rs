//! Configuration loading with defaults

use std::path::{Path, PathBuf};

use crate::domain::validate_definitions;
use crate::errors::{JourneyError, Result};
use crate::fs;
use crate::schemas::Config;

pub const SUPPORTED_SCHEMA_VERSION: u32 = 1;

/// Load `.journey/config.json` from the journey root, falling back to defaults.
///
/// Missing fields take their defaults. A module override is checked with the
/// same rules the registry uses.
///
/// # Errors
/// * `InvalidJson` - If the file cannot be parsed
/// * `ConfigError` - If the schema version is unsupported
/// * `InvalidRegistry` - If the module override breaks the ordering rules
pub fn load_config(root: &Path) -> Result<Config> {
    let config = fs::read_config(root)?;

    if config.schema_version != SUPPORTED_SCHEMA_VERSION {
        return Err(JourneyError::ConfigError(format!(
            "unsupported schema_version {} (expected {})",
            config.schema_version, SUPPORTED_SCHEMA_VERSION
        )));
    }
    if let Some(defs) = &config.modules {
        validate_definitions(defs)?;
    }

    tracing::debug!(
        finish_delay_ms = config.finish_delay_ms,
        custom_modules = config.modules.is_some(),
        "Loaded config"
    );
    Ok(config)
}

/// Content directory from the config, relative paths taken from the journey root
pub fn content_dir(root: &Path, config: &Config) -> Option<PathBuf> {
    config.content_dir.as_ref().map(|dir| {
        let dir = Path::new(dir);
        if dir.is_absolute() {
            dir.to_path_buf()
        } else {
            root.join(dir)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as std_fs;
    use tempfile::TempDir;

    fn write_config(temp: &TempDir, content: &str) {
        let journey_dir = temp.path().join(".journey");
        std_fs::create_dir_all(&journey_dir).unwrap();
        std_fs::write(journey_dir.join("config.json"), content).unwrap();
    }

    #[test]
    fn test_load_config_defaults() {
        let temp = TempDir::new().unwrap();
        std_fs::create_dir(temp.path().join(".journey")).unwrap();

        let config = load_config(temp.path()).unwrap();
        assert_eq!(config.finish_delay_ms, 500);
        assert!(!config.cancel_finish_on_restart);
        assert!(config.modules.is_none());
    }

    #[test]
    fn test_load_config_from_file() {
        let temp = TempDir::new().unwrap();
        write_config(&temp, r#"{"finish_delay_ms": 20, "content_dir": "lessons"}"#);

        let config = load_config(temp.path()).unwrap();
        assert_eq!(config.finish_delay_ms, 20);
        // Default for unspecified field
        assert!(!config.cancel_finish_on_restart);
        assert_eq!(
            content_dir(temp.path(), &config),
            Some(temp.path().join("lessons"))
        );
    }

    #[test]
    fn test_load_config_rejects_unknown_version() {
        let temp = TempDir::new().unwrap();
        write_config(&temp, r#"{"schema_version": 7}"#);

        assert!(matches!(
            load_config(temp.path()),
            Err(JourneyError::ConfigError(_))
        ));
    }

    #[test]
    fn test_load_config_rejects_bad_module_override() {
        let temp = TempDir::new().unwrap();
        write_config(
            &temp,
            r#"{"modules": [{"id": 2, "title": "B", "description": "b", "kind": "quiz"}]}"#,
        );

        assert!(matches!(
            load_config(temp.path()),
            Err(JourneyError::InvalidRegistry(_))
        ));
    }

    #[test]
    fn test_absolute_content_dir_is_kept() {
        let config = Config {
            content_dir: Some("/opt/content".to_string()),
            ..Config::default()
        };
        assert_eq!(
            content_dir(Path::new("/srv/course"), &config),
            Some(PathBuf::from("/opt/content"))
        );
        assert_eq!(content_dir(Path::new("/srv"), &Config::default()), None);
    }
}
