//! Config schema - Configuration for a journey

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::ModuleDef;

/// Main configuration, read from `.journey/config.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Schema version for forward compatibility
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Pause between the last completion and the finished phase
    #[serde(default = "default_finish_delay_ms")]
    pub finish_delay_ms: u64,

    /// Drop a pending finish when the journey is restarted
    #[serde(default)]
    pub cancel_finish_on_restart: bool,

    /// Replaces the built-in module catalogue when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modules: Option<Vec<ModuleDef>>,

    /// Directory holding `module-<id>.json` content payloads
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_dir: Option<String>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_finish_delay_ms() -> u64 {
    500
}

impl Config {
    pub fn finish_delay(&self) -> Duration {
        Duration::from_millis(self.finish_delay_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            schema_version: 1,
            finish_delay_ms: 500,
            cancel_finish_on_restart: false,
            modules: None,
            content_dir: None,
        }
    }
}
