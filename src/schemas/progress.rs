//! Progress schema - Top-level phase and the persisted journey snapshot

use serde::{Deserialize, Serialize};

use super::{ModuleId, ModuleStatus};

/// Top-level phase of a journey
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Waiting for the user to introduce themselves
    #[default]
    Intro,
    /// Working through modules
    InProgress,
    /// Every module done (or skipped to completion)
    Finished,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Intro => write!(f, "intro"),
            Phase::InProgress => write!(f, "in_progress"),
            Phase::Finished => write!(f, "finished"),
        }
    }
}

impl std::str::FromStr for Phase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "intro" => Ok(Phase::Intro),
            "in_progress" => Ok(Phase::InProgress),
            "finished" => Ok(Phase::Finished),
            _ => Err(format!("Unknown phase: {}", s)),
        }
    }
}

/// Status of one module in a saved journey
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleProgress {
    pub id: ModuleId,
    pub status: ModuleStatus,
}

/// Saved journey, written to `.journey/progress.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    /// Schema version for forward compatibility
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Display name, empty before the journey began
    #[serde(default)]
    pub user_name: String,

    pub phase: Phase,

    #[serde(default)]
    pub active_module_id: Option<ModuleId>,

    /// Per-module statuses in sequence order
    pub modules: Vec<ModuleProgress>,

    /// ISO 8601 timestamp of the save
    pub updated_at: String,
}

fn default_schema_version() -> u32 {
    1
}

impl Progress {
    /// Status recorded for a module, if present
    pub fn status_of(&self, id: ModuleId) -> Option<ModuleStatus> {
        self.modules.iter().find(|m| m.id == id).map(|m| m.status)
    }
}
