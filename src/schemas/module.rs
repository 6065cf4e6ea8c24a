//! Module schema - One unit of the learning sequence

use serde::{Deserialize, Serialize};

/// Sequence position of a module (1-indexed, contiguous)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleId(pub u32);

impl ModuleId {
    /// The first module of every journey
    pub const FIRST: ModuleId = ModuleId(1);

    /// The id that follows this one in the sequence
    pub fn next(self) -> Option<ModuleId> {
        self.0.checked_add(1).map(ModuleId)
    }
}

impl std::fmt::Display for ModuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ModuleId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(ModuleId)
            .map_err(|_| format!("Invalid module id: {}", s))
    }
}

/// Progress status of a single module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleStatus {
    /// Not reachable yet
    Locked,
    /// Reachable, objective not met
    Unlocked,
    /// Objective met (terminal)
    Completed,
}

impl std::fmt::Display for ModuleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModuleStatus::Locked => write!(f, "locked"),
            ModuleStatus::Unlocked => write!(f, "unlocked"),
            ModuleStatus::Completed => write!(f, "completed"),
        }
    }
}

impl std::str::FromStr for ModuleStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "locked" => Ok(ModuleStatus::Locked),
            "unlocked" => Ok(ModuleStatus::Unlocked),
            "completed" => Ok(ModuleStatus::Completed),
            _ => Err(format!("Unknown module status: {}", s)),
        }
    }
}

/// Which interactive handler a module mounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleKind {
    Video,
    Quiz,
    Comic,
}

impl std::fmt::Display for ModuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModuleKind::Video => write!(f, "video"),
            ModuleKind::Quiz => write!(f, "quiz"),
            ModuleKind::Comic => write!(f, "comic"),
        }
    }
}

/// Static definition of a module as held by the registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleDef {
    /// Sequence position
    pub id: ModuleId,

    /// Display title
    pub title: String,

    /// Display description
    pub description: String,

    /// Handler reference
    pub kind: ModuleKind,
}

impl ModuleDef {
    pub fn new(id: u32, title: &str, description: &str, kind: ModuleKind) -> Self {
        ModuleDef {
            id: ModuleId(id),
            title: title.to_string(),
            description: description.to_string(),
            kind,
        }
    }

    /// Status this module starts a journey with.
    ///
    /// Only the first module is reachable before anything is completed.
    pub fn initial_status(&self) -> ModuleStatus {
        if self.id == ModuleId::FIRST {
            ModuleStatus::Unlocked
        } else {
            ModuleStatus::Locked
        }
    }
}

/// A module within a running journey
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    pub id: ModuleId,
    pub title: String,
    pub description: String,
    pub kind: ModuleKind,
    pub status: ModuleStatus,
}

impl Module {
    /// Return a new Module with the given status
    pub fn with_status(mut self, status: ModuleStatus) -> Self {
        self.status = status;
        self
    }

    pub fn is_locked(&self) -> bool {
        self.status == ModuleStatus::Locked
    }

    pub fn is_completed(&self) -> bool {
        self.status == ModuleStatus::Completed
    }
}

impl From<&ModuleDef> for Module {
    fn from(def: &ModuleDef) -> Self {
        Module {
            id: def.id,
            title: def.title.clone(),
            description: def.description.clone(),
            kind: def.kind,
            status: def.initial_status(),
        }
    }
}
