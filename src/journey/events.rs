//! Change notifications emitted by a journey

use serde::{Deserialize, Serialize};

use crate::schemas::ModuleId;

/// Emitted after each successful mutation of a journey
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum JourneyEvent {
    /// The user introduced themselves and the first module became active
    Began { user_name: String },
    /// A module was made active
    Selected { module_id: ModuleId },
    /// A module was completed
    ModuleCompleted {
        module_id: ModuleId,
        unlocked: Option<ModuleId>,
        advanced_to: Option<ModuleId>,
        all_completed: bool,
    },
    /// The finished phase will follow after a pause
    FinishScheduled { delay_ms: u64 },
    /// Pending finishes were dropped
    FinishCancelled { count: usize },
    /// The journey reached the finished phase
    Finished,
    /// The journey was replaced by a fresh one
    Restarted,
}
