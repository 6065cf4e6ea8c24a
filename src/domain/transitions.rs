//! Completion transition logic
//!
//! Pure functions for applying a module completion to a module list.

use crate::errors::{JourneyError, Result};
use crate::schemas::{Module, ModuleId, ModuleStatus};

/// What a completion changed, used to drive auto-advance and finishing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionOutcome {
    /// The module that was completed
    pub module_id: ModuleId,

    /// False when the module was already completed
    pub newly_completed: bool,

    /// The following module, if it went from locked to unlocked
    pub unlocked: Option<ModuleId>,

    /// Every module is now completed
    pub all_completed: bool,

    /// Module to make active next, if any
    pub advance_to: Option<ModuleId>,
}

/// Result of a successful completion
#[derive(Debug, Clone)]
pub struct CompletionTransition {
    /// The module list after the completion
    pub next_modules: Vec<Module>,

    pub outcome: CompletionOutcome,
}

/// Pure function that applies a completion to a module list.
///
/// This function:
/// - Never mutates the input slice
/// - Marks `id` completed (a no-op when it already is), whatever its status
/// - Unlocks the module with id `id + 1` if it is locked
/// - Reports whether every module is completed, and otherwise which
///   module to auto-advance to
///
/// The following module is found by id, not by position.
///
/// # Errors
/// * `UnknownModule` - If no module has the given id
pub fn apply_completion(modules: &[Module], id: ModuleId) -> Result<CompletionTransition> {
    let target = modules
        .iter()
        .find(|m| m.id == id)
        .ok_or(JourneyError::UnknownModule(id))?;

    let newly_completed = !target.is_completed();
    let next_id = id.next();
    let mut unlocked = None;

    let mut next_modules = Vec::with_capacity(modules.len());
    for module in modules {
        if module.id == id {
            next_modules.push(module.clone().with_status(ModuleStatus::Completed));
        } else if Some(module.id) == next_id && module.is_locked() {
            unlocked = Some(module.id);
            next_modules.push(module.clone().with_status(ModuleStatus::Unlocked));
        } else {
            next_modules.push(module.clone());
        }
    }

    let all_completed = next_modules.iter().all(Module::is_completed);

    let advance_to = if all_completed {
        None
    } else {
        next_id.and_then(|next| {
            next_modules
                .iter()
                .find(|m| m.id == next && m.status == ModuleStatus::Unlocked)
                .map(|m| m.id)
        })
    };

    Ok(CompletionTransition {
        next_modules,
        outcome: CompletionOutcome {
            module_id: id,
            newly_completed,
            unlocked,
            all_completed,
            advance_to,
        },
    })
}
