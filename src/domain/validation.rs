//! Validation rules for user input, selections and module lists

use std::collections::HashSet;

use crate::errors::{JourneyError, Result};
use crate::schemas::{Module, ModuleDef, ModuleId, ModuleStatus, Phase};

/// Result of a validation check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// Whether the validation passed
    pub valid: bool,

    /// Reason for failure (if valid is false)
    pub reason: Option<String>,
}

impl ValidationResult {
    /// Create a successful validation result
    pub fn success() -> Self {
        ValidationResult {
            valid: true,
            reason: None,
        }
    }

    /// Create a failed validation result
    pub fn failure(reason: impl Into<String>) -> Self {
        ValidationResult {
            valid: false,
            reason: Some(reason.into()),
        }
    }
}

/// Validate a display name and return it trimmed.
///
/// # Errors
/// * `Validation` - If the name is empty after trimming whitespace
pub fn validate_user_name(name: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(JourneyError::Validation("name must not be empty".to_string()));
    }
    Ok(trimmed.to_string())
}

/// Check that a module may become the active module.
///
/// # Errors
/// * `UnknownModule` - If no module has the given id
/// * `NotAllowed` - If the module is locked
pub fn validate_selection(modules: &[Module], id: ModuleId) -> Result<()> {
    let module = modules
        .iter()
        .find(|m| m.id == id)
        .ok_or(JourneyError::UnknownModule(id))?;

    if module.is_locked() {
        return Err(JourneyError::NotAllowed(format!("module {} is locked", id)));
    }
    Ok(())
}

/// Check that module ids run 1, 2, 3, ... in list order
fn check_contiguous_ids(ids: impl Iterator<Item = ModuleId>) -> ValidationResult {
    for (position, id) in ids.enumerate() {
        let expected = ModuleId(position as u32 + 1);
        if id != expected {
            return ValidationResult::failure(format!(
                "module at position {} has id {}, expected {}",
                position + 1,
                id,
                expected
            ));
        }
    }
    ValidationResult::success()
}

/// Validate a registry definition list.
///
/// Ids must be unique and contiguous from 1, in order. Auto-advance looks up
/// `id + 1`, so a gap would strand the journey.
///
/// # Errors
/// * `InvalidRegistry` - If the list is empty or the ids are not contiguous
pub fn validate_definitions(defs: &[ModuleDef]) -> Result<()> {
    if defs.is_empty() {
        return Err(JourneyError::InvalidRegistry(
            "registry must define at least one module".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for def in defs {
        if !seen.insert(def.id) {
            return Err(JourneyError::InvalidRegistry(format!(
                "duplicate module id {}",
                def.id
            )));
        }
    }

    let check = check_contiguous_ids(defs.iter().map(|d| d.id));
    if !check.valid {
        return Err(JourneyError::InvalidRegistry(
            check.reason.unwrap_or_else(|| "ids are not contiguous".to_string()),
        ));
    }
    Ok(())
}

/// Check the module list invariants.
///
/// - ids are contiguous from 1
/// - module 1 is never locked
/// - an unlocked module follows a completed module (or is module 1)
/// - a locked module follows a module that is not completed
///
/// Completed modules may sit anywhere: any module can be completed directly.
/// A module only unlocks when its predecessor completes, and completion
/// never regresses, so these local rules hold for every reachable list.
pub fn check_module_invariants(modules: &[Module]) -> ValidationResult {
    if modules.is_empty() {
        return ValidationResult::failure("module list is empty");
    }

    let ids = check_contiguous_ids(modules.iter().map(|m| m.id));
    if !ids.valid {
        return ids;
    }

    if modules[0].is_locked() {
        return ValidationResult::failure("module 1 must not be locked");
    }

    for pair in modules.windows(2) {
        let (previous, module) = (&pair[0], &pair[1]);
        match module.status {
            ModuleStatus::Unlocked if !previous.is_completed() => {
                return ValidationResult::failure(format!(
                    "module {} is unlocked but module {} is {}",
                    module.id, previous.id, previous.status
                ));
            }
            ModuleStatus::Locked if previous.is_completed() => {
                return ValidationResult::failure(format!(
                    "module {} is locked although module {} is completed",
                    module.id, previous.id
                ));
            }
            _ => {}
        }
    }

    ValidationResult::success()
}

/// Check that the active module agrees with the phase and the module list.
///
/// A finished journey may have no active module when it was finished
/// straight from the intro.
pub fn check_active_module(
    phase: Phase,
    active: Option<ModuleId>,
    modules: &[Module],
) -> ValidationResult {
    match (phase, active) {
        (Phase::Intro, None) => ValidationResult::success(),
        (Phase::Intro, Some(id)) => {
            ValidationResult::failure(format!("active module {} set before the journey began", id))
        }
        (Phase::Finished, None) => ValidationResult::success(),
        (_, None) => ValidationResult::failure(format!("phase {} requires an active module", phase)),
        (_, Some(id)) => match modules.iter().find(|m| m.id == id) {
            None => ValidationResult::failure(format!("active module {} does not exist", id)),
            Some(m) if m.is_locked() => {
                ValidationResult::failure(format!("active module {} is locked", id))
            }
            Some(_) => ValidationResult::success(),
        },
    }
}
