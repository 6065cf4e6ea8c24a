//! Module registry - the fixed, ordered catalogue of modules
//!
//! The registry is built once and never changes afterwards. It hands out
//! fresh copies of the initial module list and tells presentation which
//! handler kind to mount for a module.

use crate::domain::validate_definitions;
use crate::errors::{JourneyError, Result};
use crate::schemas::{Config, Module, ModuleDef, ModuleId, ModuleKind};

/// Ordered catalogue of module definitions.
///
/// Ids are contiguous from 1; construction rejects anything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleRegistry {
    defs: Vec<ModuleDef>,
}

impl ModuleRegistry {
    /// Build a registry from definitions in sequence order.
    ///
    /// # Errors
    /// * `InvalidRegistry` - If the list is empty or ids are not 1..=n in order
    pub fn new(defs: Vec<ModuleDef>) -> Result<Self> {
        validate_definitions(&defs)?;
        Ok(ModuleRegistry { defs })
    }

    /// The built-in three-step catalogue: an animation, a quiz and a comic.
    pub fn builtin() -> Self {
        ModuleRegistry {
            defs: vec![
                ModuleDef::new(1, "Info Capsule", "Watch the animation", ModuleKind::Video),
                ModuleDef::new(
                    2,
                    "Fun Quiz",
                    "\"Who Wants to Be a Millionaire\" style",
                    ModuleKind::Quiz,
                ),
                ModuleDef::new(3, "Comic World", "Read the story", ModuleKind::Comic),
            ],
        }
    }

    /// Use the catalogue from the config, or the built-in one when unset.
    pub fn from_config(config: &Config) -> Result<Self> {
        match &config.modules {
            Some(defs) => Self::new(defs.clone()),
            None => Ok(Self::builtin()),
        }
    }

    /// Fresh module list with every module at its starting status.
    pub fn initial_snapshot(&self) -> Vec<Module> {
        self.defs.iter().map(Module::from).collect()
    }

    /// Handler kind presentation should mount for a module.
    ///
    /// # Errors
    /// * `UnknownModule` - If the id is not in the registry
    pub fn handler_for(&self, id: ModuleId) -> Result<ModuleKind> {
        self.get(id)
            .map(|def| def.kind)
            .ok_or(JourneyError::UnknownModule(id))
    }

    pub fn get(&self, id: ModuleId) -> Option<&ModuleDef> {
        self.defs.iter().find(|def| def.id == id)
    }

    pub fn contains(&self, id: ModuleId) -> bool {
        self.get(id).is_some()
    }

    pub fn definitions(&self) -> &[ModuleDef] {
        &self.defs
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}

impl Default for ModuleRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
