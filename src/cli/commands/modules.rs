//! Modules command - Show the module catalogue

use std::path::Path;

use crate::config::load_config;
use crate::errors::{JourneyError, Result};
use crate::fs::{find_journey_root, resolve_cwd};
use crate::registry::ModuleRegistry;

/// List module definitions in sequence order
pub async fn run(cwd: Option<&Path>, json: bool) -> Result<()> {
    let root = find_journey_root(&resolve_cwd(cwd))?;
    let config = load_config(&root)?;
    let registry = ModuleRegistry::from_config(&config)?;

    if json {
        let out = serde_json::to_string_pretty(registry.definitions())
            .map_err(|e| JourneyError::InvalidJson(e.to_string()))?;
        println!("{}", out);
        return Ok(());
    }

    for def in registry.definitions() {
        println!("{}. {} [{}] - {}", def.id, def.title, def.kind, def.description);
    }
    Ok(())
}
