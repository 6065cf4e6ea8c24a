//! Init command - Create the `.journey` directory

use std::path::Path;

use crate::errors::{JourneyError, Result};
use crate::fs::{get_config_path, get_journey_dir, get_progress_path, resolve_cwd, write_config};
use crate::schemas::Config;

/// Write a default config into `.journey`. With `force`, an existing config
/// is overwritten and saved progress is discarded.
pub async fn run(cwd: Option<&Path>, force: bool) -> Result<()> {
    let root = resolve_cwd(cwd);
    let config_path = get_config_path(&root);

    if config_path.exists() && !force {
        return Err(JourneyError::NotAllowed(format!(
            "{} already exists (use --force to overwrite)",
            config_path.display()
        )));
    }

    write_config(&root, &Config::default())?;

    let progress_path = get_progress_path(&root);
    if progress_path.exists() {
        std::fs::remove_file(&progress_path)?;
        tracing::info!("Discarded saved progress");
    }

    tracing::info!(dir = %get_journey_dir(&root).display(), "Initialized journey");
    println!("Initialized journey in {}", get_journey_dir(&root).display());
    Ok(())
}
