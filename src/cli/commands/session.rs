//! Load a journey from disk, and save it back once deferred work has run

use std::path::{Path, PathBuf};

use crate::config::load_config;
use crate::errors::Result;
use crate::fs::{find_journey_root, read_progress, resolve_cwd, write_progress};
use crate::journey::{settle, Journey, JourneyOptions, TokioClock};
use crate::registry::ModuleRegistry;
use crate::schemas::Config;

/// A journey opened from a `.journey` directory
#[derive(Debug)]
pub struct Session {
    pub root: PathBuf,
    pub config: Config,
    pub journey: Journey,
}

impl Session {
    /// Find the journey root above `cwd` and resume the saved journey, or
    /// start a fresh one when nothing has been saved.
    ///
    /// # Errors
    /// * `FileNotFound` - If there is no `.journey` directory
    /// * `InvalidProgress` - If the saved journey does not fit the registry
    pub fn open(cwd: Option<&Path>) -> Result<Self> {
        let root = find_journey_root(&resolve_cwd(cwd))?;
        let config = load_config(&root)?;
        let registry = ModuleRegistry::from_config(&config)?;
        let options = JourneyOptions::from(&config);
        let clock = Box::new(TokioClock);

        let journey = match read_progress(&root)? {
            Some(progress) => Journey::resume(registry, options, clock, &progress)?,
            None => Journey::new(registry, options, clock),
        };
        tracing::debug!(root = %root.display(), phase = %journey.phase(), "Opened journey");

        Ok(Session {
            root,
            config,
            journey,
        })
    }

    /// Run pending deferred tasks, then write the progress file.
    pub async fn save(&mut self) -> Result<()> {
        settle(&mut self.journey).await;
        write_progress(&self.root, &self.journey.progress())?;
        tracing::debug!(phase = %self.journey.phase(), "Saved journey");
        Ok(())
    }
}
