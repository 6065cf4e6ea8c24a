//! Status command - Show where the journey stands

use std::path::Path;

use crate::errors::{JourneyError, Result};
use crate::journey::Journey;
use crate::schemas::{ModuleStatus, Phase};

use super::session::Session;

/// Print the journey, as text or as its progress record in JSON
pub async fn run(cwd: Option<&Path>, json: bool) -> Result<()> {
    let session = Session::open(cwd)?;

    if json {
        let out = serde_json::to_string_pretty(&session.journey.progress())
            .map_err(|e| JourneyError::InvalidJson(e.to_string()))?;
        println!("{}", out);
        return Ok(());
    }

    print_journey(&session.journey);
    Ok(())
}

/// Human-readable summary shared by the mutating commands
pub(crate) fn print_journey(journey: &Journey) {
    match journey.phase() {
        Phase::Intro => println!("Not started (run `journey begin <name>`)"),
        Phase::InProgress => println!(
            "{} - {}/{} modules completed",
            journey.user_name(),
            journey.state().completed_count(),
            journey.modules().len()
        ),
        Phase::Finished => println!("Congratulations, {}! Journey finished.", journey.user_name()),
    }

    for module in journey.modules() {
        let marker = match module.status {
            ModuleStatus::Completed => "[x]",
            ModuleStatus::Unlocked => "[ ]",
            ModuleStatus::Locked => "[-]",
        };
        let active = if journey.active_module_id() == Some(module.id) {
            " <"
        } else {
            ""
        };
        println!(
            "  {} {}. {} ({}){}",
            marker, module.id, module.title, module.kind, active
        );
    }
}
