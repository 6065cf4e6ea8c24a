//! Complete command - Record that a module's objective was met

use std::path::Path;

use crate::errors::Result;
use crate::schemas::ModuleId;

use super::session::Session;
use super::status::print_journey;

/// Complete a module. When it was the last one, the finished phase follows
/// after the configured pause before the command returns.
pub async fn run(cwd: Option<&Path>, id: ModuleId) -> Result<()> {
    let mut session = Session::open(cwd)?;
    let outcome = session.journey.complete_module(id)?;

    if let Some(next) = outcome.unlocked {
        println!("Unlocked module {}", next);
    }
    session.save().await?;

    print_journey(&session.journey);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::{begin, init, restart, select};
    use crate::errors::JourneyError;
    use crate::fs::read_progress;
    use crate::schemas::{ModuleStatus, Phase};
    use tempfile::TempDir;

    async fn started() -> TempDir {
        let temp = TempDir::new().unwrap();
        init::run(Some(temp.path()), false).await.unwrap();
        begin::run(Some(temp.path()), "Ada").await.unwrap();
        temp
    }

    #[tokio::test(start_paused = true)]
    async fn test_complete_unlocks_and_advances() {
        let temp = started().await;
        run(Some(temp.path()), ModuleId(1)).await.unwrap();

        let progress = read_progress(temp.path()).unwrap().unwrap();
        assert_eq!(progress.status_of(ModuleId(1)), Some(ModuleStatus::Completed));
        assert_eq!(progress.status_of(ModuleId(2)), Some(ModuleStatus::Unlocked));
        assert_eq!(progress.active_module_id, Some(ModuleId(2)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_completing_everything_finishes() {
        let temp = started().await;
        for id in 1..=3 {
            run(Some(temp.path()), ModuleId(id)).await.unwrap();
        }

        let progress = read_progress(temp.path()).unwrap().unwrap();
        assert_eq!(progress.phase, Phase::Finished);
    }

    #[tokio::test(start_paused = true)]
    async fn test_locked_module_can_be_completed_but_not_selected() {
        let temp = started().await;
        assert!(matches!(
            select::run(Some(temp.path()), ModuleId(3)).await,
            Err(JourneyError::NotAllowed(_))
        ));

        run(Some(temp.path()), ModuleId(3)).await.unwrap();

        let progress = read_progress(temp.path()).unwrap().unwrap();
        assert_eq!(progress.status_of(ModuleId(1)), Some(ModuleStatus::Unlocked));
        assert_eq!(progress.status_of(ModuleId(2)), Some(ModuleStatus::Locked));
        assert_eq!(progress.status_of(ModuleId(3)), Some(ModuleStatus::Completed));
        assert_eq!(progress.active_module_id, Some(ModuleId(1)));
        assert_eq!(progress.phase, Phase::InProgress);
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_after_finish() {
        let temp = started().await;
        for id in 1..=3 {
            run(Some(temp.path()), ModuleId(id)).await.unwrap();
        }
        restart::run(Some(temp.path())).await.unwrap();

        let progress = read_progress(temp.path()).unwrap().unwrap();
        assert_eq!(progress.phase, Phase::Intro);
        assert_eq!(progress.user_name, "");
        assert_eq!(progress.status_of(ModuleId(1)), Some(ModuleStatus::Unlocked));
        assert_eq!(progress.status_of(ModuleId(3)), Some(ModuleStatus::Locked));
    }
}
