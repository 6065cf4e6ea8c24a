//! The journey state machine
//!
//! A `Journey` owns the user's name, the top-level phase, the module list and
//! the active module. It changes only through `begin`, `select`,
//! `complete_module`, `finish` and `restart`; presentation reads the
//! `JourneyState` snapshot and listens for `JourneyEvent`s.

use std::time::{Duration, Instant};

use serde::Serialize;
use tokio::sync::broadcast;

use crate::domain::{
    apply_completion, check_active_module, check_module_invariants, validate_selection,
    validate_user_name, CompletionOutcome,
};
use crate::errors::{JourneyError, Result};
use crate::registry::ModuleRegistry;
use crate::schemas::{Config, Module, ModuleId, ModuleProgress, Phase, Progress};

use super::events::JourneyEvent;
use super::scheduler::{Clock, DeferredTask, Scheduler};

const EVENT_CAPACITY: usize = 64;

/// Everything presentation reads about a journey
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JourneyState {
    /// Empty until the journey begins
    pub user_name: String,
    pub phase: Phase,
    /// None while in the intro phase
    pub active_module_id: Option<ModuleId>,
    /// Fixed membership, sequence order
    pub modules: Vec<Module>,
}

impl JourneyState {
    /// The snapshot every journey starts from
    pub fn initial(registry: &ModuleRegistry) -> Self {
        JourneyState {
            user_name: String::new(),
            phase: Phase::Intro,
            active_module_id: None,
            modules: registry.initial_snapshot(),
        }
    }

    pub fn module(&self, id: ModuleId) -> Option<&Module> {
        self.modules.iter().find(|m| m.id == id)
    }

    pub fn active_module(&self) -> Option<&Module> {
        self.active_module_id.and_then(|id| self.module(id))
    }

    pub fn completed_count(&self) -> usize {
        self.modules.iter().filter(|m| m.is_completed()).count()
    }

    pub fn all_completed(&self) -> bool {
        self.modules.iter().all(Module::is_completed)
    }
}

/// Tunables for a journey
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JourneyOptions {
    /// Pause between the last completion and the finished phase
    pub finish_delay: Duration,
    /// Drop a pending finish on restart instead of letting it fire
    pub cancel_finish_on_restart: bool,
}

impl Default for JourneyOptions {
    fn default() -> Self {
        JourneyOptions {
            finish_delay: Duration::from_millis(500),
            cancel_finish_on_restart: false,
        }
    }
}

impl From<&Config> for JourneyOptions {
    fn from(config: &Config) -> Self {
        JourneyOptions {
            finish_delay: config.finish_delay(),
            cancel_finish_on_restart: config.cancel_finish_on_restart,
        }
    }
}

/// Module progression state machine
#[derive(Debug)]
pub struct Journey {
    registry: ModuleRegistry,
    options: JourneyOptions,
    state: JourneyState,
    scheduler: Scheduler,
    events: broadcast::Sender<JourneyEvent>,
}

impl Journey {
    /// Create a journey in the intro phase
    pub fn new(registry: ModuleRegistry, options: JourneyOptions, clock: Box<dyn Clock>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Journey {
            state: JourneyState::initial(&registry),
            registry,
            options,
            scheduler: Scheduler::new(clock),
            events,
        }
    }

    /// Rebuild a journey from saved progress.
    ///
    /// A journey saved before finishing with every module completed gets its
    /// finish scheduled again, since pending tasks are not saved.
    ///
    /// # Errors
    /// * `InvalidProgress` - If the saved modules do not match the registry,
    ///   break the module invariants, or disagree with the saved phase
    pub fn resume(
        registry: ModuleRegistry,
        options: JourneyOptions,
        clock: Box<dyn Clock>,
        progress: &Progress,
    ) -> Result<Self> {
        if progress.modules.len() != registry.len() {
            return Err(JourneyError::InvalidProgress(format!(
                "saved journey has {} modules, registry has {}",
                progress.modules.len(),
                registry.len()
            )));
        }

        let mut modules = registry.initial_snapshot();
        for (module, saved) in modules.iter_mut().zip(&progress.modules) {
            if module.id != saved.id {
                return Err(JourneyError::InvalidProgress(format!(
                    "saved module {} does not match registry module {}",
                    saved.id, module.id
                )));
            }
            module.status = saved.status;
        }

        let invariants = check_module_invariants(&modules);
        if !invariants.valid {
            return Err(JourneyError::InvalidProgress(
                invariants.reason.unwrap_or_else(|| "module statuses are inconsistent".to_string()),
            ));
        }

        let active = check_active_module(progress.phase, progress.active_module_id, &modules);
        if !active.valid {
            return Err(JourneyError::InvalidProgress(
                active.reason.unwrap_or_else(|| "active module is inconsistent".to_string()),
            ));
        }

        if progress.phase == Phase::Intro && !progress.user_name.is_empty() {
            return Err(JourneyError::InvalidProgress(
                "journey in the intro phase already has a user name".to_string(),
            ));
        }

        if progress.phase == Phase::InProgress && progress.user_name.trim().is_empty() {
            return Err(JourneyError::InvalidProgress(
                "journey in progress has no user name".to_string(),
            ));
        }

        let mut journey = Journey::new(registry, options, clock);
        journey.state = JourneyState {
            user_name: progress.user_name.clone(),
            phase: progress.phase,
            active_module_id: progress.active_module_id,
            modules,
        };

        if journey.state.phase != Phase::Finished && journey.state.all_completed() {
            journey.schedule_finish();
        }

        tracing::info!(
            phase = %journey.state.phase,
            completed = journey.state.completed_count(),
            "Resumed journey"
        );
        Ok(journey)
    }

    // ===== READ ACCESS =====

    pub fn state(&self) -> &JourneyState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn user_name(&self) -> &str {
        &self.state.user_name
    }

    pub fn active_module_id(&self) -> Option<ModuleId> {
        self.state.active_module_id
    }

    pub fn modules(&self) -> &[Module] {
        &self.state.modules
    }

    pub fn registry(&self) -> &ModuleRegistry {
        &self.registry
    }

    pub fn options(&self) -> &JourneyOptions {
        &self.options
    }

    /// Receive a notification after every successful mutation
    pub fn subscribe(&self) -> broadcast::Receiver<JourneyEvent> {
        self.events.subscribe()
    }

    /// Export the journey for saving
    pub fn progress(&self) -> Progress {
        Progress {
            schema_version: 1,
            user_name: self.state.user_name.clone(),
            phase: self.state.phase,
            active_module_id: self.state.active_module_id,
            modules: self
                .state
                .modules
                .iter()
                .map(|m| ModuleProgress {
                    id: m.id,
                    status: m.status,
                })
                .collect(),
            updated_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    // ===== OPERATIONS =====

    /// Start the journey under the given display name.
    ///
    /// The name is stored trimmed and the first module becomes active.
    ///
    /// # Errors
    /// * `Validation` - If the name is empty after trimming
    /// * `NotAllowed` - If the journey already began
    pub fn begin(&mut self, name: &str) -> Result<()> {
        let user_name = validate_user_name(name)?;

        if self.state.phase != Phase::Intro {
            return Err(JourneyError::NotAllowed(format!(
                "journey already began (phase {})",
                self.state.phase
            )));
        }

        self.state.user_name = user_name.clone();
        self.state.phase = Phase::InProgress;
        self.state.active_module_id = Some(ModuleId::FIRST);

        tracing::info!(user = %user_name, "Journey began");
        self.emit(JourneyEvent::Began { user_name });
        Ok(())
    }

    /// Make a module the active one.
    ///
    /// # Errors
    /// * `NotAllowed` - If the module is locked or the journey has not begun
    /// * `UnknownModule` - If the id is not part of this journey
    pub fn select(&mut self, id: ModuleId) -> Result<()> {
        if self.state.phase == Phase::Intro {
            return Err(JourneyError::NotAllowed(
                "cannot select a module before the journey begins".to_string(),
            ));
        }

        if let Err(e) = validate_selection(&self.state.modules, id) {
            tracing::debug!(module = %id, error = %e, "Selection rejected");
            return Err(e);
        }

        self.state.active_module_id = Some(id);

        tracing::debug!(module = %id, "Selected module");
        self.emit(JourneyEvent::Selected { module_id: id });
        Ok(())
    }

    /// Record that a module's objective was met.
    ///
    /// Completes the module, unlocks the next one, and either moves to the
    /// next module or, once every module is completed, schedules the finished
    /// phase after the configured pause. The active module is left alone in
    /// that case until the finish fires.
    ///
    /// Any existing module may be completed, in any phase and whatever its
    /// status. Before the journey begins there is no active module, so the
    /// statuses change but nothing is advanced to.
    ///
    /// Completing an already completed module changes no statuses, but when
    /// every module is completed it schedules another finish.
    ///
    /// # Errors
    /// * `UnknownModule` - If the id is not part of this journey
    pub fn complete_module(&mut self, id: ModuleId) -> Result<CompletionOutcome> {
        let transition = apply_completion(&self.state.modules, id)?;
        let mut outcome = transition.outcome;
        self.state.modules = transition.next_modules;

        if self.state.phase == Phase::Intro {
            outcome.advance_to = None;
        }
        if !outcome.all_completed {
            if let Some(next) = outcome.advance_to {
                self.state.active_module_id = Some(next);
            }
        }

        tracing::info!(
            module = %id,
            newly_completed = outcome.newly_completed,
            unlocked = ?outcome.unlocked,
            advanced_to = ?outcome.advance_to,
            "Module completed"
        );
        self.emit(JourneyEvent::ModuleCompleted {
            module_id: id,
            unlocked: outcome.unlocked,
            advanced_to: outcome.advance_to,
            all_completed: outcome.all_completed,
        });

        if outcome.all_completed {
            self.schedule_finish();
        }

        Ok(outcome)
    }

    /// Move straight to the finished phase.
    ///
    /// This is what the deferred finish runs, and it may also be called
    /// directly to skip to the end without looking at module statuses.
    pub fn finish(&mut self) {
        if self.state.phase == Phase::Finished {
            tracing::debug!("Journey already finished");
            return;
        }

        if !self.state.all_completed() {
            tracing::warn!(
                completed = self.state.completed_count(),
                total = self.state.modules.len(),
                "Finishing journey with incomplete modules"
            );
        }

        self.state.phase = Phase::Finished;

        tracing::info!(user = %self.state.user_name, "Journey finished");
        self.emit(JourneyEvent::Finished);
    }

    /// Replace the journey with the initial snapshot.
    ///
    /// Pending finishes keep running unless `cancel_finish_on_restart` is set.
    pub fn restart(&mut self) {
        if self.options.cancel_finish_on_restart {
            self.cancel_pending_finish();
        } else if self.has_pending_finish() {
            tracing::debug!("Restarting with a finish still pending");
        }

        self.state = JourneyState::initial(&self.registry);

        tracing::info!("Journey restarted");
        self.emit(JourneyEvent::Restarted);
    }

    // ===== DEFERRED FINISH =====

    fn schedule_finish(&mut self) {
        let delay = self.options.finish_delay;
        self.scheduler.schedule(delay, DeferredTask::Finish);

        tracing::debug!(delay_ms = delay.as_millis() as u64, "Finish scheduled");
        self.emit(JourneyEvent::FinishScheduled {
            delay_ms: delay.as_millis() as u64,
        });
    }

    /// Drop every pending finish, returning how many were dropped
    pub fn cancel_pending_finish(&mut self) -> usize {
        let count = self.scheduler.cancel_where(|task| task == DeferredTask::Finish);
        if count > 0 {
            tracing::info!(count, "Pending finish cancelled");
            self.emit(JourneyEvent::FinishCancelled { count });
        }
        count
    }

    pub fn has_pending_finish(&self) -> bool {
        self.scheduler.has_pending(DeferredTask::Finish)
    }

    /// When the next deferred task is due
    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.next_deadline()
    }

    /// Run every deferred task that is due, returning how many ran
    pub fn run_due(&mut self) -> usize {
        let due = self.scheduler.take_due();
        let count = due.len();
        for (_, task) in due {
            match task {
                DeferredTask::Finish => {
                    tracing::debug!("Deferred finish fired");
                    self.finish();
                }
            }
        }
        count
    }

    fn emit(&self, event: JourneyEvent) {
        // No subscribers is fine
        let _ = self.events.send(event);
    }
}
