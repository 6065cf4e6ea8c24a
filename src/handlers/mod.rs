//! Module handlers - per-kind interaction and the completion protocol
//!
//! A handler owns the interaction for one mounted module and decides when its
//! objective is met. It reports back through `report_completion`, which checks
//! the handler's objective before calling `Journey::complete_module`.

pub mod comic;
pub mod quiz;
pub mod video;

pub use comic::ComicHandler;
pub use quiz::QuizHandler;
pub use video::VideoHandler;

use crate::domain::CompletionOutcome;
use crate::errors::{JourneyError, Result};
use crate::journey::Journey;
use crate::schemas::{Module, ModuleContent, ModuleId, ModuleKind};

/// Common surface of every module handler
pub trait ModuleHandler {
    /// The module this handler was mounted for
    fn module_id(&self) -> ModuleId;

    fn kind(&self) -> ModuleKind;

    /// Whether the handler's own done condition holds
    fn objective_met(&self) -> bool;
}

/// A handler mounted for one module, tagged by kind
#[derive(Debug, Clone)]
pub enum MountedHandler {
    Video(VideoHandler),
    Quiz(QuizHandler),
    Comic(ComicHandler),
}

impl MountedHandler {
    fn inner(&self) -> &dyn ModuleHandler {
        match self {
            MountedHandler::Video(h) => h,
            MountedHandler::Quiz(h) => h,
            MountedHandler::Comic(h) => h,
        }
    }
}

impl ModuleHandler for MountedHandler {
    fn module_id(&self) -> ModuleId {
        self.inner().module_id()
    }

    fn kind(&self) -> ModuleKind {
        self.inner().kind()
    }

    fn objective_met(&self) -> bool {
        self.inner().objective_met()
    }
}

/// Mount the handler for a module with its content.
///
/// # Errors
/// * `ContentMismatch` - If the payload kind differs from the module kind
/// * `Validation` - If the payload cannot be presented (e.g. a comic with no pages)
pub fn mount(module: &Module, content: ModuleContent) -> Result<MountedHandler> {
    let found = content.kind();
    if found != module.kind {
        return Err(JourneyError::ContentMismatch {
            module_id: module.id,
            expected: module.kind,
            found,
        });
    }

    tracing::debug!(module = %module.id, kind = %module.kind, "Mounting handler");
    let handler = match content {
        ModuleContent::Video(c) => MountedHandler::Video(VideoHandler::new(module.id, c)),
        ModuleContent::Quiz(c) => MountedHandler::Quiz(QuizHandler::new(module.id, c)),
        ModuleContent::Comic(c) => MountedHandler::Comic(ComicHandler::new(module.id, c)?),
    };
    Ok(handler)
}

/// Forward a handler's completion to the journey.
///
/// # Errors
/// * `ObjectiveNotMet` - If the handler's done condition does not hold yet
/// * Anything `Journey::complete_module` returns
pub fn report_completion(
    journey: &mut Journey,
    handler: &dyn ModuleHandler,
) -> Result<CompletionOutcome> {
    let id = handler.module_id();
    if !handler.objective_met() {
        return Err(JourneyError::ObjectiveNotMet(id));
    }
    journey.complete_module(id)
}
