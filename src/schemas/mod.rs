//! Schema types for journeys
//!
//! Every type here serializes to the JSON stored under `.journey/`.

mod config;
mod content;
mod module;
mod progress;

pub use config::Config;
pub use content::{ComicContent, ComicPage, ModuleContent, QuizContent, VideoContent};
pub use module::{Module, ModuleDef, ModuleId, ModuleKind, ModuleStatus};
pub use progress::{ModuleProgress, Phase, Progress};
