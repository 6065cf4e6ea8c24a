//! Journey - a module progression state machine for guided learning
//!
//! This library provides:
//! - Schema definitions for modules, content payloads, progress and config
//! - Domain rules for module statuses and the completion transition
//! - The module registry and the `Journey` state machine with its deferred finish
//! - Module handlers and the completion protocol
//! - Content providers, file system utilities and the CLI

pub mod cli;
pub mod config;
pub mod content;
pub mod domain;
pub mod errors;
pub mod fs;
pub mod handlers;
pub mod journey;
pub mod registry;
pub mod schemas;

// Re-export commonly used types
pub use errors::{JourneyError, Result};
pub use journey::{Journey, JourneyEvent, JourneyOptions, JourneyState};
pub use registry::ModuleRegistry;
pub use schemas::{Config, Module, ModuleContent, ModuleId, ModuleKind, ModuleStatus, Phase, Progress};
