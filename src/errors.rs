//! Error types for the journey crate
//!
//! Each error type has a corresponding error code for programmatic handling.

use thiserror::Error;

use crate::schemas::{ModuleId, ModuleKind};

/// Result type alias for journey operations
pub type Result<T> = std::result::Result<T, JourneyError>;

/// Main error type for all journey operations
#[derive(Debug, Error)]
pub enum JourneyError {
    /// User-supplied input failed a precondition (e.g. an empty name)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Operation is not allowed in the current state (e.g. selecting a locked module)
    #[error("Not allowed: {0}")]
    NotAllowed(String),

    /// Module id is absent from the registry
    #[error("Unknown module: {0}")]
    UnknownModule(ModuleId),

    /// Registry definition breaks the ordering rules
    #[error("Invalid registry: {0}")]
    InvalidRegistry(String),

    /// A handler reported completion before its own done condition held
    #[error("Objective not met for module {0}")]
    ObjectiveNotMet(ModuleId),

    /// Content payload does not match the module kind
    #[error("Content mismatch for module {module_id}: expected {expected}, found {found}")]
    ContentMismatch {
        module_id: ModuleId,
        expected: ModuleKind,
        found: ModuleKind,
    },

    /// No content exists for the module
    #[error("Content not found for module {0}")]
    ContentNotFound(ModuleId),

    /// Saved progress is inconsistent with the registry
    #[error("Invalid progress: {0}")]
    InvalidProgress(String),

    /// Invalid JSON format
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// IO error wrapper
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl JourneyError {
    /// Get the error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            JourneyError::Validation(_) => "VALIDATION",
            JourneyError::NotAllowed(_) => "NOT_ALLOWED",
            JourneyError::UnknownModule(_) => "UNKNOWN_MODULE",
            JourneyError::InvalidRegistry(_) => "INVALID_REGISTRY",
            JourneyError::ObjectiveNotMet(_) => "OBJECTIVE_NOT_MET",
            JourneyError::ContentMismatch { .. } => "CONTENT_MISMATCH",
            JourneyError::ContentNotFound(_) => "CONTENT_NOT_FOUND",
            JourneyError::InvalidProgress(_) => "INVALID_PROGRESS",
            JourneyError::InvalidJson(_) => "INVALID_JSON",
            JourneyError::FileNotFound(_) => "FILE_NOT_FOUND",
            JourneyError::ConfigError(_) => "CONFIG_ERROR",
            JourneyError::Io(_) => "IO_ERROR",
        }
    }
}

/// Convert an error to an appropriate exit code
pub fn to_exit_code(error: &JourneyError) -> i32 {
    match error {
        // Rejected user input, the journey is unchanged
        JourneyError::Validation(_) | JourneyError::NotAllowed(_) => 2,
        _ => 1,
    }
}
