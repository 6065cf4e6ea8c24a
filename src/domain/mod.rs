//! Domain logic for module statuses and completion

mod states;
mod transitions;
mod validation;


pub use states::can_change_status;
pub use transitions::{apply_completion, CompletionOutcome, CompletionTransition};
pub use validation::{
    check_active_module, check_module_invariants, validate_definitions, validate_selection,
    validate_user_name, ValidationResult,
};
