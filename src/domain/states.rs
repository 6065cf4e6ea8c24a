//! Module status ordering
//!
//! Module statuses only ever move forward:
//! locked → unlocked → completed

use crate::schemas::ModuleStatus;

/// The canonical ordering of module statuses.
///
/// A module may skip ahead in this list but never move back.
const MODULE_STATUSES: &[ModuleStatus] = &[
    ModuleStatus::Locked,
    ModuleStatus::Unlocked,
    ModuleStatus::Completed,
];

/// Get the 0-based index of a status in the status progression.
fn get_status_index(status: ModuleStatus) -> usize {
    MODULE_STATUSES
        .iter()
        .position(|&s| s == status)
        .unwrap_or(usize::MAX)
}

/// Check whether a module may move from one status to another.
///
/// Staying put is allowed, moving backwards is not.
pub fn can_change_status(from: ModuleStatus, to: ModuleStatus) -> bool {
    get_status_index(to) >= get_status_index(from)
}
