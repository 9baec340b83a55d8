//! Priority policy: maps a triage level to its service rank.

use crate::models::Priority;

/// Service rank of a priority level. Lower ranks are served first.
pub fn rank(priority: Priority) -> u8 {
    match priority {
        Priority::Emergency => 1,
        Priority::High => 2,
        Priority::Middle => 3,
        Priority::Low => 4,
    }
}
