//! Read-only aggregates for the admin dashboard and system status views.

use serde::{Deserialize, Serialize};

use crate::models::Priority;

use super::desk::FrontDesk;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityCount {
    pub priority: Priority,
    pub count: usize,
}

/// Counts across the desk at a single instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeskSummary {
    pub in_queue: usize,
    pub in_consultation: usize,
    pub completed: usize,
    pub doctors_available: usize,
    pub doctors_total: usize,
    /// One entry per level, most urgent first, zero counts included.
    pub queue_by_priority: Vec<PriorityCount>,
}

impl DeskSummary {
    pub fn from_desk(desk: &FrontDesk) -> Self {
        let queue_by_priority = Priority::ALL
            .iter()
            .map(|&priority| PriorityCount {
                priority,
                count: desk.waiting().iter().filter(|p| p.priority == priority).count(),
            })
            .collect();

        Self {
            in_queue: desk.waiting().len(),
            in_consultation: desk.in_consultation().len(),
            completed: desk.completed().len(),
            doctors_available: desk.available_doctors(),
            doctors_total: desk.doctors().len(),
            queue_by_priority,
        }
    }
}
