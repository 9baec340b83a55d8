//! Shared application state.
//!
//! `CoreState` owns the single `FrontDesk` store. It is wrapped in `Arc` at
//! startup and handed to the HTTP layer. The `RwLock` serializes mutations
//! in arrival order while snapshot reads proceed concurrently.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Instant;

use crate::config;
use crate::models::Doctor;
use crate::queue::FrontDesk;

// ═══════════════════════════════════════════════════════════
// CoreState
// ═══════════════════════════════════════════════════════════

pub struct CoreState {
    desk: RwLock<FrontDesk>,
    started_at: Instant,
}

impl CoreState {
    /// Create a CoreState with the configured roster.
    pub fn new() -> Self {
        Self::with_roster(config::roster())
    }

    pub fn with_roster(doctors: Vec<Doctor>) -> Self {
        tracing::info!(doctors = doctors.len(), "Front desk open");
        Self {
            desk: RwLock::new(FrontDesk::new(doctors)),
            started_at: Instant::now(),
        }
    }

    /// Acquire a read lock on the desk for snapshots.
    pub fn read_desk(&self) -> Result<RwLockReadGuard<'_, FrontDesk>, CoreError> {
        self.desk.read().map_err(|_| CoreError::LockPoisoned)
    }

    /// Acquire a write lock on the desk for transitions.
    pub fn write_desk(&self) -> Result<RwLockWriteGuard<'_, FrontDesk>, CoreError> {
        self.desk.write().map_err(|_| CoreError::LockPoisoned)
    }

    /// Seconds since the desk opened.
    pub fn uptime_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

impl Default for CoreState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Internal lock error")]
    LockPoisoned,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{roster_from_names, Priority, RegistrationForm};

    #[test]
    fn writes_are_visible_to_later_reads() {
        let state = CoreState::with_roster(roster_from_names(["Dr. A"]));
        state
            .write_desk()
            .unwrap()
            .register(RegistrationForm::new("Alice", Priority::High))
            .unwrap();

        let desk = state.read_desk().unwrap();
        assert_eq!(desk.waiting().len(), 1);
        assert_eq!(desk.available_doctors(), 0);
    }

    #[test]
    fn poisoned_lock_surfaces_as_error() {
        let state = std::sync::Arc::new(CoreState::with_roster(roster_from_names(["Dr. A"])));
        let clone = state.clone();
        let _ = std::thread::spawn(move || {
            let _guard = clone.write_desk().unwrap();
            panic!("poison the lock");
        })
        .join();

        assert!(matches!(state.read_desk(), Err(CoreError::LockPoisoned)));
    }
}
