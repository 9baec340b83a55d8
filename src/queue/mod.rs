//! Front-desk queue engine.
//!
//! Three layers, leaves first:
//! ```text
//! priority (rank) → assignment (pairing pass) → desk (lifecycle + collections)
//! ```
//! `summary` aggregates read-only counts for dashboards.
//!
//! Every mutation on `FrontDesk` ends with a full assignment pass over the
//! waiting set, so the patient → doctor pairing is never a patched diff.

pub mod assignment;
pub mod desk;
pub mod error;
pub mod priority;
pub mod summary;

pub use assignment::{assign, queue_order, AssignmentPlan};
pub use desk::FrontDesk;
pub use error::DeskError;
pub use priority::rank;
pub use summary::{DeskSummary, PriorityCount};
