//! API endpoint handlers.
//!
//! Each module corresponds to a front-desk view. Handlers reuse the
//! `FrontDesk` operations and hold the desk lock only for the call.

pub mod assignments;
pub mod dashboard;
pub mod doctors;
pub mod health;
pub mod patients;
