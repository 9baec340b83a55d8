//! API middleware.
//!
//! Only request logging: the desk API is loopback-only and unauthenticated.

pub mod access_log;
