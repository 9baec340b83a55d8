use std::net::SocketAddr;

use crate::models::{roster_from_names, Doctor};

/// Application-level constants
pub const APP_NAME: &str = "Frontdesk";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Loopback only: the desk API has no authentication.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// Doctors on duty when no roster override is given.
pub const DEFAULT_ROSTER: [&str; 6] = [
    "Dr. Smith",
    "Dr. Lee",
    "Dr. Patel",
    "Dr. Rao",
    "Dr. Kim",
    "Dr. Ahmed",
];

const ADDR_ENV: &str = "FRONTDESK_ADDR";
const ROSTER_ENV: &str = "FRONTDESK_ROSTER";

/// Filter used when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    "frontdesk=info,frontdesk_lib=info,tower_http=warn"
}

/// Bind address from `FRONTDESK_ADDR`, falling back to the default.
pub fn bind_addr() -> Result<SocketAddr, String> {
    let raw = std::env::var(ADDR_ENV).unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
    raw.parse()
        .map_err(|e| format!("Invalid {ADDR_ENV} '{raw}': {e}"))
}

/// Roster from `FRONTDESK_ROSTER` or the default.
///
/// Entries are comma separated, each `Name` or `Name:Specialty`
/// (e.g. `Dr. Lee:Cardiology,Dr. Kim`).
pub fn roster() -> Vec<Doctor> {
    match std::env::var(ROSTER_ENV) {
        Ok(raw) => {
            let parsed = parse_roster(&raw);
            if parsed.is_empty() {
                tracing::warn!("{ROSTER_ENV} is empty, using default roster");
                default_roster()
            } else {
                parsed
            }
        }
        Err(_) => default_roster(),
    }
}

pub fn default_roster() -> Vec<Doctor> {
    roster_from_names(DEFAULT_ROSTER)
}

fn parse_roster(raw: &str) -> Vec<Doctor> {
    raw.split(',')
        .filter_map(parse_roster_entry)
        .zip(1u32..)
        .map(|((name, specialty), id)| {
            let doctor = Doctor::new(id, name);
            match specialty {
                Some(specialty) => doctor.with_specialty(specialty),
                None => doctor,
            }
        })
        .collect()
}

/// `Name[:Specialty]`, trimmed. A blank name drops the entry.
fn parse_roster_entry(entry: &str) -> Option<(&str, Option<&str>)> {
    let (name, specialty) = match entry.split_once(':') {
        Some((name, specialty)) => (name.trim(), Some(specialty.trim())),
        None => (entry.trim(), None),
    };
    if name.is_empty() {
        return None;
    }
    Some((name, specialty.filter(|s| !s.is_empty())))
}
