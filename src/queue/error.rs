//! Error types for front-desk lifecycle operations.

use thiserror::Error;

use crate::models::PatientId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeskError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Patient not found: {0}")]
    NotFound(PatientId),

    #[error("No doctor assigned to patient {0}")]
    NoDoctorAssigned(PatientId),
}
