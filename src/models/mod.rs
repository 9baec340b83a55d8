pub mod doctor;
pub mod enums;
pub mod patient;

pub use doctor::{roster_from_names, Doctor, DoctorId};
pub use enums::{PatientStatus, Priority};
pub use patient::{Patient, PatientId, RegistrationForm};

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Invalid value '{value}' for {field}")]
    InvalidEnum { field: String, value: String },
}
