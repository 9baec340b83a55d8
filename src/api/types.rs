//! Shared types for the desk API layer.

use std::sync::Arc;

use serde::Serialize;

use crate::core_state::CoreState;
use crate::models::Patient;
use crate::queue::FrontDesk;

/// Shared context for all API routes and middleware.
#[derive(Clone)]
pub struct ApiContext {
    pub core: Arc<CoreState>,
}

impl ApiContext {
    pub fn new(core: Arc<CoreState>) -> Self {
        Self { core }
    }
}

/// A patient together with the display name of its paired doctor.
#[derive(Debug, Clone, Serialize)]
pub struct PatientView {
    #[serde(flatten)]
    pub patient: Patient,
    pub doctor_name: Option<String>,
}

impl PatientView {
    pub fn new(desk: &FrontDesk, patient: Patient) -> Self {
        let doctor_name = patient
            .doctor
            .and_then(|id| desk.doctor(id))
            .map(|d| d.name.clone());
        Self { patient, doctor_name }
    }

    pub fn list<'a, I>(desk: &FrontDesk, patients: I) -> Vec<Self>
    where
        I: IntoIterator<Item = &'a Patient>,
    {
        patients
            .into_iter()
            .map(|p| Self::new(desk, p.clone()))
            .collect()
    }
}

/// Outcome of a start/complete call. `applied == false` means the call was a no-op.
#[derive(Debug, Clone, Serialize)]
pub struct TransitionResponse {
    pub applied: bool,
    pub patient: Option<PatientView>,
}
