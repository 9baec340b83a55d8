//! Assignment engine: pairs waiting patients with available doctors.
//!
//! Patients are served by (rank, registration order). Available doctors are
//! taken in roster order. The two lists are walked in lockstep until either
//! runs out; patients past the end of the doctor list stay unassigned.

use std::collections::BTreeMap;

use crate::models::{Doctor, DoctorId, Patient, PatientId};

use super::priority::rank;

/// Result of one assignment pass. A patient missing from the plan is unassigned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentPlan {
    pairs: BTreeMap<PatientId, DoctorId>,
}

impl AssignmentPlan {
    pub fn doctor_for(&self, patient: PatientId) -> Option<DoctorId> {
        self.pairs.get(&patient).copied()
    }

    pub fn patient_for(&self, doctor: DoctorId) -> Option<PatientId> {
        self.pairs
            .iter()
            .find(|(_, d)| **d == doctor)
            .map(|(p, _)| *p)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Waiting patients in service order. The sort is stable on (rank, id).
pub fn queue_order(waiting: &[Patient]) -> Vec<&Patient> {
    let mut ordered: Vec<&Patient> = waiting.iter().collect();
    ordered.sort_by_key(|p| (rank(p.priority), p.id));
    ordered
}

/// Compute a fresh pairing over the full waiting set and roster.
pub fn assign(waiting: &[Patient], roster: &[Doctor]) -> AssignmentPlan {
    let available = roster.iter().filter(|d| d.available);
    let pairs = queue_order(waiting)
        .into_iter()
        .zip(available)
        .map(|(patient, doctor)| (patient.id, doctor.id))
        .collect();
    AssignmentPlan { pairs }
}
