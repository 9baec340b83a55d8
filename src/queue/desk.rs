//! Lifecycle manager: owns the patient buckets and the doctor roster.
//!
//! Patient lifecycle: WAITING → IN_CONSULTATION → COMPLETED
//!
//! A waiting patient paired by the last assignment pass holds a soft
//! reservation on its doctor (the doctor reads as unavailable). Each pass
//! releases every soft reservation and re-pairs from scratch, so a later
//! higher-priority arrival can take a reserved doctor. Starting a
//! consultation makes the pairing binding; completing it frees the doctor.

use chrono::Utc;

use crate::models::{
    Doctor, DoctorId, Patient, PatientId, PatientStatus, RegistrationForm,
};

use super::assignment::{assign, queue_order, AssignmentPlan};
use super::error::DeskError;

#[derive(Debug)]
pub struct FrontDesk {
    waiting: Vec<Patient>,
    in_consultation: Vec<Patient>,
    completed: Vec<Patient>,
    doctors: Vec<Doctor>,
    next_id: u64,
    plan: AssignmentPlan,
}

impl FrontDesk {
    /// Create a desk with a fixed roster and empty queues.
    pub fn new(doctors: Vec<Doctor>) -> Self {
        Self {
            waiting: Vec::new(),
            in_consultation: Vec::new(),
            completed: Vec::new(),
            doctors,
            next_id: 1,
            plan: AssignmentPlan::default(),
        }
    }

    // ─── Transitions ─────────────────────────────────────────

    /// Register a patient and run an assignment pass.
    ///
    /// Rejects a blank name without touching any state. Returns the stored
    /// patient, including the doctor suggestion from the pass.
    pub fn register(&mut self, form: RegistrationForm) -> Result<Patient, DeskError> {
        if form.name.trim().is_empty() {
            return Err(DeskError::Validation("Name is required".into()));
        }

        let id = PatientId(self.next_id);
        self.next_id += 1;
        self.waiting.push(Patient::from_form(id, form, Utc::now()));
        self.on_roster_or_queue_change();

        let patient = self
            .waiting
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(DeskError::NotFound(id))?;

        tracing::info!(
            patient_id = %id,
            priority = %patient.priority,
            doctor = ?patient.doctor,
            "Patient registered"
        );
        Ok(patient)
    }

    /// Move a waiting patient into consultation with its suggested doctor.
    ///
    /// No-op returning `None` when the patient is not waiting or has no
    /// doctor suggestion yet.
    pub fn start_consultation(&mut self, id: PatientId) -> Option<Patient> {
        match self.try_start(id) {
            Ok(patient) => Some(patient),
            Err(e) => {
                tracing::debug!(patient_id = %id, "Start ignored: {e}");
                None
            }
        }
    }

    /// Finish a consultation, stamp the completion time and free the doctor.
    ///
    /// No-op returning `None` when the patient is not in consultation.
    pub fn complete_consultation(&mut self, id: PatientId) -> Option<Patient> {
        match self.try_complete(id) {
            Ok(patient) => Some(patient),
            Err(e) => {
                tracing::debug!(patient_id = %id, "Complete ignored: {e}");
                None
            }
        }
    }

    /// Full assignment pass over the current waiting set and roster.
    ///
    /// Called after every mutation of the waiting set or the roster.
    pub fn on_roster_or_queue_change(&mut self) -> &AssignmentPlan {
        for patient in self.waiting.iter_mut() {
            if let Some(doctor_id) = patient.doctor.take() {
                if let Some(doctor) = self.doctors.iter_mut().find(|d| d.id == doctor_id) {
                    doctor.available = true;
                }
            }
        }

        let plan = assign(&self.waiting, &self.doctors);

        for patient in self.waiting.iter_mut() {
            patient.doctor = plan.doctor_for(patient.id);
            if let Some(doctor_id) = patient.doctor {
                if let Some(doctor) = self.doctors.iter_mut().find(|d| d.id == doctor_id) {
                    doctor.available = false;
                }
            }
        }

        tracing::debug!(
            waiting = self.waiting.len(),
            assigned = plan.len(),
            "Assignment pass"
        );
        self.plan = plan;
        &self.plan
    }

    fn try_start(&mut self, id: PatientId) -> Result<Patient, DeskError> {
        let idx = self
            .waiting
            .iter()
            .position(|p| p.id == id)
            .ok_or(DeskError::NotFound(id))?;
        if self.waiting[idx].doctor.is_none() {
            return Err(DeskError::NoDoctorAssigned(id));
        }

        let mut patient = self.waiting.remove(idx);
        patient.status = PatientStatus::InConsultation;
        self.in_consultation.push(patient.clone());
        self.on_roster_or_queue_change();

        tracing::info!(patient_id = %id, doctor = ?patient.doctor, "Consultation started");
        Ok(patient)
    }

    fn try_complete(&mut self, id: PatientId) -> Result<Patient, DeskError> {
        let idx = self
            .in_consultation
            .iter()
            .position(|p| p.id == id)
            .ok_or(DeskError::NotFound(id))?;

        let mut patient = self.in_consultation.remove(idx);
        patient.status = PatientStatus::Completed;
        patient.completed_at = Some(Utc::now());
        if let Some(doctor_id) = patient.doctor {
            if let Some(doctor) = self.doctors.iter_mut().find(|d| d.id == doctor_id) {
                doctor.available = true;
            }
        }
        self.completed.push(patient.clone());
        self.on_roster_or_queue_change();

        tracing::info!(patient_id = %id, doctor = ?patient.doctor, "Consultation completed");
        Ok(patient)
    }

    // ─── Snapshots ───────────────────────────────────────────

    /// Waiting patients in registration order.
    pub fn waiting(&self) -> &[Patient] {
        &self.waiting
    }

    /// Waiting patients in service order (priority, then registration).
    pub fn queue(&self) -> Vec<&Patient> {
        queue_order(&self.waiting)
    }

    pub fn in_consultation(&self) -> &[Patient] {
        &self.in_consultation
    }

    pub fn completed(&self) -> &[Patient] {
        &self.completed
    }

    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    /// Most recent assignment pass.
    pub fn plan(&self) -> &AssignmentPlan {
        &self.plan
    }

    pub fn patient(&self, id: PatientId) -> Option<&Patient> {
        self.waiting
            .iter()
            .chain(&self.in_consultation)
            .chain(&self.completed)
            .find(|p| p.id == id)
    }

    pub fn doctor(&self, id: DoctorId) -> Option<&Doctor> {
        self.doctors.iter().find(|d| d.id == id)
    }

    pub fn available_doctors(&self) -> usize {
        self.doctors.iter().filter(|d| d.available).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{roster_from_names, Priority};

    fn default_desk() -> FrontDesk {
        FrontDesk::new(roster_from_names([
            "Dr. Smith", "Dr. Lee", "Dr. Patel", "Dr. Rao", "Dr. Kim", "Dr. Ahmed",
        ]))
    }

    fn single_doctor_desk() -> FrontDesk {
        FrontDesk::new(roster_from_names(["Dr. Smith"]))
    }

    fn register(desk: &mut FrontDesk, name: &str, priority: Priority) -> PatientId {
        desk.register(RegistrationForm::new(name, priority)).unwrap().id
    }

    /// Each patient sits in one bucket; each doctor is unavailable iff
    /// exactly one waiting or in-consultation patient holds it.
    fn assert_invariants(desk: &FrontDesk) {
        let mut seen = std::collections::HashSet::new();
        for p in desk.waiting().iter().chain(desk.in_consultation()).chain(desk.completed()) {
            assert!(seen.insert(p.id), "patient {} in more than one bucket", p.id);
        }
        for doctor in desk.doctors() {
            let holders = desk
                .waiting()
                .iter()
                .chain(desk.in_consultation())
                .filter(|p| p.doctor == Some(doctor.id))
                .count();
            assert!(holders <= 1, "{} paired {holders} times", doctor.name);
            assert_eq!(doctor.available, holders == 0, "{} availability", doctor.name);
        }
    }

    // ── Registration ─────────────────────────────────────────

    #[test]
    fn emergency_registration_takes_first_doctor() {
        let mut desk = default_desk();
        let alice = desk
            .register(RegistrationForm::new("Alice", Priority::Emergency))
            .unwrap();

        assert_eq!(alice.status, PatientStatus::Waiting);
        assert_eq!(alice.doctor, Some(DoctorId(1)));
        assert_eq!(desk.doctor(DoctorId(1)).unwrap().name, "Dr. Smith");
        assert_eq!(desk.available_doctors(), 5);
        assert_invariants(&desk);
    }

    #[test]
    fn seventh_patient_waits_unassigned_with_six_doctors() {
        let mut desk = default_desk();
        let ids: Vec<PatientId> = (1..=7)
            .map(|i| register(&mut desk, &format!("Patient {i}"), Priority::Low))
            .collect();

        for id in &ids[..6] {
            assert!(desk.patient(*id).unwrap().doctor.is_some());
        }
        assert_eq!(desk.patient(ids[6]).unwrap().doctor, None);
        assert_eq!(desk.available_doctors(), 0);
        assert_invariants(&desk);
    }

    #[test]
    fn later_emergency_takes_reserved_doctor() {
        let mut desk = single_doctor_desk();
        let bob = register(&mut desk, "Bob", Priority::Low);
        assert_eq!(desk.patient(bob).unwrap().doctor, Some(DoctorId(1)));

        let carol = register(&mut desk, "Carol", Priority::Emergency);
        assert_eq!(desk.patient(carol).unwrap().doctor, Some(DoctorId(1)));
        assert_eq!(desk.patient(bob).unwrap().doctor, None);
        assert_invariants(&desk);
    }

    #[test]
    fn blank_name_is_rejected_without_state_change() {
        let mut desk = default_desk();
        let err = desk.register(RegistrationForm::new("   ", Priority::High)).unwrap_err();
        assert!(matches!(err, DeskError::Validation(_)));
        assert!(desk.waiting().is_empty());
        assert_eq!(desk.available_doctors(), 6);

        // The rejected attempt does not consume an id
        let first = register(&mut desk, "Dana", Priority::High);
        assert_eq!(first, PatientId(1));
    }

    #[test]
    fn ids_increase_with_registration_order() {
        let mut desk = default_desk();
        let a = register(&mut desk, "A", Priority::Low);
        let b = register(&mut desk, "B", Priority::Emergency);
        let c = register(&mut desk, "C", Priority::Middle);
        assert!(a < b && b < c);
    }

    #[test]
    fn queue_lists_patients_in_service_order() {
        let mut desk = default_desk();
        register(&mut desk, "Low", Priority::Low);
        register(&mut desk, "Mid", Priority::Middle);
        register(&mut desk, "Emerg", Priority::Emergency);
        register(&mut desk, "Mid2", Priority::Middle);

        let names: Vec<&str> = desk.queue().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Emerg", "Mid", "Mid2", "Low"]);
    }

    // ── Consultation lifecycle ───────────────────────────────

    #[test]
    fn start_then_complete_moves_patient_to_completed() {
        let mut desk = default_desk();
        let id = register(&mut desk, "Eve", Priority::High);

        let started = desk.start_consultation(id).unwrap();
        assert_eq!(started.status, PatientStatus::InConsultation);
        assert!(desk.waiting().is_empty());
        assert_eq!(desk.in_consultation().len(), 1);
        assert_invariants(&desk);

        let done = desk.complete_consultation(id).unwrap();
        assert_eq!(done.status, PatientStatus::Completed);
        assert!(done.completed_at.is_some());
        assert!(desk.waiting().iter().all(|p| p.id != id));
        assert!(desk.in_consultation().iter().all(|p| p.id != id));
        assert_eq!(desk.completed()[0].id, id);
        assert!(desk.completed()[0].completed_at.is_some());
        assert_invariants(&desk);
    }

    #[test]
    fn start_keeps_doctor_reserved_without_double_booking() {
        let mut desk = default_desk();
        let id = register(&mut desk, "Finn", Priority::High);
        let doctor = desk.patient(id).unwrap().doctor.unwrap();

        desk.start_consultation(id).unwrap();
        assert_eq!(desk.in_consultation()[0].doctor, Some(doctor));
        assert!(!desk.doctor(doctor).unwrap().available);
        assert_eq!(desk.available_doctors(), 5);
    }

    #[test]
    fn completing_returns_doctor_to_availability() {
        let mut desk = default_desk();
        let id = register(&mut desk, "Gus", Priority::Middle);
        let doctor = desk.patient(id).unwrap().doctor.unwrap();
        desk.start_consultation(id);
        desk.complete_consultation(id);

        assert!(desk.doctor(doctor).unwrap().available);
        assert_eq!(desk.available_doctors(), 6);
    }

    #[test]
    fn freed_doctor_goes_to_next_waiting_patient() {
        let mut desk = single_doctor_desk();
        let carol = register(&mut desk, "Carol", Priority::Emergency);
        let bob = register(&mut desk, "Bob", Priority::Low);
        desk.start_consultation(carol).unwrap();
        assert_eq!(desk.patient(bob).unwrap().doctor, None);

        desk.complete_consultation(carol).unwrap();
        assert_eq!(desk.patient(bob).unwrap().doctor, Some(DoctorId(1)));
        assert_invariants(&desk);
    }

    #[test]
    fn starting_unassigned_patient_is_a_noop() {
        let mut desk = single_doctor_desk();
        register(&mut desk, "Hana", Priority::High);
        let ivan = register(&mut desk, "Ivan", Priority::Low);

        assert!(desk.start_consultation(ivan).is_none());
        assert_eq!(desk.waiting().len(), 2);
        assert!(desk.in_consultation().is_empty());
    }

    #[test]
    fn unknown_ids_leave_collections_unchanged() {
        let mut desk = default_desk();
        let id = register(&mut desk, "Jo", Priority::High);
        let waiting_before = desk.waiting().to_vec();
        let doctors_before = desk.doctors().to_vec();

        assert!(desk.start_consultation(PatientId(999)).is_none());
        assert!(desk.complete_consultation(PatientId(999)).is_none());
        // Completing a patient that is still waiting is also a no-op
        assert!(desk.complete_consultation(id).is_none());

        assert_eq!(desk.waiting(), waiting_before.as_slice());
        assert_eq!(desk.doctors(), doctors_before.as_slice());
        assert!(desk.in_consultation().is_empty());
        assert!(desk.completed().is_empty());
    }

    #[test]
    fn transitions_never_repeat() {
        let mut desk = default_desk();
        let id = register(&mut desk, "Kai", Priority::High);
        desk.start_consultation(id).unwrap();
        assert!(desk.start_consultation(id).is_none());
        desk.complete_consultation(id).unwrap();
        assert!(desk.complete_consultation(id).is_none());
        assert_eq!(desk.completed().len(), 1);
    }

    #[test]
    fn reassignment_is_idempotent_on_unchanged_state() {
        let mut desk = default_desk();
        for (name, priority) in [("A", Priority::Low), ("B", Priority::High), ("C", Priority::Emergency)] {
            register(&mut desk, name, priority);
        }
        let first = desk.plan().clone();
        let second = desk.on_roster_or_queue_change().clone();
        assert_eq!(first, second);
        assert_invariants(&desk);
    }

    #[test]
    fn invariants_hold_across_mixed_workload() {
        let mut desk = FrontDesk::new(roster_from_names(["Dr. A", "Dr. B", "Dr. C"]));
        let mut ids = Vec::new();
        for i in 0..8u64 {
            ids.push(register(&mut desk, &format!("P{i}"), Priority::ALL[(i % 4) as usize]));
            assert_invariants(&desk);
        }
        for id in &ids {
            desk.start_consultation(*id);
            assert_invariants(&desk);
        }
        for id in &ids {
            desk.complete_consultation(*id);
            assert_invariants(&desk);
        }
        // Three doctors, eight patients: the remaining waiting set got the freed doctors
        assert_eq!(desk.completed().len(), 3);
        assert_eq!(
            desk.waiting().iter().filter(|p| p.doctor.is_some()).count(),
            3
        );
    }
}
