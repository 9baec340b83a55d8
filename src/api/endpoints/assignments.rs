//! `GET /api/assignments`: latest assignment pass as a display mapping.
//!
//! Pairs are doctor suggestions for waiting patients only. They may change
//! on the next registration, start or completion.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::models::{DoctorId, PatientId};
use crate::queue::FrontDesk;

#[derive(Debug, Serialize)]
pub struct AssignmentEntry {
    pub patient_id: PatientId,
    pub patient_name: String,
    pub doctor_id: DoctorId,
    pub doctor_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AssignmentsResponse {
    pub assigned: usize,
    /// Waiting patients left without a doctor by the last pass.
    pub unassigned: usize,
    pub pairs: Vec<AssignmentEntry>,
}

impl AssignmentsResponse {
    fn from_desk(desk: &FrontDesk) -> Self {
        let plan = desk.plan();
        let pairs: Vec<AssignmentEntry> = desk
            .queue()
            .into_iter()
            .filter_map(|patient| {
                let doctor_id = plan.doctor_for(patient.id)?;
                Some(AssignmentEntry {
                    patient_id: patient.id,
                    patient_name: patient.name.clone(),
                    doctor_id,
                    doctor_name: desk.doctor(doctor_id).map(|d| d.name.clone()),
                })
            })
            .collect();
        Self {
            assigned: plan.len(),
            unassigned: desk.waiting().len().saturating_sub(plan.len()),
            pairs,
        }
    }
}

pub async fn list(State(ctx): State<ApiContext>) -> Result<Json<AssignmentsResponse>, ApiError> {
    let desk = ctx.core.read_desk()?;
    Ok(Json(AssignmentsResponse::from_desk(&desk)))
}
