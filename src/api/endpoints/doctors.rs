//! `GET /api/doctors`: roster with live availability.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::models::{Doctor, PatientId};
use crate::queue::FrontDesk;

/// A roster entry plus the waiting patient it is reserved for, if any.
#[derive(Debug, Serialize)]
pub struct DoctorView {
    #[serde(flatten)]
    pub doctor: Doctor,
    pub reserved_for: Option<PatientId>,
}

#[derive(Debug, Serialize)]
pub struct DoctorsResponse {
    pub available: usize,
    pub doctors: Vec<DoctorView>,
}

impl DoctorsResponse {
    fn from_desk(desk: &FrontDesk) -> Self {
        let plan = desk.plan();
        Self {
            available: desk.available_doctors(),
            doctors: desk
                .doctors()
                .iter()
                .map(|doctor| DoctorView {
                    reserved_for: plan.patient_for(doctor.id),
                    doctor: doctor.clone(),
                })
                .collect(),
        }
    }
}

pub async fn list(State(ctx): State<ApiContext>) -> Result<Json<DoctorsResponse>, ApiError> {
    let desk = ctx.core.read_desk()?;
    Ok(Json(DoctorsResponse::from_desk(&desk)))
}
