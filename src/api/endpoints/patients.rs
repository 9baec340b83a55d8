//! Patient lifecycle endpoints.
//!
//! - `POST /api/patients`: register a patient
//! - `GET /api/queue`: waiting patients in service order
//! - `POST /api/patients/:id/start`: start a consultation
//! - `POST /api/patients/:id/complete`: complete a consultation
//! - `GET /api/consultations`: patients currently being seen
//! - `GET /api/completed`: finished visits

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::{ApiContext, PatientView, TransitionResponse};
use crate::models::{Patient, PatientId, RegistrationForm};
use crate::queue::FrontDesk;

#[derive(Serialize)]
pub struct PatientsResponse {
    pub patients: Vec<PatientView>,
}

/// `POST /api/patients`: register from the intake form.
pub async fn register(
    State(ctx): State<ApiContext>,
    payload: Result<Json<RegistrationForm>, JsonRejection>,
) -> Result<(StatusCode, Json<PatientView>), ApiError> {
    let Json(form) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let mut desk = ctx.core.write_desk()?;
    let patient = desk.register(form)?;
    let view = PatientView::new(&desk, patient);

    Ok((StatusCode::CREATED, Json(view)))
}

/// `GET /api/queue`: waiting list, next to be served first.
pub async fn queue(State(ctx): State<ApiContext>) -> Result<Json<PatientsResponse>, ApiError> {
    let desk = ctx.core.read_desk()?;
    let patients = PatientView::list(&desk, desk.queue());
    Ok(Json(PatientsResponse { patients }))
}

/// `POST /api/patients/:id/start`
pub async fn start(
    State(ctx): State<ApiContext>,
    Path(id): Path<String>,
) -> Result<Json<TransitionResponse>, ApiError> {
    let id = parse_patient_id(&id)?;
    let mut desk = ctx.core.write_desk()?;
    let patient = desk.start_consultation(id);
    Ok(Json(transition(&desk, patient)))
}

/// `POST /api/patients/:id/complete`
pub async fn complete(
    State(ctx): State<ApiContext>,
    Path(id): Path<String>,
) -> Result<Json<TransitionResponse>, ApiError> {
    let id = parse_patient_id(&id)?;
    let mut desk = ctx.core.write_desk()?;
    let patient = desk.complete_consultation(id);
    Ok(Json(transition(&desk, patient)))
}

/// `GET /api/consultations`
pub async fn consultations(
    State(ctx): State<ApiContext>,
) -> Result<Json<PatientsResponse>, ApiError> {
    let desk = ctx.core.read_desk()?;
    let patients = PatientView::list(&desk, desk.in_consultation());
    Ok(Json(PatientsResponse { patients }))
}

/// `GET /api/completed`
pub async fn completed(State(ctx): State<ApiContext>) -> Result<Json<PatientsResponse>, ApiError> {
    let desk = ctx.core.read_desk()?;
    let patients = PatientView::list(&desk, desk.completed());
    Ok(Json(PatientsResponse { patients }))
}

fn parse_patient_id(raw: &str) -> Result<PatientId, ApiError> {
    raw.parse::<u64>()
        .map(PatientId)
        .map_err(|_| ApiError::BadRequest(format!("Invalid patient id: {raw}")))
}

fn transition(desk: &FrontDesk, patient: Option<Patient>) -> TransitionResponse {
    TransitionResponse {
        applied: patient.is_some(),
        patient: patient.map(|p| PatientView::new(desk, p)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_patient_id_accepts_digits_only() {
        assert_eq!(parse_patient_id("12").unwrap(), PatientId(12));
        assert!(parse_patient_id("abc").is_err());
        assert!(parse_patient_id("-1").is_err());
    }
}
