//! `GET /api/dashboard`: admin dashboard counts.

use axum::extract::State;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::queue::DeskSummary;

pub async fn summary(State(ctx): State<ApiContext>) -> Result<Json<DeskSummary>, ApiError> {
    let desk = ctx.core.read_desk()?;
    Ok(Json(DeskSummary::from_desk(&desk)))
}
