//! Date registry endpoints

use axum::{extract::State, Json};

use crate::{error::AppResult, models::DateRecord, AppState};

/// List every date that has log entries
#[utoipa::path(
    get,
    path = "/dates",
    tag = "dates",
    responses(
        (status = 200, description = "Date list", body = Vec<DateRecord>),
        (status = 500, description = "Storage failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_dates(State(state): State<AppState>) -> AppResult<Json<Vec<DateRecord>>> {
    let dates = state.services.dates.list().await?;
    Ok(Json(dates))
}
