//! Log entry endpoints

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::{AppError, AppResult},
    models::{CreateLogRequest, LogEntry, LogsQuery},
    AppState,
};

/// List log entries for one date
#[utoipa::path(
    get,
    path = "/logs",
    tag = "logs",
    params(LogsQuery),
    responses(
        (status = 200, description = "Log entries for the date", body = Vec<LogEntry>),
        (status = 400, description = "Missing or invalid dateId", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_logs(
    State(state): State<AppState>,
    Query(query): Query<LogsQuery>,
) -> AppResult<Json<Vec<LogEntry>>> {
    let date_id = query
        .date_id
        .as_deref()
        .and_then(|s| s.parse::<i32>().ok())
        .ok_or_else(|| AppError::BadRequest("Invalid or missing dateId parameter".to_string()))?;

    let logs = state.services.logs.list_for_date(date_id).await?;
    Ok(Json(logs))
}

/// Record a completed timer session
#[utoipa::path(
    post,
    path = "/logs/create",
    tag = "logs",
    request_body = CreateLogRequest,
    responses(
        (status = 201, description = "Log entry created", body = LogEntry),
        (status = 400, description = "Missing required fields", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_log(
    State(state): State<AppState>,
    Json(request): Json<CreateLogRequest>,
) -> AppResult<(StatusCode, Json<LogEntry>)> {
    let log = state.services.logs.create(&request).await?;
    Ok((StatusCode::CREATED, Json(log)))
}
