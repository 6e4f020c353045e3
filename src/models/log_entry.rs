//! Log entry model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

/// One completed timer session
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct LogEntry {
    pub id: i32,
    /// Owning date record
    pub date_id: i32,
    /// Time left on the countdown when the session ended (HH:MM:SS)
    pub timer_leftover: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// Create log request
///
/// Fields are optional so that an absent field yields a 400 with a
/// descriptive message instead of a body rejection.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateLogRequest {
    /// Calendar date the session belongs to (YYYY-MM-DD)
    pub date: Option<String>,
    /// Time left on the countdown (HH:MM:SS)
    pub timer_leftover: Option<String>,
    pub description: Option<String>,
}

/// Query parameters for listing logs
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct LogsQuery {
    /// Date record identifier
    #[serde(rename = "dateId")]
    pub date_id: Option<String>,
}
