//! Date record model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// One calendar day that has at least one log entry
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct DateRecord {
    pub id: i32,
    /// Calendar date string as submitted by the client (YYYY-MM-DD)
    pub date: String,
}
