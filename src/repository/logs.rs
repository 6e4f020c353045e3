//! Log store repository

use sqlx::{Pool, Postgres};

use crate::{error::AppResult, models::LogEntry};

#[derive(Clone)]
pub struct LogsRepository {
    pool: Pool<Postgres>,
}

impl LogsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List log entries for one date record, in insertion order
    pub async fn list_for_date(&self, date_id: i32) -> AppResult<Vec<LogEntry>> {
        let rows = sqlx::query_as::<_, LogEntry>(
            "SELECT * FROM logs_table WHERE date_id = $1 ORDER BY id",
        )
        .bind(date_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Insert a log entry and return it with its generated id and timestamp
    pub async fn create(
        &self,
        date_id: i32,
        timer_leftover: &str,
        description: &str,
    ) -> AppResult<LogEntry> {
        let row = sqlx::query_as::<_, LogEntry>(
            r#"
            INSERT INTO logs_table (date_id, timer_leftover, description)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(date_id)
        .bind(timer_leftover)
        .bind(description)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }
}
