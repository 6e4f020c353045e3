//! Date registry repository

use sqlx::{Pool, Postgres};

use crate::{error::AppResult, models::DateRecord};

#[derive(Clone)]
pub struct DatesRepository {
    pool: Pool<Postgres>,
}

impl DatesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all date records. Ordering is left to the presentation layer.
    pub async fn list(&self) -> AppResult<Vec<DateRecord>> {
        let rows = sqlx::query_as::<_, DateRecord>("SELECT id, date FROM date_table")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Look up a date record by its exact date string, inserting it if
    /// absent.
    ///
    /// The insert goes through `ON CONFLICT (date) DO NOTHING` against the
    /// UNIQUE constraint, so two concurrent calls for a previously-unseen
    /// date cannot create duplicate rows.
    pub async fn find_or_create(&self, date: &str) -> AppResult<DateRecord> {
        let inserted = sqlx::query_as::<_, DateRecord>(
            "INSERT INTO date_table (date) VALUES ($1) ON CONFLICT (date) DO NOTHING RETURNING id, date",
        )
        .bind(date)
        .fetch_optional(&self.pool)
        .await?;

        if let Some(record) = inserted {
            return Ok(record);
        }

        // Conflict path: the row already existed, fetch it
        let record =
            sqlx::query_as::<_, DateRecord>("SELECT id, date FROM date_table WHERE date = $1")
                .bind(date)
                .fetch_one(&self.pool)
                .await?;
        Ok(record)
    }
}
