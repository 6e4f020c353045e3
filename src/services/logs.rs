//! Log store service

use crate::{
    error::{AppError, AppResult},
    models::{CreateLogRequest, LogEntry},
    repository::Repository,
};

#[derive(Clone)]
pub struct LogsService {
    repository: Repository,
}

impl LogsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List log entries for one date record
    pub async fn list_for_date(&self, date_id: i32) -> AppResult<Vec<LogEntry>> {
        self.repository.logs.list_for_date(date_id).await
    }

    /// Record a completed timer session.
    ///
    /// Resolves the owning date record (creating it on first use for that
    /// day) and inserts the log entry referencing it.
    pub async fn create(&self, request: &CreateLogRequest) -> AppResult<LogEntry> {
        let (date, timer_leftover, description) = validate(request)?;

        let date_record = self.repository.dates.find_or_create(date).await?;
        self.repository
            .logs
            .create(date_record.id, timer_leftover, description)
            .await
    }
}

/// Check that all three fields are present and non-blank
fn validate(request: &CreateLogRequest) -> AppResult<(&str, &str, &str)> {
    fn present(value: &Option<String>) -> Option<&str> {
        value.as_deref().filter(|s| !s.trim().is_empty())
    }

    match (
        present(&request.date),
        present(&request.timer_leftover),
        present(&request.description),
    ) {
        (Some(date), Some(timer_leftover), Some(description)) => {
            Ok((date, timer_leftover, description))
        }
        _ => Err(AppError::Validation(
            "Missing required fields: date, timer_leftover, description".to_string(),
        )),
    }
}
