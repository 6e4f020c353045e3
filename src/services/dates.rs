//! Date registry service

use crate::{error::AppResult, models::DateRecord, repository::Repository};

#[derive(Clone)]
pub struct DatesService {
    repository: Repository,
}

impl DatesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List every date that has at least one log entry
    pub async fn list(&self) -> AppResult<Vec<DateRecord>> {
        self.repository.dates.list().await
    }
}
