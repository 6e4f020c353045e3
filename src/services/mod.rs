//! Business logic services

pub mod dates;
pub mod logs;

use crate::{error::AppResult, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub dates: dates::DatesService,
    pub logs: logs::LogsService,
    repository: Repository,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            dates: dates::DatesService::new(repository.clone()),
            logs: logs::LogsService::new(repository.clone()),
            repository,
        }
    }

    /// Database connectivity probe for the readiness endpoint
    pub async fn ping(&self) -> AppResult<()> {
        self.repository.ping().await
    }
}
