use std::sync::Arc;

use tracing::error;

use crate::domain::{
    errors::DomainError, models::TimelinePost, repositories::TimelinePostRepository,
};

pub struct ListTimelinePostsUseCase {
    repo: Arc<dyn TimelinePostRepository>,
}

impl ListTimelinePostsUseCase {
    pub fn new(repo: Arc<dyn TimelinePostRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> Result<Vec<TimelinePost>, DomainError> {
        self.repo.list_all().await.map_err(|err| {
            error!(error = %err, "failed to load timeline posts");
            DomainError::StorageUnavailable(err)
        })
    }
}
