use std::sync::Arc;

use tracing::{error, info};

use crate::domain::{
    errors::DomainError, models::TimelinePost, repositories::TimelinePostRepository,
    value_objects::TimelinePostSubmission,
};

pub struct CreateTimelinePostUseCase {
    repo: Arc<dyn TimelinePostRepository>,
}

pub struct CreateTimelinePostRequest {
    pub name: String,
    pub email: String,
    pub content: String,
}

impl CreateTimelinePostUseCase {
    pub fn new(repo: Arc<dyn TimelinePostRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        request: CreateTimelinePostRequest,
    ) -> Result<TimelinePost, DomainError> {
        let submission =
            TimelinePostSubmission::parse(&request.name, &request.email, &request.content)?;

        let post = self.repo.create(submission).await.map_err(|err| {
            error!(error = %err, "failed to store timeline post");
            DomainError::StorageUnavailable(err)
        })?;

        info!(post_id = post.id, "timeline post created");
        Ok(post)
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::{
        domain::errors::ValidationError,
        infrastructure::repositories::in_memory::InMemoryTimelinePostRepository,
    };

    struct UnreachableRepository;

    #[async_trait]
    impl TimelinePostRepository for UnreachableRepository {
        async fn create(&self, _: TimelinePostSubmission) -> anyhow::Result<TimelinePost> {
            anyhow::bail!("connection refused")
        }

        async fn list_all(&self) -> anyhow::Result<Vec<TimelinePost>> {
            anyhow::bail!("connection refused")
        }

        async fn ping(&self) -> anyhow::Result<()> {
            anyhow::bail!("connection refused")
        }
    }

    fn request(name: &str, email: &str, content: &str) -> CreateTimelinePostRequest {
        CreateTimelinePostRequest {
            name: name.to_string(),
            email: email.to_string(),
            content: content.to_string(),
        }
    }

    #[tokio::test]
    async fn stores_trimmed_submission() {
        let repo = Arc::new(InMemoryTimelinePostRepository::new());
        let usecase = CreateTimelinePostUseCase::new(repo.clone());

        let post = usecase
            .execute(request(" Ada ", "ada@example.com", " first! "))
            .await
            .unwrap();

        assert_eq!(post.name, "Ada");
        assert_eq!(post.content, "first!");
        assert_eq!(repo.list_all().await.unwrap(), vec![post]);
    }

    #[tokio::test]
    async fn invalid_input_never_reaches_storage() {
        let repo = Arc::new(InMemoryTimelinePostRepository::new());
        let usecase = CreateTimelinePostUseCase::new(repo.clone());

        let err = usecase
            .execute(request("Ada", "nope", "hi"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            DomainError::Validation(ValidationError::InvalidEmail)
        ));
        assert!(repo.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn storage_failure_is_reported_as_unavailable() {
        let usecase = CreateTimelinePostUseCase::new(Arc::new(UnreachableRepository));

        let err = usecase
            .execute(request("Ada", "ada@example.com", "hi"))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::StorageUnavailable(_)));
    }
}
