use async_trait::async_trait;

use crate::domain::{models::TimelinePost, value_objects::TimelinePostSubmission};

#[async_trait]
pub trait TimelinePostRepository: Send + Sync {
    /// Stores a submission, stamping `created_at` with the current time.
    async fn create(&self, submission: TimelinePostSubmission) -> anyhow::Result<TimelinePost>;

    /// Every post, newest first. Equal timestamps fall back to the higher id first.
    async fn list_all(&self) -> anyhow::Result<Vec<TimelinePost>>;

    async fn ping(&self) -> anyhow::Result<()>;
}
