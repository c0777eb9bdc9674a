use std::sync::Arc;

use async_trait::async_trait;
use chrono::{SubsecRound, Utc};
use tokio::sync::RwLock;

use crate::domain::{
    models::TimelinePost, repositories::TimelinePostRepository,
    value_objects::TimelinePostSubmission,
};

#[derive(Default)]
struct Table {
    next_id: i64,
    rows: Vec<TimelinePost>,
}

/// Process-local store used in testing mode. Clones share the same table.
#[derive(Default, Clone)]
pub struct InMemoryTimelinePostRepository {
    table: Arc<RwLock<Table>>,
}

impl InMemoryTimelinePostRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TimelinePostRepository for InMemoryTimelinePostRepository {
    async fn create(&self, submission: TimelinePostSubmission) -> anyhow::Result<TimelinePost> {
        let (name, email, content) = submission.into_parts();
        let mut table = self.table.write().await;

        table.next_id += 1;
        let post = TimelinePost {
            id: table.next_id,
            name,
            email,
            content,
            // Microsecond precision, like TIMESTAMPTZ.
            created_at: Utc::now().trunc_subsecs(6),
        };
        table.rows.push(post.clone());
        Ok(post)
    }

    async fn list_all(&self) -> anyhow::Result<Vec<TimelinePost>> {
        let table = self.table.read().await;
        let mut posts = table.rows.clone();
        posts.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(posts)
    }

    async fn ping(&self) -> anyhow::Result<()> {
        Ok(())
    }
}
