use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, Pool, Postgres};

use crate::domain::{
    models::TimelinePost, repositories::TimelinePostRepository,
    value_objects::TimelinePostSubmission,
};

pub type PgPool = Pool<Postgres>;

#[derive(Clone)]
pub struct PostgresTimelinePostRepository {
    pool: PgPool,
}

impl PostgresTimelinePostRepository {
    pub fn new(pool: PgPool) -> Arc<Self> {
        Arc::new(Self { pool })
    }
}

#[async_trait]
impl TimelinePostRepository for PostgresTimelinePostRepository {
    async fn create(&self, submission: TimelinePostSubmission) -> anyhow::Result<TimelinePost> {
        let record = sqlx::query_as::<_, TimelinePostRecord>(
            r#"
            INSERT INTO timeline_posts (name, email, content, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, content, created_at
            "#,
        )
        .bind(submission.name())
        .bind(submission.email())
        .bind(submission.content())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(record.into())
    }

    async fn list_all(&self) -> anyhow::Result<Vec<TimelinePost>> {
        let rows = sqlx::query_as::<_, TimelinePostRecord>(
            r#"
            SELECT id, name, email, content, created_at
            FROM timeline_posts
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(TimelinePost::from).collect())
    }

    async fn ping(&self) -> anyhow::Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[derive(FromRow)]
struct TimelinePostRecord {
    id: i64,
    name: String,
    email: String,
    content: String,
    created_at: DateTime<Utc>,
}

impl From<TimelinePostRecord> for TimelinePost {
    fn from(value: TimelinePostRecord) -> Self {
        Self {
            id: value.id,
            name: value.name,
            email: value.email,
            content: value.content,
            created_at: value.created_at,
        }
    }
}
