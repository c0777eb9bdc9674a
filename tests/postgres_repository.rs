//! Runs against a real server: `DATABASE_URL=postgres://... cargo test -- --ignored`.

use chrono::{Duration, TimeZone, Utc};
use portfolio::{
    domain::{repositories::TimelinePostRepository, value_objects::TimelinePostSubmission},
    infrastructure::repositories::postgres::PostgresTimelinePostRepository,
};
use sqlx::PgPool;

fn submission(name: &str) -> TimelinePostSubmission {
    TimelinePostSubmission::parse(name, "someone@example.com", "hello").unwrap()
}

#[sqlx::test]
#[ignore = "needs DATABASE_URL"]
async fn create_returns_the_stored_row(pool: PgPool) {
    let repo = PostgresTimelinePostRepository::new(pool);
    let before = Utc::now() - Duration::seconds(1);

    let post = repo.create(submission("Ada")).await.unwrap();

    assert!(post.id > 0);
    assert_eq!(post.name, "Ada");
    assert_eq!(post.email, "someone@example.com");
    assert_eq!(post.content, "hello");
    assert!(post.created_at >= before);
    assert_eq!(post.created_at.timestamp_subsec_nanos() % 1_000, 0);
    assert_eq!(repo.list_all().await.unwrap(), vec![post]);
}

#[sqlx::test]
#[ignore = "needs DATABASE_URL"]
async fn lists_newest_first_with_id_tie_break(pool: PgPool) {
    let stamp = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    for (name, created_at) in [
        ("p1", stamp),
        ("p2", stamp),
        ("p3", stamp - Duration::seconds(5)),
    ] {
        sqlx::query(
            "INSERT INTO timeline_posts (name, email, content, created_at) VALUES ($1, 'a@b', 'x', $2)",
        )
        .bind(name)
        .bind(created_at)
        .execute(&pool)
        .await
        .unwrap();
    }
    let repo = PostgresTimelinePostRepository::new(pool);

    let names: Vec<_> = repo
        .list_all()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, ["p2", "p1", "p3"]);
}

#[sqlx::test]
#[ignore = "needs DATABASE_URL"]
async fn schema_rejects_invalid_rows(pool: PgPool) {
    for (name, email, content) in [("  ", "a@b", "x"), ("Ada", "ab", "x"), ("Ada", "a@b", " ")] {
        let result = sqlx::query(
            "INSERT INTO timeline_posts (name, email, content) VALUES ($1, $2, $3)",
        )
        .bind(name)
        .bind(email)
        .bind(content)
        .execute(&pool)
        .await;
        assert!(result.is_err(), "{name:?} {email:?} {content:?}");
    }
}

#[sqlx::test]
#[ignore = "needs DATABASE_URL"]
async fn ping_succeeds(pool: PgPool) {
    let repo = PostgresTimelinePostRepository::new(pool);
    repo.ping().await.unwrap();
}
