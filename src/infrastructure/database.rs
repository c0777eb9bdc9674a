use std::sync::Arc;

use anyhow::Context;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use tracing::info;

use crate::{
    config::{POSTGRES_PORT, PostgresConfig, StorageConfig},
    domain::repositories::TimelinePostRepository,
    infrastructure::repositories::{
        in_memory::InMemoryTimelinePostRepository,
        postgres::{PgPool, PostgresTimelinePostRepository},
    },
};

/// Builds the configured backend. Postgres is connected and migrated here,
/// so an unreachable database stops startup instead of failing later requests.
pub async fn connect_repository(
    storage: &StorageConfig,
) -> anyhow::Result<Arc<dyn TimelinePostRepository>> {
    let repo: Arc<dyn TimelinePostRepository> = match storage {
        StorageConfig::InMemory => {
            info!("running in test mode with in-memory storage");
            Arc::new(InMemoryTimelinePostRepository::new())
        }
        StorageConfig::Postgres(config) => {
            let pool = connect_postgres(config).await?;
            info!(host = %config.host, database = %config.database, "database connected");
            PostgresTimelinePostRepository::new(pool)
        }
    };
    Ok(repo)
}

async fn connect_postgres(config: &PostgresConfig) -> anyhow::Result<PgPool> {
    let options = PgConnectOptions::new()
        .host(&config.host)
        .port(POSTGRES_PORT)
        .username(&config.user)
        .password(&config.password)
        .database(&config.database);

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
        .with_context(|| format!("failed to connect to postgres at {}", config.host))?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("failed to apply migrations")?;

    Ok(pool)
}
