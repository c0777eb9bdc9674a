#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use poem::{Endpoint, test::TestResponse};
use portfolio::{
    config::Config,
    domain::{
        models::TimelinePost, repositories::TimelinePostRepository,
        value_objects::TimelinePostSubmission,
    },
    infrastructure::{
        profile::site_owner, repositories::in_memory::InMemoryTimelinePostRepository,
    },
    presentation::{app::build_app, http::endpoints::root::ApiState},
};
use serde_json::Value;

pub struct UnreachableRepository;

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

fn testing_config() -> Config {
    Config::from_lookup(|key| (key == "TESTING").then(|| "true".to_string()))
        .expect("testing config")
}

pub fn app_with(repo: Arc<dyn TimelinePostRepository>) -> impl Endpoint {
    build_app(ApiState::new(repo), Arc::new(site_owner()), &testing_config())
}

pub fn app() -> impl Endpoint {
    app_with(Arc::new(InMemoryTimelinePostRepository::new()))
}

pub fn broken_app() -> impl Endpoint {
    app_with(Arc::new(UnreachableRepository))
}

pub async fn read_json(response: TestResponse) -> Value {
    response.0.into_body().into_json().await.expect("json body")
}

pub async fn text(response: TestResponse) -> String {
    response.0.into_body().into_string().await.expect("text body")
}
