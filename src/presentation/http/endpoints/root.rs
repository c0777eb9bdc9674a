use std::sync::Arc;

use poem_openapi::Tags;

use crate::{
    application::usecases::{
        create_timeline_post::CreateTimelinePostUseCase,
        list_timeline_posts::ListTimelinePostsUseCase,
    },
    domain::repositories::TimelinePostRepository,
};

pub struct ApiState {
    pub storage: Arc<dyn TimelinePostRepository>,
    pub create_post_usecase: Arc<CreateTimelinePostUseCase>,
    pub list_posts_usecase: Arc<ListTimelinePostsUseCase>,
}

impl ApiState {
    pub fn new(repo: Arc<dyn TimelinePostRepository>) -> Arc<Self> {
        Arc::new(Self {
            create_post_usecase: Arc::new(CreateTimelinePostUseCase::new(repo.clone())),
            list_posts_usecase: Arc::new(ListTimelinePostsUseCase::new(repo.clone())),
            storage: repo,
        })
    }
}

/// Enum of API sections (tags)
#[derive(Tags)]
pub enum EndpointsTags {
    Health,
    Timeline,
}
