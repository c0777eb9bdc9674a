use std::sync::Arc;

use poem::{Result as PoemResult, http::StatusCode};
use poem_openapi::{OpenApi, payload::Json};

use crate::{
    application::usecases::create_timeline_post::CreateTimelinePostRequest,
    domain::errors::DomainError,
    presentation::http::{
        endpoints::root::{ApiState, EndpointsTags},
        mappers::map_post,
        requests::TimelinePostRequestDto,
        responses::{CreateTimelinePostResponse, ErrorDto, TimelinePostsDto},
    },
};

#[derive(Clone)]
pub struct TimelineEndpoints {
    state: Arc<ApiState>,
}

impl TimelineEndpoints {
    pub fn new(state: Arc<ApiState>) -> Self {
        Self { state }
    }
}

#[OpenApi]
impl TimelineEndpoints {
    #[oai(path = "/timeline_post", method = "post", tag = EndpointsTags::Timeline)]
    pub async fn create_post(
        &self,
        request: TimelinePostRequestDto,
    ) -> PoemResult<CreateTimelinePostResponse> {
        let (name, email, content) = request.into_fields();
        let payload = CreateTimelinePostRequest {
            name,
            email,
            content,
        };

        match self.state.create_post_usecase.execute(payload).await {
            Ok(post) => Ok(CreateTimelinePostResponse::Created(Json(map_post(&post)))),
            Err(DomainError::Validation(err)) => {
                Ok(CreateTimelinePostResponse::BadRequest(Json(ErrorDto {
                    error: err.to_string(),
                })))
            }
            Err(err) => Err(internal_error(err)),
        }
    }

    #[oai(path = "/timeline_post", method = "get", tag = EndpointsTags::Timeline)]
    pub async fn list_posts(&self) -> PoemResult<Json<TimelinePostsDto>> {
        let posts = self
            .state
            .list_posts_usecase
            .execute()
            .await
            .map_err(internal_error)?;

        Ok(Json(TimelinePostsDto {
            timeline_posts: posts.iter().map(map_post).collect(),
        }))
    }
}

// Cause is logged by the use case.
fn internal_error(_: DomainError) -> poem::Error {
    poem::Error::from_string("storage unavailable", StatusCode::INTERNAL_SERVER_ERROR)
}
