use poem_openapi::{ApiResponse, Object, payload::Json};

#[derive(Object, Debug)]
pub struct TimelinePostDto {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub content: String,
    pub created_at: String,
}

#[derive(Object, Debug)]
pub struct TimelinePostsDto {
    pub timeline_posts: Vec<TimelinePostDto>,
}

#[derive(Object, Debug)]
pub struct ErrorDto {
    pub error: String,
}

#[derive(ApiResponse)]
pub enum CreateTimelinePostResponse {
    /// The stored post
    #[oai(status = 201)]
    Created(Json<TimelinePostDto>),
    /// The submission was rejected
    #[oai(status = 400)]
    BadRequest(Json<ErrorDto>),
}
