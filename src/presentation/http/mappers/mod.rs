use crate::{domain::models::TimelinePost, presentation::http::responses::TimelinePostDto};

pub fn map_post(post: &TimelinePost) -> TimelinePostDto {
    TimelinePostDto {
        id: post.id,
        name: post.name.clone(),
        email: post.email.clone(),
        content: post.content.clone(),
        created_at: post.created_at.to_rfc3339(),
    }
}
