pub mod create_timeline_post;
pub mod list_timeline_posts;
