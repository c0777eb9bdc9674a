pub mod profile;
pub mod timeline_post;

pub use profile::{Education, Hobby, Place, User, Work};
pub use timeline_post::TimelinePost;
