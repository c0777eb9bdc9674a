use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A guestbook entry as stored. Posts are append-only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimelinePost {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}
