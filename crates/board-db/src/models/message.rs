//! Message database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Row of the messages table joined with its tag ids
#[derive(Debug, Clone, FromRow)]
pub struct MessageModel {
    pub id: i64,
    pub author_id: i64,
    pub category_id: i64,
    pub title: String,
    pub slug: String,
    pub body: String,
    pub image: Option<String>,
    pub status: String,
    /// Aggregated from message_tags
    pub tag_ids: Vec<i64>,
    pub views: i64,
    pub likes: i64,
    pub comments_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
}

impl MessageModel {
    #[inline]
    pub fn is_published(&self) -> bool {
        self.status == "published"
    }
}
