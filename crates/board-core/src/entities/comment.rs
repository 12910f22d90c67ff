//! Comment entity

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

pub const MAX_COMMENT_LENGTH: usize = 5000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: Snowflake,
    pub message_id: Snowflake,
    pub author_id: Snowflake,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(id: Snowflake, message_id: Snowflake, author_id: Snowflake, content: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            message_id,
            author_id,
            content,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn edit(&mut self, content: String) {
        self.content = content;
        self.updated_at = Utc::now();
    }

    /// The comment's author or the owner of the message it sits under
    pub fn can_be_deleted_by(&self, user_id: Snowflake, message_owner_id: Snowflake) -> bool {
        self.author_id == user_id || message_owner_id == user_id
    }
}
