//! Like and Favorite records: one per (user, message) pair

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Actions on a message that notify its owner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngagementVerb {
    Like,
    Comment,
    Favorite,
}

/// Add-only; there is no unlike
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Like {
    pub user_id: Snowflake,
    pub message_id: Snowflake,
    pub created_at: DateTime<Utc>,
}

impl Like {
    pub fn new(user_id: Snowflake, message_id: Snowflake) -> Self {
        Self {
            user_id,
            message_id,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Favorite {
    pub user_id: Snowflake,
    pub message_id: Snowflake,
    pub created_at: DateTime<Utc>,
}

impl Favorite {
    pub fn new(user_id: Snowflake, message_id: Snowflake) -> Self {
        Self {
            user_id,
            message_id,
            created_at: Utc::now(),
        }
    }
}
