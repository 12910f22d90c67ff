//! Tag entity

use chrono::{DateTime, Utc};

use crate::value_objects::{slugify, Snowflake};

pub const MAX_TAG_NAME_LENGTH: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub id: Snowflake,
    pub name: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
}

impl Tag {
    pub fn new(id: Snowflake, name: String, slug: Option<String>) -> Self {
        let slug = match slug {
            Some(s) if !s.trim().is_empty() => slugify(&s, MAX_TAG_NAME_LENGTH),
            _ => slugify(&name, MAX_TAG_NAME_LENGTH),
        };
        Self {
            id,
            name,
            slug,
            created_at: Utc::now(),
        }
    }
}
