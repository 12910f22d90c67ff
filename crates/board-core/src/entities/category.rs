//! Category entity

use chrono::{DateTime, Utc};

use crate::value_objects::{slugify, Snowflake};

pub const MAX_CATEGORY_NAME_LENGTH: usize = 100;

/// A top-level grouping; every message belongs to exactly one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: Snowflake,
    pub name: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Category {
    /// Create a category; the slug is derived from the name when not given
    pub fn new(id: Snowflake, name: String, slug: Option<String>) -> Self {
        let slug = match slug {
            Some(s) if !s.trim().is_empty() => slugify(&s, MAX_CATEGORY_NAME_LENGTH),
            _ => slugify(&name, MAX_CATEGORY_NAME_LENGTH),
        };
        let now = Utc::now();
        Self {
            id,
            name,
            slug,
            created_at: now,
            updated_at: now,
        }
    }
}
