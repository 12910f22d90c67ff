//! Message entity - a board post with its denormalized engagement counters

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{slugify, Snowflake};

pub const MAX_TITLE_LENGTH: usize = 200;

/// Publication state of a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    #[default]
    Draft,
    Published,
}

impl MessageStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "draft" => Some(Self::Draft),
            "published" => Some(Self::Published),
            _ => None,
        }
    }
}

/// Message entity
///
/// `published_at` is `Some` exactly when `status` is [`MessageStatus::Published`];
/// go through [`Message::set_status`] to keep it that way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: Snowflake,
    pub author_id: Snowflake,
    pub category_id: Snowflake,
    pub title: String,
    pub slug: String,
    pub body: String,
    pub image: Option<String>,
    pub status: MessageStatus,
    pub tag_ids: Vec<Snowflake>,
    pub views: i64,
    pub likes: i64,
    pub comments_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
}

impl Message {
    /// Create a new Message with zeroed counters
    pub fn new(
        id: Snowflake,
        author_id: Snowflake,
        category_id: Snowflake,
        title: String,
        body: String,
        status: MessageStatus,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            author_id,
            category_id,
            slug: slugify(&title, MAX_TITLE_LENGTH),
            title,
            body,
            image: None,
            status,
            tag_ids: Vec::new(),
            views: 0,
            likes: 0,
            comments_count: 0,
            created_at: now,
            updated_at: now,
            published_at: (status == MessageStatus::Published).then_some(now),
        }
    }

    #[inline]
    pub fn is_published(&self) -> bool {
        self.status == MessageStatus::Published
    }

    #[inline]
    pub fn is_owned_by(&self, user_id: Snowflake) -> bool {
        self.author_id == user_id
    }

    /// Drafts are only visible to their author
    pub fn is_visible_to(&self, viewer: Option<Snowflake>) -> bool {
        self.is_published() || viewer.is_some_and(|v| self.is_owned_by(v))
    }

    /// Change status. Publishing keeps an existing `published_at`; drafting clears it.
    pub fn set_status(&mut self, status: MessageStatus) {
        self.status = status;
        match status {
            MessageStatus::Published => {
                if self.published_at.is_none() {
                    self.published_at = Some(Utc::now());
                }
            }
            MessageStatus::Draft => self.published_at = None,
        }
        self.updated_at = Utc::now();
    }

    /// Retitle and re-derive the slug
    pub fn set_title(&mut self, title: String) {
        self.slug = slugify(&title, MAX_TITLE_LENGTH);
        self.title = title;
        self.updated_at = Utc::now();
    }

    pub fn set_body(&mut self, body: String) {
        self.body = body;
        self.updated_at = Utc::now();
    }

    pub fn set_image(&mut self, image: Option<String>) {
        self.image = image.filter(|i| !i.trim().is_empty());
        self.updated_at = Utc::now();
    }

    /// Replace the tag set, dropping duplicates while keeping order
    pub fn set_tags(&mut self, tag_ids: Vec<Snowflake>) {
        let mut seen = Vec::with_capacity(tag_ids.len());
        for id in tag_ids {
            if !seen.contains(&id) {
                seen.push(id);
            }
        }
        self.tag_ids = seen;
        self.updated_at = Utc::now();
    }
}
