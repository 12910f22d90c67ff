//! User entity - a registered board member and their profile

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Maximum length of the profile bio
pub const MAX_BIO_LENGTH: usize = 500;

/// User account; the profile fields live on the same record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    pub username: String,
    pub email: String,
    pub bio: String,
    pub website: Option<String>,
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new User with an empty profile
    pub fn new(id: Snowflake, username: String, email: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            username,
            email,
            bio: String::new(),
            website: None,
            avatar: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check whether a username is 3-32 chars of letters, digits, `_` or `-`
    pub fn is_valid_username(username: &str) -> bool {
        let len = username.chars().count();
        (3..=32).contains(&len)
            && username
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    }

    pub fn set_bio(&mut self, bio: String) {
        self.bio = bio;
        self.updated_at = Utc::now();
    }

    /// Empty strings clear the field
    pub fn set_website(&mut self, website: Option<String>) {
        self.website = website.filter(|w| !w.trim().is_empty());
        self.updated_at = Utc::now();
    }

    /// Empty strings clear the field
    pub fn set_avatar(&mut self, avatar: Option<String>) {
        self.avatar = avatar.filter(|a| !a.trim().is_empty());
        self.updated_at = Utc::now();
    }
}
