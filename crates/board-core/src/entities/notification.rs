//! Notification entity and the rule that decides when engagement produces one

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::engagement::EngagementVerb;
use super::message::Message;
use super::user::User;
use crate::value_objects::Snowflake;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationVerb {
    Like,
    Comment,
    Favorite,
    Follow,
}

impl NotificationVerb {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Comment => "comment",
            Self::Favorite => "favorite",
            Self::Follow => "follow",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "like" => Some(Self::Like),
            "comment" => Some(Self::Comment),
            "favorite" => Some(Self::Favorite),
            "follow" => Some(Self::Follow),
            _ => None,
        }
    }
}

impl From<EngagementVerb> for NotificationVerb {
    fn from(verb: EngagementVerb) -> Self {
        match verb {
            EngagementVerb::Like => Self::Like,
            EngagementVerb::Comment => Self::Comment,
            EngagementVerb::Favorite => Self::Favorite,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: Snowflake,
    pub recipient_id: Snowflake,
    pub actor_id: Snowflake,
    pub verb: NotificationVerb,
    pub message_id: Option<Snowflake>,
    pub content: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Build the notification for `actor` engaging with `message`.
    ///
    /// Returns `None` for self-actions: nobody is notified about their own likes,
    /// comments or favorites.
    pub fn for_engagement(
        id: Snowflake,
        actor: &User,
        verb: EngagementVerb,
        message: &Message,
    ) -> Option<Self> {
        if message.is_owned_by(actor.id) {
            return None;
        }

        let action = match verb {
            EngagementVerb::Like => "liked",
            EngagementVerb::Comment => "commented on",
            EngagementVerb::Favorite => "favorited",
        };

        Some(Self {
            id,
            recipient_id: message.author_id,
            actor_id: actor.id,
            verb: verb.into(),
            message_id: Some(message.id),
            content: format!(
                "{} {} your message \"{}\"",
                actor.username, action, message.title
            ),
            is_read: false,
            created_at: Utc::now(),
        })
    }

    pub fn mark_read(&mut self) {
        self.is_read = true;
    }
}
