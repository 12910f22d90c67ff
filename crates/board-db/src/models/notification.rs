//! Notification database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for notifications table
#[derive(Debug, Clone, FromRow)]
pub struct NotificationModel {
    pub id: i64,
    pub recipient_id: i64,
    pub actor_id: i64,
    pub verb: String,
    pub message_id: Option<i64>,
    pub content: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}
