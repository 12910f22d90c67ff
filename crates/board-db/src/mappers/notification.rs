use board_core::entities::{Notification, NotificationVerb};
use board_core::value_objects::Snowflake;

use crate::models::NotificationModel;

impl From<NotificationModel> for Notification {
    fn from(model: NotificationModel) -> Self {
        // verb is guarded by a CHECK constraint
        let verb = NotificationVerb::parse(&model.verb).unwrap_or(NotificationVerb::Like);
        Notification {
            id: Snowflake::new(model.id),
            recipient_id: Snowflake::new(model.recipient_id),
            actor_id: Snowflake::new(model.actor_id),
            verb,
            message_id: model.message_id.map(Snowflake::new),
            content: model.content,
            is_read: model.is_read,
            created_at: model.created_at,
        }
    }
}
