//! Message entity <-> model mapper

use board_core::entities::{Message, MessageStatus};
use board_core::value_objects::Snowflake;

use crate::models::MessageModel;

impl From<MessageModel> for Message {
    fn from(model: MessageModel) -> Self {
        // status is guarded by a CHECK constraint
        let status = MessageStatus::parse(&model.status).unwrap_or_default();
        Message {
            id: Snowflake::new(model.id),
            author_id: Snowflake::new(model.author_id),
            category_id: Snowflake::new(model.category_id),
            title: model.title,
            slug: model.slug,
            body: model.body,
            image: model.image,
            status,
            tag_ids: model.tag_ids.into_iter().map(Snowflake::new).collect(),
            views: model.views,
            likes: model.likes,
            comments_count: model.comments_count,
            created_at: model.created_at,
            updated_at: model.updated_at,
            published_at: model.published_at,
        }
    }
}

/// Tag ids as a BIGINT[] bind value
pub fn tag_ids_to_i64(tag_ids: &[Snowflake]) -> Vec<i64> {
    tag_ids.iter().map(|id| id.into_inner()).collect()
}
