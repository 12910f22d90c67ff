use board_core::entities::Tag;
use board_core::value_objects::Snowflake;

use crate::models::TagModel;

impl From<TagModel> for Tag {
    fn from(model: TagModel) -> Self {
        Tag {
            id: Snowflake::new(model.id),
            name: model.name,
            slug: model.slug,
            created_at: model.created_at,
        }
    }
}
