//! Domain entities - core business objects

mod category;
mod comment;
mod engagement;
mod message;
mod notification;
mod tag;
mod user;

pub use category::{Category, MAX_CATEGORY_NAME_LENGTH};
pub use comment::{Comment, MAX_COMMENT_LENGTH};
pub use engagement::{EngagementVerb, Favorite, Like};
pub use message::{Message, MessageStatus, MAX_TITLE_LENGTH};
pub use notification::{Notification, NotificationVerb};
pub use tag::{Tag, MAX_TAG_NAME_LENGTH};
pub use user::{User, MAX_BIO_LENGTH};
