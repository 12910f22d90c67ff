//! Database models - SQLx-compatible structs for PostgreSQL tables

mod category;
mod comment;
mod message;
mod notification;
mod tag;
mod user;

pub use category::CategoryModel;
pub use comment::CommentModel;
pub use message::MessageModel;
pub use notification::NotificationModel;
pub use tag::TagModel;
pub use user::UserModel;
