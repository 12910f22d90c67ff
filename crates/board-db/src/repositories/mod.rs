//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in board-core.
//! Each repository handles database operations for a specific domain entity.

mod category;
mod comment;
mod engagement;
mod error;
mod message;
mod notification;
mod tag;
mod user;

pub use category::PgCategoryRepository;
pub use comment::PgCommentRepository;
pub use engagement::PgEngagementRepository;
pub use message::PgMessageRepository;
pub use notification::PgNotificationRepository;
pub use tag::PgTagRepository;
pub use user::PgUserRepository;
