//! Business logic services
//!
//! Each service borrows the shared [`ServiceContext`] for the duration of a
//! request.

pub mod auth;
pub mod category;
pub mod comment;
pub mod context;
pub mod engagement;
pub mod error;
pub mod message;
pub mod notification;
pub mod tag;
pub mod user;

pub use auth::AuthService;
pub use category::CategoryService;
pub use comment::CommentService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use engagement::EngagementService;
pub use error::{ServiceError, ServiceResult};
pub use message::{MessageService, RELATED_LIMIT};
pub use notification::NotificationService;
pub use tag::TagService;
pub use user::UserService;
