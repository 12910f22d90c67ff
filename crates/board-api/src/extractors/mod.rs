//! Axum extractors for request handling
//!
//! Custom extractors for authentication, validation, ids and pagination.

mod auth;
mod pagination;
mod path;
mod validated;

pub use auth::{AuthUser, OptionalAuthUser};
pub use pagination::{NotificationQuery, PageParams, Pagination};
pub use path::IdPath;
pub use validated::ValidatedJson;
