//! # board-core
//!
//! Domain layer containing entities, value objects, repository traits, and the
//! notification rules for engagement events.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Category, Comment, EngagementVerb, Favorite, Like, Message, MessageStatus, Notification,
    NotificationVerb, Tag, User,
};
pub use error::DomainError;
pub use traits::{
    CategoryRepository, CommentRepository, EngagementRepository, MessageFilter, MessageRepository,
    NotificationRepository, Page, PageRequest, RepoResult, TagRepository, UserRepository,
};
pub use value_objects::{slugify, Snowflake, SnowflakeGenerator, SnowflakeParseError};
