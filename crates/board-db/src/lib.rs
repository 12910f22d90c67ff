//! # board-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `board-core`. It handles:
//!
//! - Connection pool management and schema migrations
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations, including the transactional engagement writes
//!
//! ## Usage
//!
//! ```rust,ignore
//! use board_db::pool::{create_pool, run_migrations, DatabaseConfig};
//! use board_db::repositories::PgMessageRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     run_migrations(&pool, "./migrations").await?;
//!     let message_repo = PgMessageRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{
    create_lazy_pool, create_pool, create_pool_from_env, run_migrations, DatabaseConfig, PgPool,
};
pub use repositories::{
    PgCategoryRepository, PgCommentRepository, PgEngagementRepository, PgMessageRepository,
    PgNotificationRepository, PgTagRepository, PgUserRepository,
};
