//! # board-service
//!
//! Application layer: one service per resource over the repository traits
//! from `board-core`, plus the request and response DTOs the API speaks.

pub mod dto;
pub mod services;

pub use services::{
    AuthService, CategoryService, CommentService, EngagementService, MessageService,
    NotificationService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
    TagService, UserService,
};
