//! Data transfer objects for API requests and responses

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    CommentRequest, CreateCategoryRequest, CreateMessageRequest, CreateTagRequest, LoginRequest,
    RefreshTokenRequest, RegisterRequest, UpdateMessageRequest, UpdateProfileRequest,
};

pub use responses::{
    ApiResponse, AuthResponse, AuthorResponse, CategoryResponse, CommentResponse,
    CurrentUserResponse, DeletedResponse, FavoriteResponse, HealthChecks, HealthResponse,
    LikeResponse, MessageDetailResponse, MessageResponse, NotificationPageResponse,
    NotificationResponse, PaginatedResponse, PaginationMeta, ReadinessResponse, TagResponse,
    UnfavoriteResponse, UnreadCountResponse, UpdatedResponse, UserResponse,
};
