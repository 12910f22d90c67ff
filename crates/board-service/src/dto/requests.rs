//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use board_core::{MessageStatus, Snowflake};
use serde::Deserialize;
use validator::{Validate, ValidateUrl, ValidationError};

/// Profile and image fields accept a URL, or a blank string to clear the value
fn url_or_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() || value.validate_url() {
        Ok(())
    } else {
        Err(ValidationError::new("url").with_message("Must be a valid URL".into()))
    }
}

// ============================================================================
// Auth Requests
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 3, max = 32, message = "Username must be 3-32 characters"))]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, max = 128, message = "Password must be 8-128 characters"))]
    pub password: String,
}

/// Login is by username
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RefreshTokenRequest {
    #[validate(length(min = 1, message = "Refresh token is required"))]
    pub refresh_token: String,
}

// ============================================================================
// User Requests
// ============================================================================

/// Partial profile update; absent fields are left alone
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(max = 500, message = "Bio must be at most 500 characters"))]
    pub bio: Option<String>,

    #[validate(custom(function = "url_or_blank"))]
    pub website: Option<String>,

    #[validate(custom(function = "url_or_blank"))]
    pub avatar: Option<String>,
}

// ============================================================================
// Category / Tag Requests
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCategoryRequest {
    #[validate(length(min = 1, max = 100, message = "Category name must be 1-100 characters"))]
    pub name: String,

    /// Derived from the name when absent
    #[validate(length(max = 100, message = "Slug must be at most 100 characters"))]
    pub slug: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTagRequest {
    #[validate(length(min = 1, max = 50, message = "Tag name must be 1-50 characters"))]
    pub name: String,

    #[validate(length(max = 50, message = "Slug must be at most 50 characters"))]
    pub slug: Option<String>,
}

// ============================================================================
// Message Requests
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMessageRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(min = 1, message = "Body is required"))]
    pub body: String,

    pub category_id: Snowflake,

    #[serde(default)]
    pub tag_ids: Vec<Snowflake>,

    #[validate(custom(function = "url_or_blank"))]
    pub image: Option<String>,

    /// Draft unless stated otherwise
    #[serde(default)]
    pub status: MessageStatus,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateMessageRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: Option<String>,

    #[validate(length(min = 1, message = "Body cannot be empty"))]
    pub body: Option<String>,

    pub category_id: Option<Snowflake>,

    /// Replaces the whole tag set when present
    pub tag_ids: Option<Vec<Snowflake>>,

    /// Absent (or `null`) keeps the current image; a blank string removes it
    #[validate(custom(function = "url_or_blank"))]
    pub image: Option<String>,

    pub status: Option<MessageStatus>,
}

// ============================================================================
// Comment Requests
// ============================================================================

/// Used for both creating and editing a comment
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CommentRequest {
    #[validate(length(min = 1, max = 5000, message = "Comment must be 1-5000 characters"))]
    pub content: String,
}
