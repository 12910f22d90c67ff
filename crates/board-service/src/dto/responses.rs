//! Response DTOs for API endpoints
//!
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use board_core::{MessageStatus, NotificationVerb, Page, PageRequest};
use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Common Response Types
// ============================================================================

/// Generic API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// One page of results with page-number metadata
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

impl<T> PaginatedResponse<T> {
    pub fn from_page<E>(page: Page<E>, request: PageRequest, f: impl FnMut(E) -> T) -> Self {
        let total = page.total;
        Self {
            data: page.items.into_iter().map(f).collect(),
            pagination: PaginationMeta::new(request, total),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PaginationMeta {
    pub page: u32,
    pub per_page: u32,
    pub total: i64,
    pub total_pages: i64,
    pub has_next: bool,
}

impl PaginationMeta {
    pub fn new(request: PageRequest, total: i64) -> Self {
        let per_page = i64::from(request.per_page);
        let total_pages = (total + per_page - 1) / per_page;
        Self {
            page: request.page,
            per_page: request.per_page,
            total,
            total_pages,
            has_next: i64::from(request.page) < total_pages,
        }
    }
}

// ============================================================================
// Auth Responses
// ============================================================================

/// Authentication response with tokens
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: CurrentUserResponse,
}

// ============================================================================
// User Responses
// ============================================================================

/// Public profile
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub bio: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// The authenticated user's own profile, including email
#[derive(Debug, Clone, Serialize)]
pub struct CurrentUserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub bio: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Author shown alongside a message
#[derive(Debug, Clone, Serialize)]
pub struct AuthorResponse {
    pub id: String,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

// ============================================================================
// Category / Tag Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct CategoryResponse {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TagResponse {
    pub id: String,
    pub name: String,
    pub slug: String,
}

// ============================================================================
// Message Responses
// ============================================================================

/// Message as it appears in lists
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub id: String,
    pub author_id: String,
    pub category_id: String,
    pub title: String,
    pub slug: String,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub status: MessageStatus,
    pub tag_ids: Vec<String>,
    pub views: i64,
    pub likes: i64,
    pub comments_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
}

/// Detail view: the message with its author, category, tags and related posts
#[derive(Debug, Clone, Serialize)]
pub struct MessageDetailResponse {
    #[serde(flatten)]
    pub message: MessageResponse,
    pub author: AuthorResponse,
    pub category: CategoryResponse,
    pub tags: Vec<TagResponse>,
    pub related: Vec<MessageResponse>,
    /// Whether the viewer has liked it; false for anonymous viewers
    pub liked: bool,
    pub favorited: bool,
}

// ============================================================================
// Comment Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    pub id: String,
    pub message_id: String,
    pub author_id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Engagement Responses
// ============================================================================

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LikeResponse {
    pub liked: bool,
    pub likes: i64,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FavoriteResponse {
    pub favorited: bool,
    pub created: bool,
    pub detail: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct UnfavoriteResponse {
    pub favorited: bool,
    pub removed: bool,
    pub detail: String,
}

// ============================================================================
// Notification Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct NotificationResponse {
    pub id: String,
    pub actor_id: String,
    pub verb: NotificationVerb,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    pub content: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

/// A page of notifications plus the recipient's unread total
#[derive(Debug, Serialize)]
pub struct NotificationPageResponse {
    #[serde(flatten)]
    pub page: PaginatedResponse<NotificationResponse>,
    pub unread_count: i64,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct UnreadCountResponse {
    pub unread_count: i64,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct UpdatedResponse {
    pub updated: u64,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct DeletedResponse {
    pub deleted: u64,
}

// ============================================================================
// Health Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_meta() {
        let meta = PaginationMeta::new(PageRequest::new(1, 10), 25);
        assert_eq!(meta.total_pages, 3);
        assert!(meta.has_next);

        let meta = PaginationMeta::new(PageRequest::new(3, 10), 25);
        assert!(!meta.has_next);

        let meta = PaginationMeta::new(PageRequest::new(1, 10), 0);
        assert_eq!(meta.total_pages, 0);
        assert!(!meta.has_next);
    }

    #[test]
    fn test_paginated_response_shape() {
        let page = Page::new(vec![1, 2], 12);
        let response = PaginatedResponse::from_page(page, PageRequest::new(1, 2), |n| n * 10);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["data"], serde_json::json!([10, 20]));
        assert_eq!(json["pagination"]["total_pages"], 6);
        assert_eq!(json["pagination"]["has_next"], true);
    }

    #[test]
    fn test_favorite_response_shape() {
        let json = serde_json::to_value(FavoriteResponse {
            favorited: true,
            created: false,
            detail: "already favorited".to_string(),
        })
        .unwrap();
        assert_eq!(
            json,
            serde_json::json!({"favorited": true, "created": false, "detail": "already favorited"})
        );
    }

    #[test]
    fn test_readiness() {
        assert!(ReadinessResponse::ready(true).is_ready());
        let not_ready = ReadinessResponse::ready(false);
        assert_eq!(not_ready.checks.database, "unhealthy");
        assert!(!not_ready.is_ready());
    }
}
