//! Test fixtures and data generators
//!
//! Request bodies with unique values, the subset of response shapes the tests
//! read back, and setup shortcuts.

use anyhow::Result;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::helpers::{assert_json, TestServer};

static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique across the test run, even when several test binaries share a database
pub fn unique_suffix() -> String {
    let n = COUNTER.fetch_add(1, Ordering::SeqCst);
    format!("{}{n}", std::process::id())
}

/// Seeded category "technology"
pub const TECHNOLOGY_CATEGORY_ID: &str = "1";

#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            username: format!("user{suffix}"),
            email: format!("user{suffix}@example.com"),
            password: "TestPass123".to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            username: reg.username.clone(),
            password: reg.password.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreateMessageRequest {
    pub title: String,
    pub body: String,
    pub category_id: String,
    pub tag_ids: Vec<String>,
    pub status: String,
}

impl CreateMessageRequest {
    pub fn published() -> Self {
        Self::with_status("published")
    }

    pub fn draft() -> Self {
        Self::with_status("draft")
    }

    fn with_status(status: &str) -> Self {
        let suffix = unique_suffix();
        Self {
            title: format!("Message {suffix}"),
            body: "Integration test body".to_string(),
            category_id: TECHNOLOGY_CATEGORY_ID.to_string(),
            tag_ids: Vec::new(),
            status: status.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub user: UserResponse,
}

#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    pub bio: String,
    #[serde(default)]
    pub website: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub id: String,
    pub author_id: String,
    pub title: String,
    pub slug: String,
    pub status: String,
    pub views: i64,
    pub likes: i64,
    pub comments_count: i64,
    #[serde(default)]
    pub published_at: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MessageDetailResponse {
    #[serde(flatten)]
    pub message: MessageResponse,
    pub related: Vec<MessageResponse>,
    pub liked: bool,
    pub favorited: bool,
}

#[derive(Debug, Deserialize)]
pub struct CommentResponse {
    pub id: String,
    pub message_id: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct PaginationMeta {
    pub page: u32,
    pub per_page: u32,
    pub total: i64,
    pub total_pages: i64,
    pub has_next: bool,
}

#[derive(Debug, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

#[derive(Debug, Deserialize)]
pub struct NotificationResponse {
    pub id: String,
    pub actor_id: String,
    pub verb: String,
    #[serde(default)]
    pub message_id: Option<String>,
    pub is_read: bool,
}

#[derive(Debug, Deserialize)]
pub struct NotificationPage {
    pub data: Vec<NotificationResponse>,
    pub pagination: PaginationMeta,
    pub unread_count: i64,
}

/// Register a fresh user
pub async fn register_user(server: &TestServer) -> Result<AuthResponse> {
    let response = server
        .post("/api/v1/auth/register", &RegisterRequest::unique())
        .await?;
    assert_json(response, StatusCode::CREATED).await
}

/// Create a message as the given user
pub async fn create_message(
    server: &TestServer,
    token: &str,
    request: &CreateMessageRequest,
) -> Result<MessageResponse> {
    let response = server.post_auth("/api/v1/messages", token, request).await?;
    assert_json(response, StatusCode::CREATED).await
}
