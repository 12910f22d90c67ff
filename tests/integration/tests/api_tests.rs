//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL, JWT_SECRET
//!
//! Run with: cargo test -p board-integration-tests --test api_tests

use integration_tests::{
    assert_error, assert_json, assert_status, check_test_env, create_message, fixtures::*,
    register_user, TestServer,
};
use reqwest::StatusCode;
use serde_json::json;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_endpoints() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get("/health/ready").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_login_refresh() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    let registered: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(registered.user.username, request.username);
    assert_eq!(registered.user.email.as_deref(), Some(request.email.as_str()));
    assert_eq!(registered.token_type, "Bearer");

    let response = server
        .post("/api/v1/auth/login", &LoginRequest::from_register(&request))
        .await
        .unwrap();
    let logged_in: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(logged_in.user.id, registered.user.id);

    let response = server
        .post(
            "/api/v1/auth/refresh",
            &json!({"refresh_token": logged_in.refresh_token}),
        )
        .await
        .unwrap();
    let refreshed: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(refreshed.user.id, registered.user.id);

    let response = server
        .get_auth("/api/v1/users/@me", &refreshed.access_token)
        .await
        .unwrap();
    let me: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(me.username, request.username);
}

#[tokio::test]
async fn test_register_duplicate_username() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();
    server.post("/api/v1/auth/register", &request).await.unwrap();

    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    assert_error(response, StatusCode::CONFLICT, "USERNAME_ALREADY_EXISTS")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_login_wrong_password() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();
    server.post("/api/v1/auth/register", &request).await.unwrap();

    let response = server
        .post(
            "/api/v1/auth/login",
            &json!({"username": request.username, "password": "WrongPass999"}),
        )
        .await
        .unwrap();
    assert_error(response, StatusCode::UNAUTHORIZED, "INVALID_CREDENTIALS")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_register_weak_password() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = RegisterRequest::unique();
    request.password = "alllowercase1".to_string();

    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    assert_error(response, StatusCode::BAD_REQUEST, "WEAK_PASSWORD")
        .await
        .unwrap();
}

// ============================================================================
// User Tests
// ============================================================================

#[tokio::test]
async fn test_update_profile_and_public_view() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register_user(&server).await.unwrap();

    let response = server
        .patch_auth(
            "/api/v1/users/@me",
            &auth.access_token,
            &json!({"bio": "Writes about Rust", "website": "https://example.com"}),
        )
        .await
        .unwrap();
    let updated: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.bio, "Writes about Rust");
    assert_eq!(updated.website.as_deref(), Some("https://example.com"));

    let response = server
        .get(&format!("/api/v1/users/{}", auth.user.id))
        .await
        .unwrap();
    let public: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(public.bio, "Writes about Rust");
    assert!(public.email.is_none());
}

// ============================================================================
// Message Tests
// ============================================================================

#[tokio::test]
async fn test_published_message_lifecycle() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = register_user(&server).await.unwrap();

    let message = create_message(&server, &author.access_token, &CreateMessageRequest::published())
        .await
        .unwrap();
    assert_eq!(message.status, "published");
    assert!(message.published_at.is_some());
    assert_eq!(message.author_id, author.user.id);

    let path = format!("/api/v1/messages/{}", message.id);
    let response = server.get(&path).await.unwrap();
    let first: MessageDetailResponse = assert_json(response, StatusCode::OK).await.unwrap();
    let response = server.get(&path).await.unwrap();
    let second: MessageDetailResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(second.message.views, first.message.views + 1);
    assert!(!first.liked);

    let response = server
        .patch_auth(&path, &author.access_token, &json!({"status": "draft"}))
        .await
        .unwrap();
    let drafted: MessageResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(drafted.status, "draft");
    assert!(drafted.published_at.is_none());

    let response = server.delete_auth(&path, &author.access_token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get(&path).await.unwrap();
    assert_error(response, StatusCode::NOT_FOUND, "UNKNOWN_MESSAGE")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_draft_is_hidden_from_others() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = register_user(&server).await.unwrap();
    let other = register_user(&server).await.unwrap();

    let draft = create_message(&server, &author.access_token, &CreateMessageRequest::draft())
        .await
        .unwrap();
    assert!(draft.published_at.is_none());
    let path = format!("/api/v1/messages/{}", draft.id);

    let response = server.get_auth(&path, &other.access_token).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server.get_auth(&path, &author.access_token).await.unwrap();
    let own: MessageDetailResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(own.message.views, 0);
}

#[tokio::test]
async fn test_only_owner_can_edit() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = register_user(&server).await.unwrap();
    let other = register_user(&server).await.unwrap();
    let message = create_message(&server, &author.access_token, &CreateMessageRequest::published())
        .await
        .unwrap();

    let response = server
        .patch_auth(
            &format!("/api/v1/messages/{}", message.id),
            &other.access_token,
            &json!({"title": "Hijacked"}),
        )
        .await
        .unwrap();
    assert_error(response, StatusCode::FORBIDDEN, "NOT_MESSAGE_AUTHOR")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_category_listing_contains_new_message() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = register_user(&server).await.unwrap();
    let message = create_message(&server, &author.access_token, &CreateMessageRequest::published())
        .await
        .unwrap();

    let response = server
        .get("/api/v1/categories/technology/messages?per_page=100")
        .await
        .unwrap();
    let page: Paginated<MessageResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.pagination.per_page, 100);
    assert!(page.data.iter().any(|m| m.id == message.id));

    let response = server.get("/api/v1/categories/no-such-category/messages").await.unwrap();
    assert_error(response, StatusCode::NOT_FOUND, "UNKNOWN_CATEGORY")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_message_list_pagination() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = register_user(&server).await.unwrap();
    for _ in 0..3 {
        create_message(&server, &author.access_token, &CreateMessageRequest::published())
            .await
            .unwrap();
    }

    let response = server
        .get(&format!("/api/v1/users/{}/messages?per_page=2", author.user.id))
        .await
        .unwrap();
    let page: Paginated<MessageResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.data.len(), 2);
    assert_eq!(page.pagination.total, 3);
    assert_eq!(page.pagination.total_pages, 2);
    assert!(page.pagination.has_next);

    let response = server
        .get(&format!("/api/v1/users/{}/messages?per_page=2&page=2", author.user.id))
        .await
        .unwrap();
    let page: Paginated<MessageResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.pagination.page, 2);
    assert!(!page.pagination.has_next);
}

// ============================================================================
// Engagement Tests
// ============================================================================

#[tokio::test]
async fn test_like_once_and_notify_author() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = register_user(&server).await.unwrap();
    let reader = register_user(&server).await.unwrap();
    let message = create_message(&server, &author.access_token, &CreateMessageRequest::published())
        .await
        .unwrap();
    let like_path = format!("/api/v1/messages/{}/like", message.id);

    let response = server
        .post_empty_auth(&like_path, &reader.access_token)
        .await
        .unwrap();
    let liked: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(liked["liked"], true);
    assert_eq!(liked["likes"], 1);

    let response = server
        .post_empty_auth(&like_path, &reader.access_token)
        .await
        .unwrap();
    assert_error(response, StatusCode::CONFLICT, "ALREADY_LIKED")
        .await
        .unwrap();

    let response = server
        .get_auth("/api/v1/notifications", &author.access_token)
        .await
        .unwrap();
    let notifications: NotificationPage = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(notifications.data.len(), 1);
    assert_eq!(notifications.data[0].verb, "like");
    assert_eq!(notifications.data[0].actor_id, reader.user.id);
    assert_eq!(notifications.data[0].message_id.as_deref(), Some(message.id.as_str()));

    let response = server
        .get_auth("/api/v1/users/@me/likes", &reader.access_token)
        .await
        .unwrap();
    let likes: Paginated<MessageResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(likes.data.len(), 1);
    assert_eq!(likes.data[0].likes, 1);
}

#[tokio::test]
async fn test_self_like_does_not_notify() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = register_user(&server).await.unwrap();
    let message = create_message(&server, &author.access_token, &CreateMessageRequest::published())
        .await
        .unwrap();

    let response = server
        .post_empty_auth(&format!("/api/v1/messages/{}/like", message.id), &author.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .get_auth("/api/v1/notifications/unread-count", &author.access_token)
        .await
        .unwrap();
    let count: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(count["unread_count"], 0);
}

#[tokio::test]
async fn test_favorite_is_idempotent() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = register_user(&server).await.unwrap();
    let reader = register_user(&server).await.unwrap();
    let message = create_message(&server, &author.access_token, &CreateMessageRequest::published())
        .await
        .unwrap();
    let path = format!("/api/v1/messages/{}/favorite", message.id);

    let response = server.put_auth(&path, &reader.access_token).await.unwrap();
    let first: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(first["created"], true);

    let response = server.put_auth(&path, &reader.access_token).await.unwrap();
    let second: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(second["favorited"], true);
    assert_eq!(second["created"], false);

    let response = server
        .get_auth("/api/v1/users/@me/favorites", &reader.access_token)
        .await
        .unwrap();
    let favorites: Paginated<MessageResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(favorites.pagination.total, 1);

    let response = server.delete_auth(&path, &reader.access_token).await.unwrap();
    let removed: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(removed["removed"], true);

    let response = server.delete_auth(&path, &reader.access_token).await.unwrap();
    let noop: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(noop["removed"], false);
    assert_eq!(noop["favorited"], false);
}

// ============================================================================
// Comment Tests
// ============================================================================

#[tokio::test]
async fn test_comment_counts_and_permissions() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = register_user(&server).await.unwrap();
    let commenter = register_user(&server).await.unwrap();
    let message = create_message(&server, &author.access_token, &CreateMessageRequest::published())
        .await
        .unwrap();
    let comments_path = format!("/api/v1/messages/{}/comments", message.id);

    let response = server
        .post_auth(&comments_path, &commenter.access_token, &json!({"content": "Nice post"}))
        .await
        .unwrap();
    let comment: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(comment.message_id, message.id);

    let response = server.get(&format!("/api/v1/messages/{}", message.id)).await.unwrap();
    let detail: MessageDetailResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(detail.message.comments_count, 1);

    // Only the comment's author may edit it
    let comment_path = format!("/api/v1/comments/{}", comment.id);
    let response = server
        .patch_auth(&comment_path, &author.access_token, &json!({"content": "Edited"}))
        .await
        .unwrap();
    assert_error(response, StatusCode::FORBIDDEN, "NOT_COMMENT_AUTHOR")
        .await
        .unwrap();

    let response = server
        .patch_auth(&comment_path, &commenter.access_token, &json!({"content": "Edited"}))
        .await
        .unwrap();
    let edited: CommentResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(edited.content, "Edited");

    // The message owner may remove it
    let response = server.delete_auth(&comment_path, &author.access_token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get(&comments_path).await.unwrap();
    let page: Paginated<CommentResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(page.data.is_empty());

    let response = server.get(&format!("/api/v1/messages/{}", message.id)).await.unwrap();
    let detail: MessageDetailResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(detail.message.comments_count, 0);
}

// ============================================================================
// Notification Tests
// ============================================================================

#[tokio::test]
async fn test_notification_read_flow() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = register_user(&server).await.unwrap();
    let reader = register_user(&server).await.unwrap();
    let message = create_message(&server, &author.access_token, &CreateMessageRequest::published())
        .await
        .unwrap();

    server
        .post_empty_auth(&format!("/api/v1/messages/{}/like", message.id), &reader.access_token)
        .await
        .unwrap();
    server
        .put_auth(&format!("/api/v1/messages/{}/favorite", message.id), &reader.access_token)
        .await
        .unwrap();

    // Listing leaves read state alone
    for _ in 0..2 {
        let response = server
            .get_auth("/api/v1/notifications?unread_only=true", &author.access_token)
            .await
            .unwrap();
        let page: NotificationPage = assert_json(response, StatusCode::OK).await.unwrap();
        assert_eq!(page.data.len(), 2);
        assert_eq!(page.unread_count, 2);
    }

    let response = server
        .get_auth("/api/v1/notifications", &author.access_token)
        .await
        .unwrap();
    let page: NotificationPage = assert_json(response, StatusCode::OK).await.unwrap();
    let first = &page.data[0];

    // Someone else's notification looks missing
    let path = format!("/api/v1/notifications/{}", first.id);
    let response = server.get_auth(&path, &reader.access_token).await.unwrap();
    assert_error(response, StatusCode::NOT_FOUND, "UNKNOWN_NOTIFICATION")
        .await
        .unwrap();

    let response = server
        .post_empty_auth(&format!("{path}/read"), &author.access_token)
        .await
        .unwrap();
    let read: NotificationResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(read.is_read);

    let response = server
        .post_empty_auth("/api/v1/notifications/read-all", &author.access_token)
        .await
        .unwrap();
    let updated: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated["updated"], 1);

    let response = server
        .delete_auth("/api/v1/notifications", &author.access_token)
        .await
        .unwrap();
    let deleted: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(deleted["deleted"], 2);
}

#[tokio::test]
async fn test_deleting_message_removes_its_notifications() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = register_user(&server).await.unwrap();
    let reader = register_user(&server).await.unwrap();
    let message = create_message(&server, &author.access_token, &CreateMessageRequest::published())
        .await
        .unwrap();

    server
        .post_auth(
            &format!("/api/v1/messages/{}/comments", message.id),
            &reader.access_token,
            &json!({"content": "First!"}),
        )
        .await
        .unwrap();

    let response = server
        .delete_auth(&format!("/api/v1/messages/{}", message.id), &author.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get_auth("/api/v1/notifications", &author.access_token)
        .await
        .unwrap();
    let page: NotificationPage = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(page.data.is_empty());
    assert_eq!(page.pagination.total, 0);
}
