//! Route definitions
//!
//! All API routes organized by resource and mounted under /api/v1.

use axum::{
    routing::{get, patch, post, put},
    Router,
};

use crate::handlers::{
    auth, categories, comments, engagement, health, messages, notifications, tags, users,
};
use crate::state::AppState;

/// Create the main API router (health routes are mounted separately)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(taxonomy_routes())
        .merge(message_routes())
        .merge(notification_routes())
}

fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/refresh", post(auth::refresh_token))
}

fn user_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users/@me",
            get(users::get_current_user).patch(users::update_current_user),
        )
        .route("/users/@me/favorites", get(users::my_favorites))
        .route("/users/@me/likes", get(users::my_likes))
        .route("/users/:user_id", get(users::get_user))
        .route("/users/:user_id/messages", get(users::get_user_messages))
}

/// Categories and tags
fn taxonomy_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/categories",
            get(categories::list_categories).post(categories::create_category),
        )
        .route("/categories/:slug/messages", get(categories::category_messages))
        .route("/tags", get(tags::list_tags).post(tags::create_tag))
        .route("/tags/:slug/messages", get(tags::tag_messages))
}

fn message_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/messages",
            get(messages::list_messages).post(messages::create_message),
        )
        .route(
            "/messages/:message_id",
            get(messages::get_message)
                .patch(messages::update_message)
                .delete(messages::delete_message),
        )
        // Comments
        .route(
            "/messages/:message_id/comments",
            get(comments::list_comments).post(comments::create_comment),
        )
        .route(
            "/comments/:comment_id",
            patch(comments::update_comment).delete(comments::delete_comment),
        )
        // Engagement
        .route("/messages/:message_id/like", post(engagement::like_message))
        .route(
            "/messages/:message_id/favorite",
            put(engagement::favorite_message).delete(engagement::unfavorite_message),
        )
}

fn notification_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/notifications",
            get(notifications::list_notifications).delete(notifications::delete_all_notifications),
        )
        .route("/notifications/unread-count", get(notifications::unread_count))
        .route("/notifications/read-all", post(notifications::mark_all_read))
        .route(
            "/notifications/:notification_id",
            get(notifications::get_notification).delete(notifications::delete_notification),
        )
        .route("/notifications/:notification_id/read", post(notifications::mark_read))
}
