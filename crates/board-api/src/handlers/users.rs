//! User handlers
//!
//! Profiles, a user's messages, and the caller's favorites and likes.

use axum::{extract::State, Json};
use board_service::dto::{
    CurrentUserResponse, MessageResponse, PaginatedResponse, UpdateProfileRequest, UserResponse,
};
use board_service::{EngagementService, UserService};

use crate::extractors::{AuthUser, IdPath, Pagination, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Get current user
///
/// GET /users/@me
pub async fn get_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<CurrentUserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.get_current_user(auth.user_id).await?;
    Ok(Json(response))
}

/// Update current user's profile
///
/// PATCH /users/@me
pub async fn update_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<UpdateProfileRequest>,
) -> ApiResult<Json<CurrentUserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.update_profile(auth.user_id, request).await?;
    Ok(Json(response))
}

/// Public profile
///
/// GET /users/:user_id
pub async fn get_user(
    State(state): State<AppState>,
    IdPath(user_id): IdPath,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.get_user(user_id).await?;
    Ok(Json(response))
}

/// A user's published messages
///
/// GET /users/:user_id/messages
pub async fn get_user_messages(
    State(state): State<AppState>,
    IdPath(user_id): IdPath,
    Pagination(page): Pagination,
) -> ApiResult<Json<PaginatedResponse<MessageResponse>>> {
    let service = UserService::new(state.service_context());
    let response = service.list_messages(user_id, page).await?;
    Ok(Json(response))
}

/// GET /users/@me/favorites
pub async fn my_favorites(
    State(state): State<AppState>,
    auth: AuthUser,
    Pagination(page): Pagination,
) -> ApiResult<Json<PaginatedResponse<MessageResponse>>> {
    let service = EngagementService::new(state.service_context());
    let response = service.list_favorites(auth.user_id, page).await?;
    Ok(Json(response))
}

/// GET /users/@me/likes
pub async fn my_likes(
    State(state): State<AppState>,
    auth: AuthUser,
    Pagination(page): Pagination,
) -> ApiResult<Json<PaginatedResponse<MessageResponse>>> {
    let service = EngagementService::new(state.service_context());
    let response = service.list_likes(auth.user_id, page).await?;
    Ok(Json(response))
}
