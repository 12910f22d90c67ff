//! Like and favorite handlers

use axum::{extract::State, Json};
use board_service::dto::{FavoriteResponse, LikeResponse, UnfavoriteResponse};
use board_service::EngagementService;

use crate::extractors::{AuthUser, IdPath};
use crate::response::ApiResult;
use crate::state::AppState;

/// Like a message; a repeat like is a 409
///
/// POST /messages/:message_id/like
pub async fn like_message(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(message_id): IdPath,
) -> ApiResult<Json<LikeResponse>> {
    let service = EngagementService::new(state.service_context());
    let response = service.like(message_id, auth.user_id).await?;
    Ok(Json(response))
}

/// PUT /messages/:message_id/favorite
pub async fn favorite_message(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(message_id): IdPath,
) -> ApiResult<Json<FavoriteResponse>> {
    let service = EngagementService::new(state.service_context());
    let response = service.favorite(message_id, auth.user_id).await?;
    Ok(Json(response))
}

/// DELETE /messages/:message_id/favorite
pub async fn unfavorite_message(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(message_id): IdPath,
) -> ApiResult<Json<UnfavoriteResponse>> {
    let service = EngagementService::new(state.service_context());
    let response = service.unfavorite(message_id, auth.user_id).await?;
    Ok(Json(response))
}
