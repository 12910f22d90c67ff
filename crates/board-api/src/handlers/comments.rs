//! Comment handlers

use axum::{extract::State, Json};
use board_service::dto::{CommentRequest, CommentResponse, PaginatedResponse};
use board_service::CommentService;

use crate::extractors::{AuthUser, IdPath, OptionalAuthUser, Pagination, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// GET /messages/:message_id/comments
pub async fn list_comments(
    State(state): State<AppState>,
    viewer: OptionalAuthUser,
    IdPath(message_id): IdPath,
    Pagination(page): Pagination,
) -> ApiResult<Json<PaginatedResponse<CommentResponse>>> {
    let service = CommentService::new(state.service_context());
    let response = service.list(message_id, viewer.user_id(), page).await?;
    Ok(Json(response))
}

/// POST /messages/:message_id/comments
pub async fn create_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(message_id): IdPath,
    ValidatedJson(request): ValidatedJson<CommentRequest>,
) -> ApiResult<Created<Json<CommentResponse>>> {
    let service = CommentService::new(state.service_context());
    let response = service.create(message_id, auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// Edit a comment (author only)
///
/// PATCH /comments/:comment_id
pub async fn update_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(comment_id): IdPath,
    ValidatedJson(request): ValidatedJson<CommentRequest>,
) -> ApiResult<Json<CommentResponse>> {
    let service = CommentService::new(state.service_context());
    let response = service.update(comment_id, auth.user_id, request).await?;
    Ok(Json(response))
}

/// Delete a comment (author or message owner)
///
/// DELETE /comments/:comment_id
pub async fn delete_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(comment_id): IdPath,
) -> ApiResult<NoContent> {
    let service = CommentService::new(state.service_context());
    service.delete(comment_id, auth.user_id).await?;
    Ok(NoContent)
}
