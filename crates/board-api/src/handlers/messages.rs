//! Message handlers
//!
//! Listing, creation, detail reads (which count views) and owner edits.

use axum::{extract::State, Json};
use board_service::dto::{
    CreateMessageRequest, MessageDetailResponse, MessageResponse, PaginatedResponse,
    UpdateMessageRequest,
};
use board_service::MessageService;

use crate::extractors::{AuthUser, IdPath, OptionalAuthUser, Pagination, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Published messages, newest first
///
/// GET /messages
pub async fn list_messages(
    State(state): State<AppState>,
    Pagination(page): Pagination,
) -> ApiResult<Json<PaginatedResponse<MessageResponse>>> {
    let service = MessageService::new(state.service_context());
    let response = service.list(page).await?;
    Ok(Json(response))
}

/// POST /messages
pub async fn create_message(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateMessageRequest>,
) -> ApiResult<Created<Json<MessageResponse>>> {
    let service = MessageService::new(state.service_context());
    let response = service.create(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// Message detail with author, category, tags and related messages
///
/// GET /messages/:message_id
pub async fn get_message(
    State(state): State<AppState>,
    viewer: OptionalAuthUser,
    IdPath(message_id): IdPath,
) -> ApiResult<Json<MessageDetailResponse>> {
    let service = MessageService::new(state.service_context());
    let response = service.get(message_id, viewer.user_id()).await?;
    Ok(Json(response))
}

/// PATCH /messages/:message_id
pub async fn update_message(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(message_id): IdPath,
    ValidatedJson(request): ValidatedJson<UpdateMessageRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = MessageService::new(state.service_context());
    let response = service.update(message_id, auth.user_id, request).await?;
    Ok(Json(response))
}

/// DELETE /messages/:message_id
pub async fn delete_message(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(message_id): IdPath,
) -> ApiResult<NoContent> {
    let service = MessageService::new(state.service_context());
    service.delete(message_id, auth.user_id).await?;
    Ok(NoContent)
}
