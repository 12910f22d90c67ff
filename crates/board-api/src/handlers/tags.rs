//! Tag handlers

use axum::{
    extract::{Path, State},
    Json,
};
use board_service::dto::{CreateTagRequest, MessageResponse, PaginatedResponse, TagResponse};
use board_service::TagService;

use crate::extractors::{AuthUser, Pagination, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// GET /tags
pub async fn list_tags(State(state): State<AppState>) -> ApiResult<Json<Vec<TagResponse>>> {
    let service = TagService::new(state.service_context());
    Ok(Json(service.list().await?))
}

/// POST /tags
pub async fn create_tag(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateTagRequest>,
) -> ApiResult<Created<Json<TagResponse>>> {
    let service = TagService::new(state.service_context());
    let response = service.create(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// GET /tags/:slug/messages
pub async fn tag_messages(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Pagination(page): Pagination,
) -> ApiResult<Json<PaginatedResponse<MessageResponse>>> {
    let service = TagService::new(state.service_context());
    let response = service.list_messages(&slug, page).await?;
    Ok(Json(response))
}
