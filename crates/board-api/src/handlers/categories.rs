//! Category handlers

use axum::{
    extract::{Path, State},
    Json,
};
use board_service::dto::{CategoryResponse, CreateCategoryRequest, MessageResponse, PaginatedResponse};
use board_service::CategoryService;

use crate::extractors::{AuthUser, Pagination, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// GET /categories
pub async fn list_categories(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<CategoryResponse>>> {
    let service = CategoryService::new(state.service_context());
    Ok(Json(service.list().await?))
}

/// POST /categories
pub async fn create_category(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateCategoryRequest>,
) -> ApiResult<Created<Json<CategoryResponse>>> {
    let service = CategoryService::new(state.service_context());
    let response = service.create(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// Published messages filed under a category
///
/// GET /categories/:slug/messages
pub async fn category_messages(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Pagination(page): Pagination,
) -> ApiResult<Json<PaginatedResponse<MessageResponse>>> {
    let service = CategoryService::new(state.service_context());
    let response = service.list_messages(&slug, page).await?;
    Ok(Json(response))
}
