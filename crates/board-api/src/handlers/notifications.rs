//! Notification handlers
//!
//! Every route is scoped to the caller; another user's notification is a 404.
//! Listing never changes read state.

use axum::{extract::State, Json};
use board_service::dto::{
    DeletedResponse, NotificationPageResponse, NotificationResponse, UnreadCountResponse,
    UpdatedResponse,
};
use board_service::NotificationService;

use crate::extractors::{AuthUser, IdPath, NotificationQuery};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// GET /notifications
pub async fn list_notifications(
    State(state): State<AppState>,
    auth: AuthUser,
    query: NotificationQuery,
) -> ApiResult<Json<NotificationPageResponse>> {
    let service = NotificationService::new(state.service_context());
    let response = service
        .list(auth.user_id, query.unread_only, query.page)
        .await?;
    Ok(Json(response))
}

/// GET /notifications/unread-count
pub async fn unread_count(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<UnreadCountResponse>> {
    let service = NotificationService::new(state.service_context());
    Ok(Json(service.unread_count(auth.user_id).await?))
}

/// POST /notifications/read-all
pub async fn mark_all_read(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<UpdatedResponse>> {
    let service = NotificationService::new(state.service_context());
    Ok(Json(service.mark_all_read(auth.user_id).await?))
}

/// DELETE /notifications
pub async fn delete_all_notifications(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<DeletedResponse>> {
    let service = NotificationService::new(state.service_context());
    Ok(Json(service.delete_all(auth.user_id).await?))
}

/// Open a notification; marks it read
///
/// GET /notifications/:notification_id
pub async fn get_notification(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(notification_id): IdPath,
) -> ApiResult<Json<NotificationResponse>> {
    let service = NotificationService::new(state.service_context());
    let response = service.get(notification_id, auth.user_id).await?;
    Ok(Json(response))
}

/// POST /notifications/:notification_id/read
pub async fn mark_read(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(notification_id): IdPath,
) -> ApiResult<Json<NotificationResponse>> {
    let service = NotificationService::new(state.service_context());
    let response = service.mark_read(notification_id, auth.user_id).await?;
    Ok(Json(response))
}

/// DELETE /notifications/:notification_id
pub async fn delete_notification(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(notification_id): IdPath,
) -> ApiResult<NoContent> {
    let service = NotificationService::new(state.service_context());
    service.delete(notification_id, auth.user_id).await?;
    Ok(NoContent)
}
