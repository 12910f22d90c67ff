//! Notification service
//!
//! Every operation is scoped to the recipient: another user's notification id
//! behaves exactly like one that doesn't exist. Listing never marks anything read;
//! opening one does.

use board_core::{DomainError, PageRequest, Snowflake};
use tracing::{info, instrument};

use crate::dto::{
    DeletedResponse, NotificationPageResponse, NotificationResponse, PaginatedResponse,
    UnreadCountResponse, UpdatedResponse,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

pub struct NotificationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> NotificationService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn list(
        &self,
        recipient_id: Snowflake,
        unread_only: bool,
        page: PageRequest,
    ) -> ServiceResult<NotificationPageResponse> {
        let repo = self.ctx.notification_repo();
        let notifications = repo.list(recipient_id, unread_only, page).await?;
        let unread_count = repo.unread_count(recipient_id).await?;

        Ok(NotificationPageResponse {
            page: PaginatedResponse::from_page(notifications, page, NotificationResponse::from),
            unread_count,
        })
    }

    #[instrument(skip(self))]
    pub async fn unread_count(&self, recipient_id: Snowflake) -> ServiceResult<UnreadCountResponse> {
        let unread_count = self.ctx.notification_repo().unread_count(recipient_id).await?;
        Ok(UnreadCountResponse { unread_count })
    }

    /// Opening a notification marks it read
    #[instrument(skip(self))]
    pub async fn get(
        &self,
        notification_id: Snowflake,
        recipient_id: Snowflake,
    ) -> ServiceResult<NotificationResponse> {
        self.mark_read(notification_id, recipient_id).await
    }

    /// Flag one notification read and return it
    #[instrument(skip(self))]
    pub async fn mark_read(
        &self,
        notification_id: Snowflake,
        recipient_id: Snowflake,
    ) -> ServiceResult<NotificationResponse> {
        let repo = self.ctx.notification_repo();
        repo.mark_read(notification_id, recipient_id).await?;

        let notification = repo
            .find(notification_id, recipient_id)
            .await?
            .ok_or(DomainError::NotificationNotFound(notification_id))?;
        Ok(NotificationResponse::from(notification))
    }

    #[instrument(skip(self))]
    pub async fn mark_all_read(&self, recipient_id: Snowflake) -> ServiceResult<UpdatedResponse> {
        let updated = self.ctx.notification_repo().mark_all_read(recipient_id).await?;
        info!(recipient_id = %recipient_id, updated, "Notifications marked read");
        Ok(UpdatedResponse { updated })
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, notification_id: Snowflake, recipient_id: Snowflake) -> ServiceResult<()> {
        self.ctx
            .notification_repo()
            .delete(notification_id, recipient_id)
            .await?;
        info!(notification_id = %notification_id, "Notification deleted");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn delete_all(&self, recipient_id: Snowflake) -> ServiceResult<DeletedResponse> {
        let deleted = self.ctx.notification_repo().delete_all(recipient_id).await?;
        info!(recipient_id = %recipient_id, deleted, "Notifications cleared");
        Ok(DeletedResponse { deleted })
    }
}
