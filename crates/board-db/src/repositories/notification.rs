//! PostgreSQL implementation of NotificationRepository

use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};
use tracing::instrument;

use board_core::entities::Notification;
use board_core::error::DomainError;
use board_core::traits::{NotificationRepository, Page, PageRequest, RepoResult};
use board_core::value_objects::Snowflake;

use crate::models::NotificationModel;

use super::error::map_db_error;

/// Insert a notification on an open connection or transaction
pub(super) async fn insert_notification(
    conn: &mut PgConnection,
    notification: &Notification,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r"
        INSERT INTO notifications (id, recipient_id, actor_id, verb, message_id, content,
                                   is_read, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        ",
    )
    .bind(notification.id.into_inner())
    .bind(notification.recipient_id.into_inner())
    .bind(notification.actor_id.into_inner())
    .bind(notification.verb.as_str())
    .bind(notification.message_id.map(Snowflake::into_inner))
    .bind(&notification.content)
    .bind(notification.is_read)
    .bind(notification.created_at)
    .execute(conn)
    .await?;

    Ok(())
}

#[derive(Clone)]
pub struct PgNotificationRepository {
    pool: PgPool,
}

impl PgNotificationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NotificationRepository for PgNotificationRepository {
    #[instrument(skip(self))]
    async fn list(
        &self,
        recipient_id: Snowflake,
        unread_only: bool,
        page: PageRequest,
    ) -> RepoResult<Page<Notification>> {
        let total: i64 = sqlx::query_scalar(
            r"
            SELECT COUNT(*) FROM notifications
            WHERE recipient_id = $1 AND (NOT $2 OR NOT is_read)
            ",
        )
        .bind(recipient_id.into_inner())
        .bind(unread_only)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        let results = sqlx::query_as::<_, NotificationModel>(
            r"
            SELECT id, recipient_id, actor_id, verb, message_id, content, is_read, created_at
            FROM notifications
            WHERE recipient_id = $1 AND (NOT $2 OR NOT is_read)
            ORDER BY created_at DESC, id DESC
            LIMIT $3 OFFSET $4
            ",
        )
        .bind(recipient_id.into_inner())
        .bind(unread_only)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Page::new(
            results.into_iter().map(Notification::from).collect(),
            total,
        ))
    }

    #[instrument(skip(self))]
    async fn find(
        &self,
        id: Snowflake,
        recipient_id: Snowflake,
    ) -> RepoResult<Option<Notification>> {
        let result = sqlx::query_as::<_, NotificationModel>(
            r"
            SELECT id, recipient_id, actor_id, verb, message_id, content, is_read, created_at
            FROM notifications
            WHERE id = $1 AND recipient_id = $2
            ",
        )
        .bind(id.into_inner())
        .bind(recipient_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Notification::from))
    }

    #[instrument(skip(self))]
    async fn unread_count(&self, recipient_id: Snowflake) -> RepoResult<i64> {
        let count: i64 = sqlx::query_scalar(
            r"SELECT COUNT(*) FROM notifications WHERE recipient_id = $1 AND NOT is_read",
        )
        .bind(recipient_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self))]
    async fn mark_read(&self, id: Snowflake, recipient_id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query(
            r"UPDATE notifications SET is_read = TRUE WHERE id = $1 AND recipient_id = $2",
        )
        .bind(id.into_inner())
        .bind(recipient_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotificationNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn mark_all_read(&self, recipient_id: Snowflake) -> RepoResult<u64> {
        let result = sqlx::query(
            r"UPDATE notifications SET is_read = TRUE WHERE recipient_id = $1 AND NOT is_read",
        )
        .bind(recipient_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake, recipient_id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query(r"DELETE FROM notifications WHERE id = $1 AND recipient_id = $2")
            .bind(id.into_inner())
            .bind(recipient_id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotificationNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_all(&self, recipient_id: Snowflake) -> RepoResult<u64> {
        let result = sqlx::query(r"DELETE FROM notifications WHERE recipient_id = $1")
            .bind(recipient_id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}
