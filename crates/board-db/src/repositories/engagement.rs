//! PostgreSQL implementation of EngagementRepository
//!
//! Each write runs the ledger row, the counter update and the notification in
//! one transaction. An early return drops the transaction, which rolls it back.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use board_core::entities::{Favorite, Like, Message, Notification};
use board_core::error::DomainError;
use board_core::traits::{EngagementRepository, Page, PageRequest, RepoResult};
use board_core::value_objects::Snowflake;

use crate::models::MessageModel;

use super::error::{map_db_error, map_foreign_key_violation};
use super::message::MESSAGE_COLUMNS;
use super::notification::insert_notification;

#[derive(Clone)]
pub struct PgEngagementRepository {
    pool: PgPool,
}

impl PgEngagementRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Published messages joined through `table` (likes or favorites), newest engagement first
    async fn list_engaged(
        &self,
        table: &'static str,
        user_id: Snowflake,
        page: PageRequest,
    ) -> RepoResult<Page<Message>> {
        let total: i64 = sqlx::query_scalar(&format!(
            "SELECT COUNT(*) FROM {table} e
             JOIN messages m ON m.id = e.message_id
             WHERE e.user_id = $1 AND m.status = 'published'"
        ))
        .bind(user_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        let sql = format!(
            "SELECT {MESSAGE_COLUMNS} FROM {table} e
             JOIN messages m ON m.id = e.message_id
             WHERE e.user_id = $1 AND m.status = 'published'
             ORDER BY e.created_at DESC, m.id DESC
             LIMIT $2 OFFSET $3"
        );
        let results = sqlx::query_as::<_, MessageModel>(&sql)
            .bind(user_id.into_inner())
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(Page::new(results.into_iter().map(Message::from).collect(), total))
    }

    async fn exists(
        &self,
        table: &'static str,
        user_id: Snowflake,
        message_id: Snowflake,
    ) -> RepoResult<bool> {
        let exists: bool = sqlx::query_scalar(&format!(
            "SELECT EXISTS(SELECT 1 FROM {table} WHERE user_id = $1 AND message_id = $2)"
        ))
        .bind(user_id.into_inner())
        .bind(message_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(exists)
    }
}

#[async_trait]
impl EngagementRepository for PgEngagementRepository {
    #[instrument(skip(self, notification))]
    async fn like(&self, like: &Like, notification: Option<&Notification>) -> RepoResult<i64> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let inserted = sqlx::query(
            r"
            INSERT INTO likes (user_id, message_id, created_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id, message_id) DO NOTHING
            ",
        )
        .bind(like.user_id.into_inner())
        .bind(like.message_id.into_inner())
        .bind(like.created_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_foreign_key_violation(e, |_| DomainError::MessageNotFound(like.message_id)))?;

        if inserted.rows_affected() == 0 {
            return Err(DomainError::AlreadyLiked);
        }

        let likes: Option<i64> = sqlx::query_scalar(
            r"UPDATE messages SET likes = likes + 1 WHERE id = $1 RETURNING likes",
        )
        .bind(like.message_id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let likes = likes.ok_or(DomainError::MessageNotFound(like.message_id))?;

        if let Some(notification) = notification {
            insert_notification(&mut *tx, notification)
                .await
                .map_err(map_db_error)?;
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(likes)
    }

    #[instrument(skip(self, notification))]
    async fn favorite(
        &self,
        favorite: &Favorite,
        notification: Option<&Notification>,
    ) -> RepoResult<bool> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let inserted = sqlx::query(
            r"
            INSERT INTO favorites (user_id, message_id, created_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id, message_id) DO NOTHING
            ",
        )
        .bind(favorite.user_id.into_inner())
        .bind(favorite.message_id.into_inner())
        .bind(favorite.created_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            map_foreign_key_violation(e, |_| DomainError::MessageNotFound(favorite.message_id))
        })?;

        if inserted.rows_affected() == 0 {
            return Ok(false);
        }

        if let Some(notification) = notification {
            insert_notification(&mut *tx, notification)
                .await
                .map_err(map_db_error)?;
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(true)
    }

    #[instrument(skip(self))]
    async fn unfavorite(&self, user_id: Snowflake, message_id: Snowflake) -> RepoResult<bool> {
        let result = sqlx::query(r"DELETE FROM favorites WHERE user_id = $1 AND message_id = $2")
            .bind(user_id.into_inner())
            .bind(message_id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn has_liked(&self, user_id: Snowflake, message_id: Snowflake) -> RepoResult<bool> {
        self.exists("likes", user_id, message_id).await
    }

    #[instrument(skip(self))]
    async fn has_favorited(&self, user_id: Snowflake, message_id: Snowflake) -> RepoResult<bool> {
        self.exists("favorites", user_id, message_id).await
    }

    #[instrument(skip(self))]
    async fn list_favorites(
        &self,
        user_id: Snowflake,
        page: PageRequest,
    ) -> RepoResult<Page<Message>> {
        self.list_engaged("favorites", user_id, page).await
    }

    #[instrument(skip(self))]
    async fn list_likes(&self, user_id: Snowflake, page: PageRequest) -> RepoResult<Page<Message>> {
        self.list_engaged("likes", user_id, page).await
    }
}
