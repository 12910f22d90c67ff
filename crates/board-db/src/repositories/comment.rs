//! PostgreSQL implementation of CommentRepository
//!
//! Creating or deleting a comment moves `messages.comments_count` in the same
//! transaction.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use board_core::entities::{Comment, Notification};
use board_core::error::DomainError;
use board_core::traits::{CommentRepository, Page, PageRequest, RepoResult};
use board_core::value_objects::Snowflake;

use crate::models::CommentModel;

use super::error::{map_db_error, map_foreign_key_violation};
use super::notification::insert_notification;

#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Comment>> {
        let result = sqlx::query_as::<_, CommentModel>(
            r"
            SELECT id, message_id, author_id, content, created_at, updated_at
            FROM comments
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Comment::from))
    }

    #[instrument(skip(self))]
    async fn list_by_message(
        &self,
        message_id: Snowflake,
        page: PageRequest,
    ) -> RepoResult<Page<Comment>> {
        let total: i64 = sqlx::query_scalar(r"SELECT COUNT(*) FROM comments WHERE message_id = $1")
            .bind(message_id.into_inner())
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        let results = sqlx::query_as::<_, CommentModel>(
            r"
            SELECT id, message_id, author_id, content, created_at, updated_at
            FROM comments
            WHERE message_id = $1
            ORDER BY created_at DESC, id DESC
            LIMIT $2 OFFSET $3
            ",
        )
        .bind(message_id.into_inner())
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Page::new(results.into_iter().map(Comment::from).collect(), total))
    }

    #[instrument(skip(self, comment, notification), fields(comment_id = %comment.id))]
    async fn create(
        &self,
        comment: &Comment,
        notification: Option<&Notification>,
    ) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r"
            INSERT INTO comments (id, message_id, author_id, content, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(comment.id.into_inner())
        .bind(comment.message_id.into_inner())
        .bind(comment.author_id.into_inner())
        .bind(&comment.content)
        .bind(comment.created_at)
        .bind(comment.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            map_foreign_key_violation(e, |_| DomainError::MessageNotFound(comment.message_id))
        })?;

        sqlx::query(r"UPDATE messages SET comments_count = comments_count + 1 WHERE id = $1")
            .bind(comment.message_id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        if let Some(notification) = notification {
            insert_notification(&mut *tx, notification)
                .await
                .map_err(map_db_error)?;
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, comment), fields(comment_id = %comment.id))]
    async fn update(&self, comment: &Comment) -> RepoResult<()> {
        let result =
            sqlx::query(r"UPDATE comments SET content = $2, updated_at = $3 WHERE id = $1")
                .bind(comment.id.into_inner())
                .bind(&comment.content)
                .bind(comment.updated_at)
                .execute(&self.pool)
                .await
                .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::CommentNotFound(comment.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let message_id: Option<i64> =
            sqlx::query_scalar(r"DELETE FROM comments WHERE id = $1 RETURNING message_id")
                .bind(id.into_inner())
                .fetch_optional(&mut *tx)
                .await
                .map_err(map_db_error)?;

        let Some(message_id) = message_id else {
            return Err(DomainError::CommentNotFound(id));
        };

        sqlx::query(
            r"
            UPDATE messages
            SET comments_count = GREATEST(comments_count - 1, 0)
            WHERE id = $1
            ",
        )
        .bind(message_id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }
}
