//! PostgreSQL implementation of MessageRepository

use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};
use tracing::instrument;

use board_core::entities::Message;
use board_core::error::DomainError;
use board_core::traits::{MessageFilter, MessageRepository, Page, PageRequest, RepoResult};
use board_core::value_objects::Snowflake;

use crate::mappers::tag_ids_to_i64;
use crate::models::MessageModel;

use super::error::{map_db_error, map_foreign_key_violation};

/// Column list for `MessageModel`, with tag ids folded into an array.
/// Callers alias the messages table as `m`.
pub(super) const MESSAGE_COLUMNS: &str = r"
    m.id, m.author_id, m.category_id, m.title, m.slug, m.body, m.image, m.status,
    ARRAY(SELECT mt.tag_id FROM message_tags mt WHERE mt.message_id = m.id ORDER BY mt.tag_id)
        AS tag_ids,
    m.views, m.likes, m.comments_count, m.created_at, m.updated_at, m.published_at
";

/// PostgreSQL implementation of MessageRepository
#[derive(Clone)]
pub struct PgMessageRepository {
    pool: PgPool,
}

impl PgMessageRepository {
    /// Create a new PgMessageRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Map a failed message write onto the reference that was missing
fn map_message_write_error(e: sqlx::Error, message: &Message) -> DomainError {
    map_foreign_key_violation(e, |constraint| match constraint {
        Some(c) if c.contains("tag") => DomainError::TagNotFound(
            message
                .tag_ids
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(","),
        ),
        Some(c) if c.contains("author") => DomainError::UserNotFound(message.author_id),
        _ => DomainError::CategoryNotFound(message.category_id.to_string()),
    })
}

async fn replace_tags(
    conn: &mut PgConnection,
    message_id: Snowflake,
    tag_ids: &[Snowflake],
) -> Result<(), sqlx::Error> {
    sqlx::query(r"DELETE FROM message_tags WHERE message_id = $1")
        .bind(message_id.into_inner())
        .execute(&mut *conn)
        .await?;

    if !tag_ids.is_empty() {
        sqlx::query(
            r"
            INSERT INTO message_tags (message_id, tag_id)
            SELECT $1, UNNEST($2::BIGINT[])
            ON CONFLICT DO NOTHING
            ",
        )
        .bind(message_id.into_inner())
        .bind(tag_ids_to_i64(tag_ids))
        .execute(&mut *conn)
        .await?;
    }

    Ok(())
}

#[async_trait]
impl MessageRepository for PgMessageRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Message>> {
        let sql = format!("SELECT {MESSAGE_COLUMNS} FROM messages m WHERE m.id = $1");
        let result = sqlx::query_as::<_, MessageModel>(&sql)
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(Message::from))
    }

    #[instrument(skip(self))]
    async fn list_published(
        &self,
        filter: MessageFilter,
        page: PageRequest,
    ) -> RepoResult<Page<Message>> {
        const WHERE: &str = r"
            WHERE m.status = 'published'
              AND ($1::BIGINT IS NULL OR m.category_id = $1)
              AND ($2::BIGINT IS NULL OR m.author_id = $2)
              AND ($3::BIGINT IS NULL OR EXISTS (
                    SELECT 1 FROM message_tags mt WHERE mt.message_id = m.id AND mt.tag_id = $3))
        ";

        let category = filter.category_id.map(Snowflake::into_inner);
        let author = filter.author_id.map(Snowflake::into_inner);
        let tag = filter.tag_id.map(Snowflake::into_inner);

        let total: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM messages m {WHERE}"))
            .bind(category)
            .bind(author)
            .bind(tag)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        let sql = format!(
            "SELECT {MESSAGE_COLUMNS} FROM messages m {WHERE}
             ORDER BY m.published_at DESC, m.id DESC
             LIMIT $4 OFFSET $5"
        );
        let results = sqlx::query_as::<_, MessageModel>(&sql)
            .bind(category)
            .bind(author)
            .bind(tag)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(Page::new(results.into_iter().map(Message::from).collect(), total))
    }

    #[instrument(skip(self, message), fields(message_id = %message.id))]
    async fn list_related(&self, message: &Message, limit: i64) -> RepoResult<Vec<Message>> {
        let sql = format!(
            "SELECT {MESSAGE_COLUMNS} FROM messages m
             WHERE m.category_id = $1 AND m.id <> $2 AND m.status = 'published'
             ORDER BY m.published_at DESC, m.id DESC
             LIMIT $3"
        );
        let results = sqlx::query_as::<_, MessageModel>(&sql)
            .bind(message.category_id.into_inner())
            .bind(message.id.into_inner())
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(Message::from).collect())
    }

    #[instrument(skip(self, message), fields(message_id = %message.id))]
    async fn create(&self, message: &Message) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r"
            INSERT INTO messages (id, author_id, category_id, title, slug, body, image, status,
                                  created_at, updated_at, published_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ",
        )
        .bind(message.id.into_inner())
        .bind(message.author_id.into_inner())
        .bind(message.category_id.into_inner())
        .bind(&message.title)
        .bind(&message.slug)
        .bind(&message.body)
        .bind(&message.image)
        .bind(message.status.as_str())
        .bind(message.created_at)
        .bind(message.updated_at)
        .bind(message.published_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_message_write_error(e, message))?;

        replace_tags(&mut *tx, message.id, &message.tag_ids)
            .await
            .map_err(|e| map_message_write_error(e, message))?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, message), fields(message_id = %message.id))]
    async fn update(&self, message: &Message) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let result = sqlx::query(
            r"
            UPDATE messages
            SET category_id = $2, title = $3, slug = $4, body = $5, image = $6, status = $7,
                updated_at = $8, published_at = $9
            WHERE id = $1
            ",
        )
        .bind(message.id.into_inner())
        .bind(message.category_id.into_inner())
        .bind(&message.title)
        .bind(&message.slug)
        .bind(&message.body)
        .bind(&message.image)
        .bind(message.status.as_str())
        .bind(message.updated_at)
        .bind(message.published_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_message_write_error(e, message))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::MessageNotFound(message.id));
        }

        replace_tags(&mut *tx, message.id, &message.tag_ids)
            .await
            .map_err(|e| map_message_write_error(e, message))?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        // comments, likes, favorites, notifications and tag links cascade
        let result = sqlx::query(r"DELETE FROM messages WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::MessageNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn increment_views(&self, id: Snowflake) -> RepoResult<i64> {
        let views: Option<i64> = sqlx::query_scalar(
            r"
            UPDATE messages
            SET views = views + 1
            WHERE id = $1 AND status = 'published'
            RETURNING views
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        views.ok_or(DomainError::MessageNotFound(id))
    }
}
