//! PostgreSQL implementation of TagRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use board_core::entities::Tag;
use board_core::error::DomainError;
use board_core::traits::{RepoResult, TagRepository};
use board_core::value_objects::Snowflake;

use crate::mappers::tag_ids_to_i64;
use crate::models::TagModel;

use super::error::{map_db_error, map_unique_violation};

#[derive(Clone)]
pub struct PgTagRepository {
    pool: PgPool,
}

impl PgTagRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TagRepository for PgTagRepository {
    #[instrument(skip(self))]
    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Tag>> {
        let result = sqlx::query_as::<_, TagModel>(
            r"SELECT id, name, slug, created_at FROM tags WHERE slug = $1",
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Tag::from))
    }

    #[instrument(skip(self))]
    async fn find_many(&self, ids: &[Snowflake]) -> RepoResult<Vec<Tag>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let results = sqlx::query_as::<_, TagModel>(
            r"
            SELECT id, name, slug, created_at
            FROM tags
            WHERE id = ANY($1)
            ORDER BY name
            ",
        )
        .bind(tag_ids_to_i64(ids))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Tag::from).collect())
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> RepoResult<Vec<Tag>> {
        let results = sqlx::query_as::<_, TagModel>(
            r"SELECT id, name, slug, created_at FROM tags ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Tag::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, tag: &Tag) -> RepoResult<()> {
        sqlx::query(r"INSERT INTO tags (id, name, slug, created_at) VALUES ($1, $2, $3, $4)")
            .bind(tag.id.into_inner())
            .bind(&tag.name)
            .bind(&tag.slug)
            .bind(tag.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| map_unique_violation(e, || DomainError::TagAlreadyExists))?;

        Ok(())
    }
}
