//! Tag service

use board_core::{DomainError, MessageFilter, PageRequest, Snowflake, Tag};
use tracing::{info, instrument};

use crate::dto::{CreateTagRequest, MessageResponse, PaginatedResponse, TagResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

pub struct TagService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TagService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// All tags by name
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<TagResponse>> {
        let tags = self.ctx.tag_repo().list_all().await?;
        Ok(tags.into_iter().map(TagResponse::from).collect())
    }

    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create(
        &self,
        actor_id: Snowflake,
        request: CreateTagRequest,
    ) -> ServiceResult<TagResponse> {
        let name = request.name.trim().to_string();
        if name.is_empty() {
            return Err(DomainError::ValidationError("Tag name cannot be blank".into()).into());
        }

        let tag = Tag::new(self.ctx.generate_id(), name, request.slug);
        self.ctx.tag_repo().create(&tag).await?;

        info!(tag_id = %tag.id, slug = %tag.slug, actor_id = %actor_id, "Tag created");
        Ok(TagResponse::from(tag))
    }

    #[instrument(skip(self))]
    pub async fn list_messages(
        &self,
        slug: &str,
        page: PageRequest,
    ) -> ServiceResult<PaginatedResponse<MessageResponse>> {
        let tag = self
            .ctx
            .tag_repo()
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| DomainError::TagNotFound(slug.to_string()))?;

        let filter = MessageFilter {
            tag_id: Some(tag.id),
            ..Default::default()
        };
        let messages = self.ctx.message_repo().list_published(filter, page).await?;
        Ok(PaginatedResponse::from_page(messages, page, MessageResponse::from))
    }
}
