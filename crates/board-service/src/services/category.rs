//! Category service

use board_core::{Category, DomainError, MessageFilter, PageRequest, Snowflake};
use tracing::{info, instrument};

use crate::dto::{CategoryResponse, CreateCategoryRequest, MessageResponse, PaginatedResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

pub struct CategoryService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CategoryService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// All categories, newest first
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<CategoryResponse>> {
        let categories = self.ctx.category_repo().list_all().await?;
        Ok(categories.into_iter().map(CategoryResponse::from).collect())
    }

    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create(
        &self,
        actor_id: Snowflake,
        request: CreateCategoryRequest,
    ) -> ServiceResult<CategoryResponse> {
        let name = request.name.trim().to_string();
        if name.is_empty() {
            return Err(DomainError::ValidationError("Category name cannot be blank".into()).into());
        }

        let category = Category::new(self.ctx.generate_id(), name, request.slug);
        self.ctx.category_repo().create(&category).await?;

        info!(category_id = %category.id, slug = %category.slug, actor_id = %actor_id, "Category created");
        Ok(CategoryResponse::from(category))
    }

    /// Published messages in the category with this slug
    #[instrument(skip(self))]
    pub async fn list_messages(
        &self,
        slug: &str,
        page: PageRequest,
    ) -> ServiceResult<PaginatedResponse<MessageResponse>> {
        let category = self
            .ctx
            .category_repo()
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| DomainError::CategoryNotFound(slug.to_string()))?;

        let filter = MessageFilter {
            category_id: Some(category.id),
            ..Default::default()
        };
        let messages = self.ctx.message_repo().list_published(filter, page).await?;
        Ok(PaginatedResponse::from_page(messages, page, MessageResponse::from))
    }
}
