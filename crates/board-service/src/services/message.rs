//! Message service
//!
//! Posting, editing and reading messages. A detail read of a published
//! message bumps its view counter; drafts are only ever shown to their author
//! and never counted.

use board_core::{DomainError, Message, MessageFilter, PageRequest, Snowflake};
use tracing::{info, instrument};

use crate::dto::{
    AuthorResponse, CategoryResponse, CreateMessageRequest, MessageDetailResponse,
    MessageResponse, PaginatedResponse, TagResponse, UpdateMessageRequest,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// How many same-category messages the detail view suggests
pub const RELATED_LIMIT: i64 = 3;

pub struct MessageService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MessageService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Published messages, newest published first
    #[instrument(skip(self))]
    pub async fn list(&self, page: PageRequest) -> ServiceResult<PaginatedResponse<MessageResponse>> {
        let messages = self
            .ctx
            .message_repo()
            .list_published(MessageFilter::default(), page)
            .await?;
        Ok(PaginatedResponse::from_page(messages, page, MessageResponse::from))
    }

    #[instrument(skip(self, request), fields(title = %request.title))]
    pub async fn create(
        &self,
        author_id: Snowflake,
        request: CreateMessageRequest,
    ) -> ServiceResult<MessageResponse> {
        let title = non_blank_title(request.title)?;
        self.require_category(request.category_id).await?;
        self.require_tags(&request.tag_ids).await?;

        let mut message = Message::new(
            self.ctx.generate_id(),
            author_id,
            request.category_id,
            title,
            request.body,
            request.status,
        );
        message.set_image(request.image);
        message.set_tags(request.tag_ids);

        self.ctx.message_repo().create(&message).await?;

        info!(
            message_id = %message.id,
            author_id = %author_id,
            status = message.status.as_str(),
            "Message created"
        );
        Ok(MessageResponse::from(message))
    }

    /// Detail view for `viewer` (anonymous when `None`)
    #[instrument(skip(self))]
    pub async fn get(
        &self,
        message_id: Snowflake,
        viewer: Option<Snowflake>,
    ) -> ServiceResult<MessageDetailResponse> {
        let mut message = self.find(message_id).await?;
        if !message.is_visible_to(viewer) {
            return Err(DomainError::MessageNotFound(message_id).into());
        }

        if message.is_published() {
            message.views = self.ctx.message_repo().increment_views(message_id).await?;
        }

        let author = self
            .ctx
            .user_repo()
            .find_by_id(message.author_id)
            .await?
            .ok_or(DomainError::UserNotFound(message.author_id))?;
        let category = self
            .ctx
            .category_repo()
            .find_by_id(message.category_id)
            .await?
            .ok_or_else(|| DomainError::CategoryNotFound(message.category_id.to_string()))?;
        let tags = self.ctx.tag_repo().find_many(&message.tag_ids).await?;
        let related = self
            .ctx
            .message_repo()
            .list_related(&message, RELATED_LIMIT)
            .await?;

        let (liked, favorited) = match viewer {
            Some(user_id) => {
                let engagement = self.ctx.engagement_repo();
                (
                    engagement.has_liked(user_id, message_id).await?,
                    engagement.has_favorited(user_id, message_id).await?,
                )
            }
            None => (false, false),
        };

        Ok(MessageDetailResponse {
            message: MessageResponse::from(message),
            author: AuthorResponse::from(&author),
            category: CategoryResponse::from(category),
            tags: tags.into_iter().map(TagResponse::from).collect(),
            related: related.into_iter().map(MessageResponse::from).collect(),
            liked,
            favorited,
        })
    }

    /// Edit a message. Only its author may.
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        message_id: Snowflake,
        user_id: Snowflake,
        request: UpdateMessageRequest,
    ) -> ServiceResult<MessageResponse> {
        let mut message = self.find_owned(message_id, user_id).await?;

        if let Some(title) = request.title {
            message.set_title(non_blank_title(title)?);
        }
        if let Some(body) = request.body {
            message.set_body(body);
        }
        if let Some(category_id) = request.category_id {
            self.require_category(category_id).await?;
            message.category_id = category_id;
        }
        if let Some(tag_ids) = request.tag_ids {
            self.require_tags(&tag_ids).await?;
            message.set_tags(tag_ids);
        }
        // Blank clears; absent keeps
        if request.image.is_some() {
            message.set_image(request.image);
        }
        if let Some(status) = request.status {
            message.set_status(status);
        }

        self.ctx.message_repo().update(&message).await?;

        info!(message_id = %message_id, status = message.status.as_str(), "Message updated");
        Ok(MessageResponse::from(message))
    }

    /// Delete a message along with everything hanging off it
    #[instrument(skip(self))]
    pub async fn delete(&self, message_id: Snowflake, user_id: Snowflake) -> ServiceResult<()> {
        self.find_owned(message_id, user_id).await?;
        self.ctx.message_repo().delete(message_id).await?;

        info!(message_id = %message_id, "Message deleted");
        Ok(())
    }

    async fn find(&self, message_id: Snowflake) -> ServiceResult<Message> {
        Ok(self
            .ctx
            .message_repo()
            .find_by_id(message_id)
            .await?
            .ok_or(DomainError::MessageNotFound(message_id))?)
    }

    async fn find_owned(&self, message_id: Snowflake, user_id: Snowflake) -> ServiceResult<Message> {
        let message = self.find(message_id).await?;
        // someone else's draft doesn't exist as far as they can tell
        if !message.is_visible_to(Some(user_id)) {
            return Err(DomainError::MessageNotFound(message_id).into());
        }
        if !message.is_owned_by(user_id) {
            return Err(DomainError::NotMessageAuthor.into());
        }
        Ok(message)
    }

    async fn require_category(&self, category_id: Snowflake) -> ServiceResult<()> {
        match self.ctx.category_repo().find_by_id(category_id).await? {
            Some(_) => Ok(()),
            None => Err(DomainError::CategoryNotFound(category_id.to_string()).into()),
        }
    }

    async fn require_tags(&self, tag_ids: &[Snowflake]) -> ServiceResult<()> {
        if tag_ids.is_empty() {
            return Ok(());
        }
        let found = self.ctx.tag_repo().find_many(tag_ids).await?;
        match tag_ids.iter().find(|id| !found.iter().any(|t| t.id == **id)) {
            Some(missing) => Err(DomainError::TagNotFound(missing.to_string()).into()),
            None => Ok(()),
        }
    }
}

/// Load a message that can be engaged with: it must exist and be published
pub(super) async fn find_published(
    ctx: &ServiceContext,
    message_id: Snowflake,
) -> ServiceResult<Message> {
    ctx.message_repo()
        .find_by_id(message_id)
        .await?
        .filter(Message::is_published)
        .ok_or_else(|| DomainError::MessageNotFound(message_id).into())
}

fn non_blank_title(title: String) -> ServiceResult<String> {
    let title = title.trim().to_string();
    if title.is_empty() {
        return Err(DomainError::ValidationError("Title cannot be blank".into()).into());
    }
    Ok(title)
}
