//! Comment service
//!
//! Creating or deleting a comment moves the message's `comments_count` in the
//! same transaction as the row itself; see [`CommentRepository`].
//!
//! [`CommentRepository`]: board_core::CommentRepository

use board_core::entities::MAX_COMMENT_LENGTH;
use board_core::{Comment, DomainError, EngagementVerb, Notification, PageRequest, Snowflake};
use tracing::{info, instrument};

use crate::dto::{CommentRequest, CommentResponse, PaginatedResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::message::find_published;

pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Comments on a message, newest first
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        message_id: Snowflake,
        viewer: Option<Snowflake>,
        page: PageRequest,
    ) -> ServiceResult<PaginatedResponse<CommentResponse>> {
        let visible = self
            .ctx
            .message_repo()
            .find_by_id(message_id)
            .await?
            .is_some_and(|m| m.is_visible_to(viewer));
        if !visible {
            return Err(DomainError::MessageNotFound(message_id).into());
        }

        let comments = self
            .ctx
            .comment_repo()
            .list_by_message(message_id, page)
            .await?;
        Ok(PaginatedResponse::from_page(comments, page, CommentResponse::from))
    }

    /// Comment on a published message, notifying its author
    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        message_id: Snowflake,
        author_id: Snowflake,
        request: CommentRequest,
    ) -> ServiceResult<CommentResponse> {
        let content = checked_content(request.content)?;
        let message = find_published(self.ctx, message_id).await?;
        let actor = self
            .ctx
            .user_repo()
            .find_by_id(author_id)
            .await?
            .ok_or(DomainError::UserNotFound(author_id))?;

        let comment = Comment::new(self.ctx.generate_id(), message_id, author_id, content);
        let notification = Notification::for_engagement(
            self.ctx.generate_id(),
            &actor,
            EngagementVerb::Comment,
            &message,
        );

        self.ctx
            .comment_repo()
            .create(&comment, notification.as_ref())
            .await?;

        info!(
            comment_id = %comment.id,
            message_id = %message_id,
            notified = notification.is_some(),
            "Comment created"
        );
        Ok(CommentResponse::from(comment))
    }

    /// Edit a comment; author only
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        comment_id: Snowflake,
        user_id: Snowflake,
        request: CommentRequest,
    ) -> ServiceResult<CommentResponse> {
        let mut comment = self.find(comment_id).await?;
        if comment.author_id != user_id {
            return Err(DomainError::NotCommentAuthor.into());
        }

        comment.edit(checked_content(request.content)?);
        self.ctx.comment_repo().update(&comment).await?;

        info!(comment_id = %comment_id, "Comment edited");
        Ok(CommentResponse::from(comment))
    }

    /// Delete a comment; allowed for its author and for the message's author
    #[instrument(skip(self))]
    pub async fn delete(&self, comment_id: Snowflake, user_id: Snowflake) -> ServiceResult<()> {
        let comment = self.find(comment_id).await?;
        let message_owner = self
            .ctx
            .message_repo()
            .find_by_id(comment.message_id)
            .await?
            .map(|m| m.author_id)
            .ok_or(DomainError::MessageNotFound(comment.message_id))?;

        if !comment.can_be_deleted_by(user_id, message_owner) {
            return Err(DomainError::NotCommentAuthor.into());
        }

        self.ctx.comment_repo().delete(comment_id).await?;

        info!(comment_id = %comment_id, message_id = %comment.message_id, "Comment deleted");
        Ok(())
    }

    async fn find(&self, comment_id: Snowflake) -> ServiceResult<Comment> {
        Ok(self
            .ctx
            .comment_repo()
            .find_by_id(comment_id)
            .await?
            .ok_or(DomainError::CommentNotFound(comment_id))?)
    }
}

fn checked_content(content: String) -> ServiceResult<String> {
    let content = content.trim().to_string();
    if content.is_empty() {
        return Err(DomainError::EmptyContent.into());
    }
    if content.chars().count() > MAX_COMMENT_LENGTH {
        return Err(DomainError::ContentTooLong {
            max: MAX_COMMENT_LENGTH,
        }
        .into());
    }
    Ok(content)
}
