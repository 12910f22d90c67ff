//! Engagement service - likes and favorites
//!
//! Likes are add-only and counted; a second like is a conflict. Favorites are
//! idempotent both ways and report what happened instead of failing.

use board_core::{
    DomainError, EngagementVerb, Favorite, Like, Message, Notification, PageRequest, Snowflake,
    User,
};
use tracing::{info, instrument};

use crate::dto::{
    FavoriteResponse, LikeResponse, MessageResponse, PaginatedResponse, UnfavoriteResponse,
};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::message::find_published;

pub struct EngagementService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> EngagementService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Like a published message. Fails with `AlreadyLiked` on a repeat.
    #[instrument(skip(self))]
    pub async fn like(&self, message_id: Snowflake, user_id: Snowflake) -> ServiceResult<LikeResponse> {
        let (actor, message) = self.load(message_id, user_id).await?;
        let notification = self.notification_for(&actor, EngagementVerb::Like, &message);

        let likes = self
            .ctx
            .engagement_repo()
            .like(&Like::new(user_id, message_id), notification.as_ref())
            .await?;

        info!(message_id = %message_id, user_id = %user_id, likes, "Message liked");
        Ok(LikeResponse { liked: true, likes })
    }

    /// Favorite a published message; repeating it changes nothing
    #[instrument(skip(self))]
    pub async fn favorite(
        &self,
        message_id: Snowflake,
        user_id: Snowflake,
    ) -> ServiceResult<FavoriteResponse> {
        let (actor, message) = self.load(message_id, user_id).await?;
        let notification = self.notification_for(&actor, EngagementVerb::Favorite, &message);

        let created = self
            .ctx
            .engagement_repo()
            .favorite(&Favorite::new(user_id, message_id), notification.as_ref())
            .await?;

        if created {
            info!(message_id = %message_id, user_id = %user_id, "Message favorited");
        }
        Ok(FavoriteResponse {
            favorited: true,
            created,
            detail: if created { "favorited" } else { "already favorited" }.to_string(),
        })
    }

    /// Remove a favorite; removing one that isn't there is not an error
    #[instrument(skip(self))]
    pub async fn unfavorite(
        &self,
        message_id: Snowflake,
        user_id: Snowflake,
    ) -> ServiceResult<UnfavoriteResponse> {
        if self.ctx.message_repo().find_by_id(message_id).await?.is_none() {
            return Err(DomainError::MessageNotFound(message_id).into());
        }

        let removed = self
            .ctx
            .engagement_repo()
            .unfavorite(user_id, message_id)
            .await?;

        if removed {
            info!(message_id = %message_id, user_id = %user_id, "Message unfavorited");
        }
        Ok(UnfavoriteResponse {
            favorited: false,
            removed,
            detail: if removed { "unfavorited" } else { "not favorited" }.to_string(),
        })
    }

    /// The caller's favorited published messages, most recent first
    #[instrument(skip(self))]
    pub async fn list_favorites(
        &self,
        user_id: Snowflake,
        page: PageRequest,
    ) -> ServiceResult<PaginatedResponse<MessageResponse>> {
        let messages = self.ctx.engagement_repo().list_favorites(user_id, page).await?;
        Ok(PaginatedResponse::from_page(messages, page, MessageResponse::from))
    }

    /// The caller's liked messages, most recent first
    #[instrument(skip(self))]
    pub async fn list_likes(
        &self,
        user_id: Snowflake,
        page: PageRequest,
    ) -> ServiceResult<PaginatedResponse<MessageResponse>> {
        let messages = self.ctx.engagement_repo().list_likes(user_id, page).await?;
        Ok(PaginatedResponse::from_page(messages, page, MessageResponse::from))
    }

    async fn load(&self, message_id: Snowflake, user_id: Snowflake) -> ServiceResult<(User, Message)> {
        let message = find_published(self.ctx, message_id).await?;
        let actor = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;
        Ok((actor, message))
    }

    fn notification_for(
        &self,
        actor: &User,
        verb: EngagementVerb,
        message: &Message,
    ) -> Option<Notification> {
        Notification::for_engagement(self.ctx.generate_id(), actor, verb, message)
    }
}
