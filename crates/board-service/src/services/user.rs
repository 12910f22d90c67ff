//! User service
//!
//! Profiles and per-user listings.

use board_core::{DomainError, MessageFilter, PageRequest, Snowflake, User};
use tracing::{info, instrument};

use crate::dto::{
    CurrentUserResponse, MessageResponse, PaginatedResponse, UpdateProfileRequest, UserResponse,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    async fn find(&self, user_id: Snowflake) -> ServiceResult<User> {
        Ok(self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?)
    }

    /// Public profile
    #[instrument(skip(self))]
    pub async fn get_user(&self, user_id: Snowflake) -> ServiceResult<UserResponse> {
        Ok(UserResponse::from(&self.find(user_id).await?))
    }

    /// The caller's own profile, with email
    #[instrument(skip(self))]
    pub async fn get_current_user(&self, user_id: Snowflake) -> ServiceResult<CurrentUserResponse> {
        Ok(CurrentUserResponse::from(&self.find(user_id).await?))
    }

    #[instrument(skip(self, request))]
    pub async fn update_profile(
        &self,
        user_id: Snowflake,
        request: UpdateProfileRequest,
    ) -> ServiceResult<CurrentUserResponse> {
        let mut user = self.find(user_id).await?;

        if let Some(bio) = request.bio {
            user.set_bio(bio);
        }
        if request.website.is_some() {
            user.set_website(request.website);
        }
        if request.avatar.is_some() {
            user.set_avatar(request.avatar);
        }

        self.ctx.user_repo().update(&user).await?;
        info!(user_id = %user_id, "Profile updated");

        Ok(CurrentUserResponse::from(&user))
    }

    /// A user's published messages, newest first
    #[instrument(skip(self))]
    pub async fn list_messages(
        &self,
        user_id: Snowflake,
        page: PageRequest,
    ) -> ServiceResult<PaginatedResponse<MessageResponse>> {
        self.find(user_id).await?;

        let filter = MessageFilter {
            author_id: Some(user_id),
            ..Default::default()
        };
        let messages = self.ctx.message_repo().list_published(filter, page).await?;
        Ok(PaginatedResponse::from_page(messages, page, MessageResponse::from))
    }
}
