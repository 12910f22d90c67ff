//! Authentication service
//!
//! Registration, login by username, and token refresh. Tokens are stateless
//! JWTs; a session id minted at login rides along through every refresh.

use board_common::auth::{hash_password, validate_password_strength, verify_password, TokenPair};
use board_common::AppError;
use board_core::entities::User;
use board_core::DomainError;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::dto::{AuthResponse, CurrentUserResponse, LoginRequest, RefreshTokenRequest, RegisterRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user and sign them in
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<AuthResponse> {
        let username = request.username.trim().to_string();
        if !User::is_valid_username(&username) {
            return Err(DomainError::InvalidUsername(
                "use 3-32 letters, digits, '_' or '-'".to_string(),
            )
            .into());
        }

        validate_password_strength(&request.password).map_err(|e| match e {
            AppError::Validation(msg) => ServiceError::from(DomainError::WeakPassword(msg)),
            other => other.into(),
        })?;

        let email = request.email.trim().to_lowercase();
        let users = self.ctx.user_repo();
        if users.username_exists(&username).await? {
            return Err(DomainError::UsernameAlreadyExists.into());
        }
        if users.email_exists(&email).await? {
            return Err(DomainError::EmailAlreadyExists.into());
        }

        let password_hash = hash_password(&request.password)?;
        let user = User::new(self.ctx.generate_id(), username, email);
        users.create(&user, &password_hash).await?;

        info!(user_id = %user.id, "User registered");

        let tokens = self.new_session(&user)?;
        Ok(auth_response(tokens, &user))
    }

    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        let users = self.ctx.user_repo();

        let Some(user) = users.find_by_username(request.username.trim()).await? else {
            warn!("Login failed: unknown username");
            return Err(AppError::InvalidCredentials.into());
        };

        let Some(password_hash) = users.get_password_hash(user.id).await? else {
            warn!(user_id = %user.id, "Login failed: no password hash");
            return Err(AppError::InvalidCredentials.into());
        };

        if !verify_password(&request.password, &password_hash)? {
            warn!(user_id = %user.id, "Login failed: wrong password");
            return Err(AppError::InvalidCredentials.into());
        }

        info!(user_id = %user.id, "User logged in");

        let tokens = self.new_session(&user)?;
        Ok(auth_response(tokens, &user))
    }

    /// Exchange a refresh token for a fresh pair
    #[instrument(skip(self, request))]
    pub async fn refresh(&self, request: RefreshTokenRequest) -> ServiceResult<AuthResponse> {
        let (user_id, tokens) = self
            .ctx
            .jwt_service()
            .refresh_tokens(&request.refresh_token)
            .inspect_err(|e| warn!(error = %e, "Rejected refresh token"))?;

        // the account may have been removed since the token was issued
        let user = self.ctx.user_repo().find_by_id(user_id).await?.ok_or_else(|| {
            warn!(user_id = %user_id, "Refresh token for unknown user");
            ServiceError::from(AppError::InvalidToken)
        })?;

        Ok(auth_response(tokens, &user))
    }

    fn new_session(&self, user: &User) -> ServiceResult<TokenPair> {
        let session_id = Uuid::new_v4().to_string();
        Ok(self
            .ctx
            .jwt_service()
            .generate_token_pair_with_session(user.id, Some(session_id))?)
    }
}

fn auth_response(tokens: TokenPair, user: &User) -> AuthResponse {
    AuthResponse {
        access_token: tokens.access_token,
        refresh_token: tokens.refresh_token,
        token_type: tokens.token_type,
        expires_in: tokens.expires_in,
        user: CurrentUserResponse::from(user),
    }
}
