//! Authentication service
//!
//! Handles user registration, login, and session user lookup.

use linkshare_common::AppError;
use linkshare_core::entities::{NewUser, User};
use linkshare_core::{DomainError, RecordId};
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::dto::{LoginRequest, RegisterRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user
    ///
    /// Checks run in a fixed order and the first failure wins: field
    /// presence, email shape, password confirmation, username, email.
    #[instrument(skip(self, request), fields(username = %request.username, email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<User> {
        request.validate()?;

        if !request.has_plausible_email() {
            return Err(DomainError::InvalidEmail.into());
        }

        if !request.passwords_match() {
            return Err(DomainError::PasswordMismatch.into());
        }

        // Early, friendly checks; the unique indexes still decide races
        if self.ctx.user_repo().username_exists(&request.username).await? {
            return Err(DomainError::UsernameAlreadyExists.into());
        }

        if self.ctx.user_repo().email_exists(&request.email).await? {
            return Err(DomainError::EmailAlreadyExists.into());
        }

        let password_hash = self.ctx.password_service().hash(&request.password)?;

        let user = self
            .ctx
            .user_repo()
            .create(&NewUser::new(request.username, request.email), &password_hash)
            .await?;

        info!(user_id = %user.id, "User registered successfully");

        Ok(user)
    }

    /// Login with username and password
    ///
    /// Every failure past field presence collapses into
    /// `AppError::InvalidCredentials`; the actual reason is only logged.
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<User> {
        request.validate()?;

        let Some(user) = self
            .ctx
            .user_repo()
            .find_by_username(&request.username)
            .await?
        else {
            warn!("Login failed: user not found");
            return Err(invalid_credentials());
        };

        let Some(password_hash) = self.ctx.user_repo().get_password_hash(user.id).await? else {
            warn!(user_id = %user.id, "Login failed: no password hash");
            return Err(invalid_credentials());
        };

        if self
            .ctx
            .password_service()
            .verify_or_error(&request.password, &password_hash)
            .is_err()
        {
            warn!(user_id = %user.id, "Login failed: invalid password");
            return Err(invalid_credentials());
        }

        info!(user_id = %user.id, "User logged in successfully");

        Ok(user)
    }

    /// Resolve the user behind an established session
    #[instrument(skip(self))]
    pub async fn current_user(&self, user_id: RecordId) -> ServiceResult<User> {
        self.ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))
    }
}

fn invalid_credentials() -> ServiceError {
    ServiceError::App(AppError::InvalidCredentials)
}
