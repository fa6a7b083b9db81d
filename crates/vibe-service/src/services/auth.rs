//! Authentication service
//!
//! Handles user registration, login, and token-to-user resolution.

use tracing::{info, instrument, warn};

use vibe_common::auth::{hash_password, validate_password, verify_password};
use vibe_common::AppError;
use vibe_core::entities::{NewUser, User};
use vibe_core::error::DomainError;

use crate::dto::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};

use super::codes::unique_vibe_code;
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
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<AuthResponse> {
        validate_password(&request.password).map_err(ServiceError::from)?;

        if !request.email.contains('@') {
            return Err(ServiceError::Domain(DomainError::InvalidEmail));
        }

        // Emails are stored and compared lowercased
        let email = request.email.trim().to_lowercase();

        if self.ctx.user_repo().email_exists(&email).await? {
            return Err(ServiceError::Domain(DomainError::EmailTaken));
        }

        let vibe_code = unique_vibe_code(
            self.ctx.user_repo(),
            &request.first_name,
            &request.last_name,
            None,
        )
        .await?;

        let password_hash =
            hash_password(&request.password).map_err(|e| ServiceError::internal(e.to_string()))?;

        let new_user = NewUser {
            first_name: request.first_name,
            last_name: request.last_name,
            email,
            phone: request.phone.filter(|p| !p.is_empty()),
            password_hash,
            vibe_code,
        };

        let user = self.ctx.user_repo().create(&new_user).await?;

        info!(user_id = %user.id, vibe_code = %user.vibe_code, "User registered successfully");

        self.issue_auth_response(&user)
    }

    /// Login with email and password
    ///
    /// Unknown email and wrong password produce the same error.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        let email = request.email.trim().to_lowercase();

        let user = self
            .ctx
            .user_repo()
            .find_by_email(&email)
            .await?
            .ok_or_else(|| {
                warn!("Login failed: user not found");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user.id, "Login failed: no password hash");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let is_valid = verify_password(&request.password, &password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if !is_valid {
            warn!(user_id = %user.id, "Login failed: invalid password");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        info!(user_id = %user.id, "User logged in successfully");

        self.issue_auth_response(&user)
    }

    /// Resolve a bearer token to the full current user row
    #[instrument(skip(self, token))]
    pub async fn authenticate(&self, token: &str) -> ServiceResult<User> {
        let claims = self
            .ctx
            .token_service()
            .decode(token)
            .map_err(ServiceError::from)?;

        let email = claims.subject().map_err(ServiceError::from)?.to_string();

        self.ctx
            .user_repo()
            .find_by_email(&email)
            .await?
            .ok_or(ServiceError::App(AppError::UserNotFound))
    }

    fn issue_auth_response(&self, user: &User) -> ServiceResult<AuthResponse> {
        let token = self
            .ctx
            .token_service()
            .issue(&user.email)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        Ok(AuthResponse {
            token,
            user: UserResponse::from(user),
        })
    }
}
