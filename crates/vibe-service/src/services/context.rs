//! Service context - dependency container for services
//!
//! Holds all repositories and other dependencies needed by services.

use std::sync::Arc;

use vibe_common::auth::TokenService;
use vibe_core::traits::{
    ContactRepository, FriendRequestRepository, MessageRepository, UserRepository,
};
use vibe_db::PgPool;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories
/// - The token service for authentication
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: PgPool,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    friend_request_repo: Arc<dyn FriendRequestRepository>,
    contact_repo: Arc<dyn ContactRepository>,
    message_repo: Arc<dyn MessageRepository>,

    // Services
    token_service: Arc<TokenService>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        pool: PgPool,
        user_repo: Arc<dyn UserRepository>,
        friend_request_repo: Arc<dyn FriendRequestRepository>,
        contact_repo: Arc<dyn ContactRepository>,
        message_repo: Arc<dyn MessageRepository>,
        token_service: Arc<TokenService>,
    ) -> Self {
        Self {
            pool,
            user_repo,
            friend_request_repo,
            contact_repo,
            message_repo,
            token_service,
        }
    }

    // === Database Pool ===

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the friend request repository
    pub fn friend_request_repo(&self) -> &dyn FriendRequestRepository {
        self.friend_request_repo.as_ref()
    }

    /// Get the contact repository
    pub fn contact_repo(&self) -> &dyn ContactRepository {
        self.contact_repo.as_ref()
    }

    /// Get the message repository
    pub fn message_repo(&self) -> &dyn MessageRepository {
        self.message_repo.as_ref()
    }

    // === Services ===

    /// Get the token service
    pub fn token_service(&self) -> &TokenService {
        self.token_service.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    friend_request_repo: Option<Arc<dyn FriendRequestRepository>>,
    contact_repo: Option<Arc<dyn ContactRepository>>,
    message_repo: Option<Arc<dyn MessageRepository>>,
    token_service: Option<Arc<TokenService>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            pool: None,
            user_repo: None,
            friend_request_repo: None,
            contact_repo: None,
            message_repo: None,
            token_service: None,
        }
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn friend_request_repo(mut self, repo: Arc<dyn FriendRequestRepository>) -> Self {
        self.friend_request_repo = Some(repo);
        self
    }

    pub fn contact_repo(mut self, repo: Arc<dyn ContactRepository>) -> Self {
        self.contact_repo = Some(repo);
        self
    }

    pub fn message_repo(mut self, repo: Arc<dyn MessageRepository>) -> Self {
        self.message_repo = Some(repo);
        self
    }

    pub fn token_service(mut self, service: Arc<TokenService>) -> Self {
        self.token_service = Some(service);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.pool
                .ok_or_else(|| super::error::ServiceError::validation("pool is required"))?,
            self.user_repo
                .ok_or_else(|| super::error::ServiceError::validation("user_repo is required"))?,
            self.friend_request_repo.ok_or_else(|| {
                super::error::ServiceError::validation("friend_request_repo is required")
            })?,
            self.contact_repo
                .ok_or_else(|| super::error::ServiceError::validation("contact_repo is required"))?,
            self.message_repo
                .ok_or_else(|| super::error::ServiceError::validation("message_repo is required"))?,
            self.token_service.ok_or_else(|| {
                super::error::ServiceError::validation("token_service is required")
            })?,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
