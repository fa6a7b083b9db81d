//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{
    ContactOverview, ConversationMessage, FriendRequest, FriendRequestWithSender, Message, NewUser,
    User,
};
use crate::error::DomainError;
use crate::value_objects::{RequestId, UserId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Find user by vibe code
    async fn find_by_vibe_code(&self, code: &str) -> RepoResult<Option<User>>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Check if a vibe code is in use, optionally ignoring one user's own row
    async fn vibe_code_taken(&self, code: &str, exclude: Option<UserId>) -> RepoResult<bool>;

    /// Create a new user, returning the stored row
    async fn create(&self, user: &NewUser) -> RepoResult<User>;

    /// Persist profile fields of an existing user
    async fn update_profile(&self, user: &User) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: UserId) -> RepoResult<Option<String>>;
}

// ============================================================================
// Friend Request Repository
// ============================================================================

#[async_trait]
pub trait FriendRequestRepository: Send + Sync {
    /// Check whether any request exists for the ordered (sender, receiver) pair
    async fn exists_between(&self, sender_id: UserId, receiver_id: UserId) -> RepoResult<bool>;

    /// Find a pending request from sender to receiver
    async fn find_pending(
        &self,
        sender_id: UserId,
        receiver_id: UserId,
    ) -> RepoResult<Option<FriendRequest>>;

    /// Create a pending request
    async fn create(&self, sender_id: UserId, receiver_id: UserId) -> RepoResult<FriendRequest>;

    /// List pending requests addressed to a user, sender profile included
    async fn list_incoming_pending(
        &self,
        receiver_id: UserId,
    ) -> RepoResult<Vec<FriendRequestWithSender>>;

    /// Find a pending request by id, scoped to its receiver
    async fn find_pending_for_receiver(
        &self,
        id: RequestId,
        receiver_id: UserId,
    ) -> RepoResult<Option<FriendRequest>>;

    /// Accept a request and create the mirrored contact pair atomically
    async fn accept_and_link(&self, id: RequestId, a: UserId, b: UserId) -> RepoResult<()>;

    /// Mark a request declined
    async fn decline(&self, id: RequestId) -> RepoResult<()>;
}

// ============================================================================
// Contact Repository
// ============================================================================

#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Check whether contact_id is in user_id's contact list
    async fn exists(&self, user_id: UserId, contact_id: UserId) -> RepoResult<bool>;

    /// List a user's contacts with last-message preview and unread count,
    /// most recent conversation first
    async fn list_overviews(&self, user_id: UserId) -> RepoResult<Vec<ContactOverview>>;
}

// ============================================================================
// Message Repository
// ============================================================================

#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Persist a new message, returning the stored row
    async fn create(
        &self,
        sender_id: UserId,
        receiver_id: UserId,
        text: &str,
    ) -> RepoResult<Message>;

    /// Mark all unread messages from sender to receiver as read,
    /// returning the number of rows touched
    async fn mark_read(&self, sender_id: UserId, receiver_id: UserId) -> RepoResult<u64>;

    /// Full conversation between two users, oldest first
    async fn conversation(
        &self,
        user_id: UserId,
        other_id: UserId,
    ) -> RepoResult<Vec<ConversationMessage>>;
}
