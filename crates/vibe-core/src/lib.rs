//! # vibe-core
//!
//! Domain layer containing entities, value objects, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    split_display_name, Contact, ContactOverview, ConversationMessage, FriendRequest,
    FriendRequestWithSender, Message, NewUser, RequestStatus, RespondAction, User,
    DEFAULT_PROFILE_BORDER, NAME_LOCK_DAYS,
};
pub use error::DomainError;
pub use traits::{
    ContactRepository, FriendRequestRepository, MessageRepository, RepoResult, UserRepository,
};
pub use value_objects::{MessageId, RequestId, UserId, VibeCode};
