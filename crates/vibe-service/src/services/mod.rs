//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod auth;
pub mod contact;
pub mod context;
pub mod error;
pub mod friend;
pub mod message;
pub mod profile;

mod codes;

// Re-export all services for convenience
pub use auth::AuthService;
pub use contact::ContactService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use friend::FriendService;
pub use message::MessageService;
pub use profile::ProfileService;
