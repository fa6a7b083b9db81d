//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{RequestId, UserId};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    #[error("No user found with that VibeCode")]
    VibeCodeNotFound(String),

    #[error("Request not found")]
    RequestNotFound(RequestId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Password must be at least 8 characters")]
    WeakPassword,

    #[error("Empty message")]
    EmptyMessage,

    #[error("Action must be 'accept' or 'decline'")]
    InvalidAction(String),

    #[error("Name locked for {days_remaining} more days")]
    NameLocked { days_remaining: i64 },

    #[error("You can't add yourself!")]
    SelfFriendRequest,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("An account with this email already exists")]
    EmailTaken,

    #[error("Already in your contacts")]
    AlreadyContact,

    #[error("Request already sent")]
    RequestAlreadySent,

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Not in your contacts")]
    NotContact,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Vibe code space exhausted after repeated collisions")]
    VibeCodeSpaceExhausted,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::VibeCodeNotFound(_) => "UNKNOWN_VIBE_CODE",
            Self::RequestNotFound(_) => "UNKNOWN_REQUEST",

            // Validation
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::WeakPassword => "WEAK_PASSWORD",
            Self::EmptyMessage => "EMPTY_MESSAGE",
            Self::InvalidAction(_) => "INVALID_ACTION",
            Self::NameLocked { .. } => "NAME_LOCKED",
            Self::SelfFriendRequest => "SELF_FRIEND_REQUEST",

            // Conflict
            Self::EmailTaken => "EMAIL_TAKEN",
            Self::AlreadyContact => "ALREADY_CONTACT",
            Self::RequestAlreadySent => "REQUEST_ALREADY_SENT",

            // Authorization
            Self::NotContact => "NOT_CONTACT",

            // Infrastructure
            Self::VibeCodeSpaceExhausted => "VIBE_CODE_EXHAUSTED",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_) | Self::VibeCodeNotFound(_) | Self::RequestNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidEmail
                | Self::WeakPassword
                | Self::EmptyMessage
                | Self::InvalidAction(_)
                | Self::NameLocked { .. }
                | Self::SelfFriendRequest
        )
    }

    /// Check if this is a conflict error
    ///
    /// Conflicts still surface as 400 to clients; the distinction matters for
    /// logging and tests, not the wire status.
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::EmailTaken | Self::AlreadyContact | Self::RequestAlreadySent
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::NotContact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(DomainError::UserNotFound(UserId::new(1)).code(), "UNKNOWN_USER");
        assert_eq!(DomainError::WeakPassword.code(), "WEAK_PASSWORD");
        assert_eq!(DomainError::NotContact.code(), "NOT_CONTACT");
    }

    #[test]
    fn test_is_not_found() {
        assert!(DomainError::VibeCodeNotFound("VibeXX123".to_string()).is_not_found());
        assert!(DomainError::RequestNotFound(RequestId::new(5)).is_not_found());
        assert!(!DomainError::EmailTaken.is_not_found());
    }

    #[test]
    fn test_is_validation() {
        assert!(DomainError::NameLocked { days_remaining: 12 }.is_validation());
        assert!(DomainError::SelfFriendRequest.is_validation());
        assert!(!DomainError::NotContact.is_validation());
    }

    #[test]
    fn test_is_authorization() {
        assert!(DomainError::NotContact.is_authorization());
        assert!(!DomainError::AlreadyContact.is_authorization());
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::NameLocked { days_remaining: 18 };
        assert_eq!(err.to_string(), "Name locked for 18 more days");

        let err = DomainError::VibeCodeNotFound("VibeAB123".to_string());
        assert_eq!(err.to_string(), "No user found with that VibeCode");
    }
}
