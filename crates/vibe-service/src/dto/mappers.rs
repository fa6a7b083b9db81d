//! Entity to DTO mappers
//!
//! Implements conversions from domain entities to response DTOs. Defaults
//! applied here (empty strings for absent values, border fallback, the
//! "Say hi" preview) are presentation decisions, not domain state.

use chrono::SecondsFormat;

use vibe_core::entities::{ContactOverview, ConversationMessage, FriendRequestWithSender, User};
use vibe_core::value_objects::UserId;

use super::responses::{ContactResponse, FriendRequestResponse, MessageResponse, UserResponse};

/// Preview text for contacts with no conversation yet
pub const EMPTY_CONVERSATION_PREVIEW: &str = "Say hi! 👋";

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone().unwrap_or_default(),
            vibe_code: user.vibe_code.as_str().to_string(),
            bio: user.bio.clone(),
            profile_image: user.profile_image.clone(),
            profile_border: user.profile_border_or_default().to_string(),
            vibe_tags: user.vibe_tags.clone(),
            main_vibe: user.main_vibe.clone(),
            name_changed_at: user
                .name_changed_at
                .map(|t| t.to_rfc3339_opts(SecondsFormat::Secs, true))
                .unwrap_or_default(),
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

// ============================================================================
// Friend Request Mappers
// ============================================================================

impl From<&FriendRequestWithSender> for FriendRequestResponse {
    fn from(incoming: &FriendRequestWithSender) -> Self {
        Self {
            id: incoming.request.id,
            sender_id: incoming.request.sender_id,
            sender_name: incoming.sender.display_name(),
            vibe_code: incoming.sender.vibe_code.as_str().to_string(),
            profile_image: incoming.sender.profile_image.clone(),
            profile_border: incoming.sender.profile_border_or_default().to_string(),
            bio: incoming.sender.bio.clone(),
            sent_at: incoming.request.sent_at,
        }
    }
}

// ============================================================================
// Contact Mappers
// ============================================================================

impl From<&ContactOverview> for ContactResponse {
    fn from(overview: &ContactOverview) -> Self {
        Self {
            id: overview.user.id,
            name: overview.user.display_name(),
            vibe_code: overview.user.vibe_code.as_str().to_string(),
            profile_image: overview.user.profile_image.clone(),
            profile_border: overview.user.profile_border_or_default().to_string(),
            last_msg: overview
                .last_message
                .clone()
                .unwrap_or_else(|| EMPTY_CONVERSATION_PREVIEW.to_string()),
            last_time: overview
                .last_message_at
                .map(|t| t.to_rfc3339_opts(SecondsFormat::Secs, true))
                .unwrap_or_default(),
            unread: overview.unread_count,
        }
    }
}

// ============================================================================
// Message Mappers
// ============================================================================

impl MessageResponse {
    /// Build a conversation-view row from the perspective of `viewer`
    #[must_use]
    pub fn from_conversation(message: &ConversationMessage, viewer: UserId) -> Self {
        Self {
            id: message.message.id,
            sender_id: message.message.sender_id,
            text: message.message.text.clone(),
            sent_at: message.message.sent_at,
            is_me: message.message.sender_id == viewer,
            sender_name: message.sender_name.clone(),
        }
    }
}
