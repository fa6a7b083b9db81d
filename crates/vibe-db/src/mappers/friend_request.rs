//! Friend request entity <-> model mappers

use vibe_core::entities::{FriendRequest, FriendRequestWithSender, RequestStatus, User};
use vibe_core::error::DomainError;
use vibe_core::value_objects::{RequestId, UserId, VibeCode};

use crate::models::{FriendRequestModel, IncomingRequestModel};

fn parse_status(status: &str) -> Result<RequestStatus, DomainError> {
    status
        .parse()
        .map_err(|_| DomainError::DatabaseError(format!("unknown request status: {status}")))
}

/// Convert FriendRequestModel to FriendRequest entity
///
/// Fails only when the stored status string is not a known lifecycle state.
impl TryFrom<FriendRequestModel> for FriendRequest {
    type Error = DomainError;

    fn try_from(model: FriendRequestModel) -> Result<Self, Self::Error> {
        Ok(FriendRequest {
            id: RequestId::new(model.id),
            sender_id: UserId::new(model.sender_id),
            receiver_id: UserId::new(model.receiver_id),
            status: parse_status(&model.status)?,
            sent_at: model.sent_at,
        })
    }
}

/// Convert a joined incoming-request row to its entity pair
impl TryFrom<IncomingRequestModel> for FriendRequestWithSender {
    type Error = DomainError;

    fn try_from(model: IncomingRequestModel) -> Result<Self, Self::Error> {
        let request = FriendRequest {
            id: RequestId::new(model.id),
            sender_id: UserId::new(model.sender_id),
            receiver_id: UserId::new(model.receiver_id),
            status: parse_status(&model.status)?,
            sent_at: model.sent_at,
        };

        let sender = User {
            id: UserId::new(model.sender_id),
            first_name: model.sender_first_name,
            last_name: model.sender_last_name,
            email: model.sender_email,
            phone: model.sender_phone,
            vibe_code: VibeCode::new(model.sender_vibe_code),
            bio: model.sender_bio,
            profile_image: model.sender_profile_image,
            profile_border: model.sender_profile_border,
            vibe_tags: model.sender_vibe_tags,
            main_vibe: model.sender_main_vibe,
            name_changed_at: model.sender_name_changed_at,
            created_at: model.sender_created_at,
        };

        Ok(FriendRequestWithSender { request, sender })
    }
}
