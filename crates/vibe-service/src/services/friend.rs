//! Friend request service
//!
//! Handles sending requests by vibe code, the mutual-request auto-accept,
//! listing the inbox, and accept/decline resolution.

use tracing::{info, instrument};

use vibe_core::entities::{RespondAction, User};
use vibe_core::error::DomainError;
use vibe_core::value_objects::RequestId;

use crate::dto::{
    AckResponse, FriendRequestOutcome, FriendRequestResponse, FriendRequestsResponse,
    RespondFriendRequest, SendFriendRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Friend request service
pub struct FriendService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FriendService<'a> {
    /// Create a new FriendService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Send a friend request to the owner of a vibe code
    ///
    /// If the target already has a pending request towards the sender, both
    /// sides are linked immediately instead of creating a second request.
    #[instrument(skip(self, sender, request), fields(sender_id = %sender.id))]
    pub async fn send_request(
        &self,
        sender: &User,
        request: SendFriendRequest,
    ) -> ServiceResult<FriendRequestOutcome> {
        let code = request.vibe_code.trim();

        let target = self
            .ctx
            .user_repo()
            .find_by_vibe_code(code)
            .await?
            .ok_or_else(|| ServiceError::Domain(DomainError::VibeCodeNotFound(code.to_string())))?;

        if target.id == sender.id {
            return Err(ServiceError::Domain(DomainError::SelfFriendRequest));
        }

        if self.ctx.contact_repo().exists(sender.id, target.id).await? {
            return Err(ServiceError::Domain(DomainError::AlreadyContact));
        }

        // Any prior request in this direction blocks a new one, even a
        // declined or accepted one
        if self
            .ctx
            .friend_request_repo()
            .exists_between(sender.id, target.id)
            .await?
        {
            return Err(ServiceError::Domain(DomainError::RequestAlreadySent));
        }

        if let Some(reverse) = self
            .ctx
            .friend_request_repo()
            .find_pending(target.id, sender.id)
            .await?
        {
            self.ctx
                .friend_request_repo()
                .accept_and_link(reverse.id, sender.id, target.id)
                .await?;

            info!(sender_id = %sender.id, target_id = %target.id, "Mutual request auto-accepted");

            return Ok(FriendRequestOutcome {
                message: "You both added each other — now connected! 🎉".to_string(),
                auto_accepted: true,
            });
        }

        self.ctx
            .friend_request_repo()
            .create(sender.id, target.id)
            .await?;

        info!(sender_id = %sender.id, target_id = %target.id, "Friend request sent");

        Ok(FriendRequestOutcome {
            message: format!("Friend request sent to {}! 📨", target.first_name),
            auto_accepted: false,
        })
    }

    /// List pending requests addressed to the user, newest first
    #[instrument(skip(self, user), fields(user_id = %user.id))]
    pub async fn list_incoming(&self, user: &User) -> ServiceResult<FriendRequestsResponse> {
        let incoming = self
            .ctx
            .friend_request_repo()
            .list_incoming_pending(user.id)
            .await?;

        Ok(FriendRequestsResponse {
            requests: incoming.iter().map(FriendRequestResponse::from).collect(),
        })
    }

    /// Accept or decline a pending request addressed to the user
    #[instrument(skip(self, user, request), fields(user_id = %user.id))]
    pub async fn respond(
        &self,
        user: &User,
        request: RespondFriendRequest,
    ) -> ServiceResult<AckResponse> {
        let action = RespondAction::parse(&request.action)
            .ok_or_else(|| ServiceError::Domain(DomainError::InvalidAction(request.action.clone())))?;

        let request_id = RequestId::new(request.request_id);

        let pending = self
            .ctx
            .friend_request_repo()
            .find_pending_for_receiver(request_id, user.id)
            .await?
            .ok_or(ServiceError::Domain(DomainError::RequestNotFound(
                request_id,
            )))?;

        match action {
            RespondAction::Accept => {
                self.ctx
                    .friend_request_repo()
                    .accept_and_link(pending.id, user.id, pending.sender_id)
                    .await?;

                info!(request_id = %pending.id, "Friend request accepted");

                Ok(AckResponse::new("Friend request accepted! 🎉"))
            }
            RespondAction::Decline => {
                self.ctx.friend_request_repo().decline(pending.id).await?;

                info!(request_id = %pending.id, "Friend request declined");

                Ok(AckResponse::new("Declined."))
            }
        }
    }
}
