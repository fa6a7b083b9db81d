//! Direct messaging service
//!
//! Sending is restricted to linked contacts; fetching a conversation marks
//! the other side's messages as read.

use tracing::{debug, info, instrument};

use vibe_core::entities::User;
use vibe_core::error::DomainError;
use vibe_core::value_objects::UserId;

use crate::dto::{AckResponse, MessageResponse, MessagesResponse, SendMessageRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Direct messaging service
pub struct MessageService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MessageService<'a> {
    /// Create a new MessageService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Send a message to a contact
    ///
    /// The text is trimmed before storage; whitespace-only messages are
    /// rejected.
    #[instrument(skip(self, sender, request), fields(sender_id = %sender.id))]
    pub async fn send(
        &self,
        sender: &User,
        request: SendMessageRequest,
    ) -> ServiceResult<AckResponse> {
        let text = request.text.trim();
        if text.is_empty() {
            return Err(ServiceError::Domain(DomainError::EmptyMessage));
        }

        let receiver_id = UserId::new(request.receiver_id);

        if !self.ctx.contact_repo().exists(sender.id, receiver_id).await? {
            return Err(ServiceError::Domain(DomainError::NotContact));
        }

        let message = self
            .ctx
            .message_repo()
            .create(sender.id, receiver_id, text)
            .await?;

        info!(message_id = %message.id, receiver_id = %receiver_id, "Message sent");

        Ok(AckResponse::new("Sent!"))
    }

    /// Fetch the full conversation with a contact, oldest first
    ///
    /// Marks every message from the contact as read before loading, so the
    /// returned thread reflects an unread count of zero.
    #[instrument(skip(self, user), fields(user_id = %user.id, contact_id = %contact_id))]
    pub async fn conversation(
        &self,
        user: &User,
        contact_id: UserId,
    ) -> ServiceResult<MessagesResponse> {
        let marked = self
            .ctx
            .message_repo()
            .mark_read(contact_id, user.id)
            .await?;

        if marked > 0 {
            debug!(marked, "Marked messages as read");
        }

        let rows = self
            .ctx
            .message_repo()
            .conversation(user.id, contact_id)
            .await?;

        Ok(MessagesResponse {
            messages: rows
                .iter()
                .map(|row| MessageResponse::from_conversation(row, user.id))
                .collect(),
        })
    }
}
