//! Message entity <-> model mappers

use vibe_core::entities::{ConversationMessage, Message};
use vibe_core::value_objects::{MessageId, UserId};

use crate::models::{ConversationMessageModel, MessageModel};

/// Convert MessageModel to Message entity
impl From<MessageModel> for Message {
    fn from(model: MessageModel) -> Self {
        Message {
            id: MessageId::new(model.id),
            sender_id: UserId::new(model.sender_id),
            receiver_id: UserId::new(model.receiver_id),
            text: model.text,
            sent_at: model.sent_at,
            is_read: model.is_read,
        }
    }
}

/// Convert a joined conversation row to its entity
impl From<ConversationMessageModel> for ConversationMessage {
    fn from(model: ConversationMessageModel) -> Self {
        // Same composition rule as User::display_name
        let sender_name = format!("{} {}", model.sender_first_name, model.sender_last_name)
            .trim()
            .to_string();

        ConversationMessage {
            message: Message {
                id: MessageId::new(model.id),
                sender_id: UserId::new(model.sender_id),
                receiver_id: UserId::new(model.receiver_id),
                text: model.text,
                sent_at: model.sent_at,
                is_read: model.is_read,
            },
            sender_name,
        }
    }
}
