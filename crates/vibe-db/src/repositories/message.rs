//! PostgreSQL implementation of MessageRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use vibe_core::entities::{ConversationMessage, Message};
use vibe_core::traits::{MessageRepository, RepoResult};
use vibe_core::value_objects::UserId;

use crate::models::{ConversationMessageModel, MessageModel};

use super::error::map_db_error;

/// PostgreSQL implementation of MessageRepository
#[derive(Clone)]
pub struct PgMessageRepository {
    pool: PgPool,
}

impl PgMessageRepository {
    /// Create a new PgMessageRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageRepository for PgMessageRepository {
    #[instrument(skip(self, text))]
    async fn create(
        &self,
        sender_id: UserId,
        receiver_id: UserId,
        text: &str,
    ) -> RepoResult<Message> {
        let result = sqlx::query_as::<_, MessageModel>(
            r"
            INSERT INTO messages (sender_id, receiver_id, text)
            VALUES ($1, $2, $3)
            RETURNING id, sender_id, receiver_id, text, sent_at, is_read
            ",
        )
        .bind(sender_id.into_inner())
        .bind(receiver_id.into_inner())
        .bind(text)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Message::from(result))
    }

    #[instrument(skip(self))]
    async fn mark_read(&self, sender_id: UserId, receiver_id: UserId) -> RepoResult<u64> {
        let result = sqlx::query(
            r"
            UPDATE messages
            SET is_read = TRUE
            WHERE sender_id = $1 AND receiver_id = $2 AND is_read = FALSE
            ",
        )
        .bind(sender_id.into_inner())
        .bind(receiver_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn conversation(
        &self,
        user_id: UserId,
        other_id: UserId,
    ) -> RepoResult<Vec<ConversationMessage>> {
        let rows = sqlx::query_as::<_, ConversationMessageModel>(
            r"
            SELECT m.id, m.sender_id, m.receiver_id, m.text, m.sent_at, m.is_read,
                   u.first_name AS sender_first_name,
                   u.last_name  AS sender_last_name
            FROM messages m
            JOIN users u ON u.id = m.sender_id
            WHERE (m.sender_id = $1 AND m.receiver_id = $2)
               OR (m.sender_id = $2 AND m.receiver_id = $1)
            ORDER BY m.sent_at ASC, m.id ASC
            ",
        )
        .bind(user_id.into_inner())
        .bind(other_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(ConversationMessage::from).collect())
    }
}
