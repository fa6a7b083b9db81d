//! PostgreSQL implementation of ContactRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use vibe_core::entities::ContactOverview;
use vibe_core::traits::{ContactRepository, RepoResult};
use vibe_core::value_objects::UserId;

use crate::models::ContactOverviewModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ContactRepository
#[derive(Clone)]
pub struct PgContactRepository {
    pool: PgPool,
}

impl PgContactRepository {
    /// Create a new PgContactRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactRepository for PgContactRepository {
    #[instrument(skip(self))]
    async fn exists(&self, user_id: UserId, contact_id: UserId) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(
                SELECT 1 FROM contacts WHERE user_id = $1 AND contact_id = $2
            )
            ",
        )
        .bind(user_id.into_inner())
        .bind(contact_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn list_overviews(&self, user_id: UserId) -> RepoResult<Vec<ContactOverview>> {
        let rows = sqlx::query_as::<_, ContactOverviewModel>(
            r"
            SELECT u.id, u.first_name, u.last_name, u.email, u.phone, u.vibe_code, u.bio,
                   u.profile_image, u.profile_border, u.vibe_tags, u.main_vibe,
                   u.name_changed_at, u.created_at,
                   (
                       SELECT m.text FROM messages m
                       WHERE (m.sender_id = c.user_id AND m.receiver_id = c.contact_id)
                          OR (m.sender_id = c.contact_id AND m.receiver_id = c.user_id)
                       ORDER BY m.sent_at DESC, m.id DESC
                       LIMIT 1
                   ) AS last_message,
                   (
                       SELECT m.sent_at FROM messages m
                       WHERE (m.sender_id = c.user_id AND m.receiver_id = c.contact_id)
                          OR (m.sender_id = c.contact_id AND m.receiver_id = c.user_id)
                       ORDER BY m.sent_at DESC, m.id DESC
                       LIMIT 1
                   ) AS last_message_at,
                   (
                       SELECT COUNT(*) FROM messages m
                       WHERE m.sender_id = c.contact_id
                         AND m.receiver_id = c.user_id
                         AND m.is_read = FALSE
                   ) AS unread_count
            FROM contacts c
            JOIN users u ON u.id = c.contact_id
            WHERE c.user_id = $1
            ORDER BY last_message_at DESC NULLS LAST, u.first_name ASC
            ",
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(ContactOverview::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgContactRepository>();
    }
}
