//! PostgreSQL implementation of FriendRequestRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use vibe_core::entities::{FriendRequest, FriendRequestWithSender};
use vibe_core::error::DomainError;
use vibe_core::traits::{FriendRequestRepository, RepoResult};
use vibe_core::value_objects::{RequestId, UserId};

use crate::models::{FriendRequestModel, IncomingRequestModel};

use super::error::{map_db_error, map_unique_violation, request_not_found};

/// PostgreSQL implementation of FriendRequestRepository
#[derive(Clone)]
pub struct PgFriendRequestRepository {
    pool: PgPool,
}

impl PgFriendRequestRepository {
    /// Create a new PgFriendRequestRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FriendRequestRepository for PgFriendRequestRepository {
    #[instrument(skip(self))]
    async fn exists_between(&self, sender_id: UserId, receiver_id: UserId) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(
                SELECT 1 FROM friend_requests WHERE sender_id = $1 AND receiver_id = $2
            )
            ",
        )
        .bind(sender_id.into_inner())
        .bind(receiver_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn find_pending(
        &self,
        sender_id: UserId,
        receiver_id: UserId,
    ) -> RepoResult<Option<FriendRequest>> {
        let result = sqlx::query_as::<_, FriendRequestModel>(
            r"
            SELECT id, sender_id, receiver_id, status, sent_at
            FROM friend_requests
            WHERE sender_id = $1 AND receiver_id = $2 AND status = 'pending'
            ",
        )
        .bind(sender_id.into_inner())
        .bind(receiver_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(FriendRequest::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn create(&self, sender_id: UserId, receiver_id: UserId) -> RepoResult<FriendRequest> {
        let result = sqlx::query_as::<_, FriendRequestModel>(
            r"
            INSERT INTO friend_requests (sender_id, receiver_id, status)
            VALUES ($1, $2, 'pending')
            RETURNING id, sender_id, receiver_id, status, sent_at
            ",
        )
        .bind(sender_id.into_inner())
        .bind(receiver_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::RequestAlreadySent))?;

        FriendRequest::try_from(result)
    }

    #[instrument(skip(self))]
    async fn list_incoming_pending(
        &self,
        receiver_id: UserId,
    ) -> RepoResult<Vec<FriendRequestWithSender>> {
        let rows = sqlx::query_as::<_, IncomingRequestModel>(
            r"
            SELECT fr.id, fr.sender_id, fr.receiver_id, fr.status, fr.sent_at,
                   u.first_name      AS sender_first_name,
                   u.last_name       AS sender_last_name,
                   u.email           AS sender_email,
                   u.phone           AS sender_phone,
                   u.vibe_code       AS sender_vibe_code,
                   u.bio             AS sender_bio,
                   u.profile_image   AS sender_profile_image,
                   u.profile_border  AS sender_profile_border,
                   u.vibe_tags       AS sender_vibe_tags,
                   u.main_vibe       AS sender_main_vibe,
                   u.name_changed_at AS sender_name_changed_at,
                   u.created_at      AS sender_created_at
            FROM friend_requests fr
            JOIN users u ON u.id = fr.sender_id
            WHERE fr.receiver_id = $1 AND fr.status = 'pending'
            ORDER BY fr.sent_at DESC, fr.id DESC
            ",
        )
        .bind(receiver_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter()
            .map(FriendRequestWithSender::try_from)
            .collect()
    }

    #[instrument(skip(self))]
    async fn find_pending_for_receiver(
        &self,
        id: RequestId,
        receiver_id: UserId,
    ) -> RepoResult<Option<FriendRequest>> {
        let result = sqlx::query_as::<_, FriendRequestModel>(
            r"
            SELECT id, sender_id, receiver_id, status, sent_at
            FROM friend_requests
            WHERE id = $1 AND receiver_id = $2 AND status = 'pending'
            ",
        )
        .bind(id.into_inner())
        .bind(receiver_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(FriendRequest::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn accept_and_link(&self, id: RequestId, a: UserId, b: UserId) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let result = sqlx::query(
            r"
            UPDATE friend_requests SET status = 'accepted' WHERE id = $1 AND status = 'pending'
            ",
        )
        .bind(id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(request_not_found(id));
        }

        // Mirrored pair; ON CONFLICT makes re-linking idempotent
        sqlx::query(
            r"
            INSERT INTO contacts (user_id, contact_id) VALUES ($1, $2)
            ON CONFLICT DO NOTHING
            ",
        )
        .bind(a.into_inner())
        .bind(b.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        sqlx::query(
            r"
            INSERT INTO contacts (user_id, contact_id) VALUES ($1, $2)
            ON CONFLICT DO NOTHING
            ",
        )
        .bind(b.into_inner())
        .bind(a.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn decline(&self, id: RequestId) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE friend_requests SET status = 'declined' WHERE id = $1 AND status = 'pending'
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(request_not_found(id));
        }

        Ok(())
    }
}
