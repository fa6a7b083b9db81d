//! Contact list service

use tracing::instrument;

use vibe_core::entities::User;

use crate::dto::{ContactResponse, ContactsResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Contact list service
pub struct ContactService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ContactService<'a> {
    /// Create a new ContactService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List the user's contacts with conversation previews
    ///
    /// Ordered by most recent message first; contacts with no messages sort
    /// last.
    #[instrument(skip(self, user), fields(user_id = %user.id))]
    pub async fn list_contacts(&self, user: &User) -> ServiceResult<ContactsResponse> {
        let overviews = self.ctx.contact_repo().list_overviews(user.id).await?;

        Ok(ContactsResponse {
            contacts: overviews.iter().map(ContactResponse::from).collect(),
        })
    }
}
