//! Contact list handlers

use axum::{extract::State, Json};
use vibe_service::{ContactService, ContactsResponse};

use crate::extractors::CurrentUser;
use crate::response::ApiResult;
use crate::state::AppState;

/// List contacts with conversation previews
///
/// GET /contacts
pub async fn list_contacts(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> ApiResult<Json<ContactsResponse>> {
    let service = ContactService::new(state.service_context());
    let response = service.list_contacts(&user).await?;
    Ok(Json(response))
}
