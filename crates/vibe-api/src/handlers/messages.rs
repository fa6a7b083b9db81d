//! Direct messaging handlers

use axum::{
    extract::{Path, State},
    Json,
};
use vibe_core::value_objects::UserId;
use vibe_service::{AckResponse, MessageService, MessagesResponse, SendMessageRequest};

use crate::extractors::{CurrentUser, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Send a message to a contact
///
/// POST /messages/send
pub async fn send_message(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ValidatedJson(request): ValidatedJson<SendMessageRequest>,
) -> ApiResult<Json<AckResponse>> {
    let service = MessageService::new(state.service_context());
    let response = service.send(&user, request).await?;
    Ok(Json(response))
}

/// Fetch the conversation with a contact
///
/// Marks the contact's messages as read as a side effect.
///
/// GET /messages/:contact_id
pub async fn get_conversation(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(contact_id): Path<i64>,
) -> ApiResult<Json<MessagesResponse>> {
    let service = MessageService::new(state.service_context());
    let response = service
        .conversation(&user, UserId::new(contact_id))
        .await?;
    Ok(Json(response))
}
