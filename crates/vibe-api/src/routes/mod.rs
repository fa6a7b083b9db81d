//! Route definitions
//!
//! All API routes are mounted flat at the root, matching the paths mobile
//! clients already ship with.

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::handlers::{auth, contacts, friends, messages, profile, status};
use crate::state::AppState;

/// Create the main API router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(status::root))
        .merge(auth_routes())
        .merge(friend_routes())
        .merge(contact_routes())
        .merge(message_routes())
}

/// Authentication and profile routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/me", get(auth::me))
        .route("/profile", put(profile::update_profile))
}

/// Friend request routes
fn friend_routes() -> Router<AppState> {
    Router::new()
        .route("/friends/request", post(friends::send_request))
        .route("/friends/requests", get(friends::list_requests))
        .route("/friends/respond", post(friends::respond))
}

/// Contact routes
fn contact_routes() -> Router<AppState> {
    Router::new().route("/contacts", get(contacts::list_contacts))
}

/// Message routes
fn message_routes() -> Router<AppState> {
    Router::new()
        .route("/messages/send", post(messages::send_message))
        .route("/messages/:contact_id", get(messages::get_conversation))
}
