//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL (TOKEN_SECRET defaults to a test value)
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;

/// Register a fresh user and return the request plus auth payload
async fn register_user(server: &TestServer) -> (RegisterRequest, AuthResponse) {
    let request = RegisterRequest::unique();
    let response = server.post("/register", &request).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    (request, auth)
}

/// Link two users by sending mutual friend requests
async fn link_users(server: &TestServer, a: &AuthResponse, b: &AuthResponse) {
    let response = server
        .post_auth(
            "/friends/request",
            &a.token,
            &SendFriendRequest {
                vibe_code: b.user.vibe_code.clone(),
            },
        )
        .await
        .unwrap();
    let outcome: FriendRequestOutcome = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!outcome.auto_accepted);

    let response = server
        .post_auth(
            "/friends/request",
            &b.token,
            &SendFriendRequest {
                vibe_code: a.user.vibe_code.clone(),
            },
        )
        .await
        .unwrap();
    let outcome: FriendRequestOutcome = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(outcome.auto_accepted);
}

// ============================================================================
// Status Tests
// ============================================================================

#[tokio::test]
async fn test_root_status() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/").await.expect("Request failed");
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "VibeRevive API is running 🚀");
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_user() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (request, auth) = register_user(&server).await;

    assert_eq!(auth.user.first_name, request.first_name);
    assert_eq!(auth.user.email, request.email);
    assert!(!auth.token.is_empty());
    assert!(auth.user.vibe_code.starts_with("Vibe"));
    assert_eq!(auth.user.name_changed_at, "");
    assert_eq!(auth.user.profile_border, "glow_purple");
}

#[tokio::test]
async fn test_register_duplicate_email() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    // First registration
    server.post("/register", &request).await.unwrap();

    // Second registration with same email
    let response = server.post("/register", &request).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error.code, "EMAIL_TAKEN");
}

#[tokio::test]
async fn test_register_short_password() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = RegisterRequest::unique();
    request.password = "short".to_string();

    let response = server.post("/register", &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_login() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, _) = register_user(&server).await;

    let login_req = LoginRequest::from_register(&register_req);
    let response = server.post("/login", &login_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(auth.user.email, register_req.email);
    assert!(!auth.token.is_empty());
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, _) = register_user(&server).await;

    // Wrong password for a known account
    let response = server
        .post(
            "/login",
            &LoginRequest {
                email: register_req.email.clone(),
                password: "not-the-password".to_string(),
            },
        )
        .await
        .unwrap();
    let wrong_password: ErrorResponse = assert_json(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();

    // Unknown account entirely
    let response = server
        .post(
            "/login",
            &LoginRequest {
                email: "nobody@example.com".to_string(),
                password: "whatever123".to_string(),
            },
        )
        .await
        .unwrap();
    let unknown_email: ErrorResponse = assert_json(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();

    assert_eq!(wrong_password.error.message, unknown_email.error.message);
    assert_eq!(wrong_password.error.message, "Incorrect email or password");
}

#[tokio::test]
async fn test_me_requires_auth() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/me").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_me_rejects_garbage_token() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get_auth("/me", "not.a.token").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_me_returns_current_user() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, auth) = register_user(&server).await;

    let response = server.get_auth("/me", &auth.token).await.unwrap();
    let envelope: UserEnvelope = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(envelope.user.email, register_req.email);
    assert_eq!(envelope.user.id, auth.user.id);
}

// ============================================================================
// Profile Tests
// ============================================================================

#[tokio::test]
async fn test_partial_profile_update() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_user(&server).await;

    let update = UpdateProfileRequest {
        bio: Some("Chasing sunsets".to_string()),
        main_vibe: Some("chill".to_string()),
        ..Default::default()
    };

    let response = server.put_auth("/profile", &auth.token, &update).await.unwrap();
    let envelope: UserEnvelope = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(envelope.user.bio, "Chasing sunsets");
    assert_eq!(envelope.user.main_vibe, "chill");
    // Untouched fields survive
    assert_eq!(envelope.user.first_name, auth.user.first_name);
    assert_eq!(envelope.user.vibe_code, auth.user.vibe_code);
    assert_eq!(envelope.user.name_changed_at, "");
}

#[tokio::test]
async fn test_display_name_change_regenerates_code_and_locks() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_user(&server).await;

    let update = UpdateProfileRequest {
        display_name: Some("Maya Chen".to_string()),
        ..Default::default()
    };

    let response = server.put_auth("/profile", &auth.token, &update).await.unwrap();
    let envelope: UserEnvelope = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(envelope.user.first_name, "Maya");
    assert_eq!(envelope.user.last_name, "Chen");
    assert!(envelope.user.vibe_code.starts_with("VibeMACH"));
    assert_ne!(envelope.user.vibe_code, auth.user.vibe_code);
    assert!(!envelope.user.name_changed_at.is_empty());

    // A second rename within the lock window is rejected
    let update = UpdateProfileRequest {
        display_name: Some("Maya Lin".to_string()),
        ..Default::default()
    };
    let response = server.put_auth("/profile", &auth.token, &update).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error.code, "NAME_LOCKED");
}

// ============================================================================
// Friend Request Tests
// ============================================================================

#[tokio::test]
async fn test_friend_request_flow() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, alice) = register_user(&server).await;
    let (_, bob) = register_user(&server).await;

    // Bob sends a request to Alice
    let response = server
        .post_auth(
            "/friends/request",
            &bob.token,
            &SendFriendRequest {
                vibe_code: alice.user.vibe_code.clone(),
            },
        )
        .await
        .unwrap();
    let outcome: FriendRequestOutcome = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!outcome.auto_accepted);
    assert!(outcome.message.contains(&alice.user.first_name));

    // Alice sees the pending request
    let response = server.get_auth("/friends/requests", &alice.token).await.unwrap();
    let listing: FriendRequestsResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(listing.requests.len(), 1);
    let pending = &listing.requests[0];
    assert_eq!(pending.sender_id, bob.user.id);
    assert_eq!(pending.vibe_code, bob.user.vibe_code);

    // Alice accepts
    let response = server
        .post_auth(
            "/friends/respond",
            &alice.token,
            &RespondFriendRequest {
                request_id: pending.id,
                action: "accept".to_string(),
            },
        )
        .await
        .unwrap();
    let ack: AckResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(ack.message, "Friend request accepted! 🎉");

    // Both sides now list each other as contacts
    let response = server.get_auth("/contacts", &alice.token).await.unwrap();
    let contacts: ContactsResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(contacts.contacts.iter().any(|c| c.id == bob.user.id));

    let response = server.get_auth("/contacts", &bob.token).await.unwrap();
    let contacts: ContactsResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(contacts.contacts.iter().any(|c| c.id == alice.user.id));

    // The accepted request no longer shows as pending
    let response = server.get_auth("/friends/requests", &alice.token).await.unwrap();
    let listing: FriendRequestsResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(listing.requests.is_empty());
}

#[tokio::test]
async fn test_mutual_requests_auto_accept() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, alice) = register_user(&server).await;
    let (_, bob) = register_user(&server).await;

    link_users(&server, &alice, &bob).await;

    let response = server.get_auth("/contacts", &alice.token).await.unwrap();
    let contacts: ContactsResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(contacts.contacts.iter().any(|c| c.id == bob.user.id));
}

#[tokio::test]
async fn test_decline_friend_request() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, alice) = register_user(&server).await;
    let (_, bob) = register_user(&server).await;

    server
        .post_auth(
            "/friends/request",
            &bob.token,
            &SendFriendRequest {
                vibe_code: alice.user.vibe_code.clone(),
            },
        )
        .await
        .unwrap();

    let response = server.get_auth("/friends/requests", &alice.token).await.unwrap();
    let listing: FriendRequestsResponse = assert_json(response, StatusCode::OK).await.unwrap();
    let request_id = listing.requests[0].id;

    let response = server
        .post_auth(
            "/friends/respond",
            &alice.token,
            &RespondFriendRequest {
                request_id,
                action: "decline".to_string(),
            },
        )
        .await
        .unwrap();
    let ack: AckResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(ack.message, "Declined.");

    // No contact link was made
    let response = server.get_auth("/contacts", &alice.token).await.unwrap();
    let contacts: ContactsResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!contacts.contacts.iter().any(|c| c.id == bob.user.id));
}

#[tokio::test]
async fn test_respond_invalid_action() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, alice) = register_user(&server).await;

    let response = server
        .post_auth(
            "/friends/respond",
            &alice.token,
            &RespondFriendRequest {
                request_id: 1,
                action: "maybe".to_string(),
            },
        )
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error.code, "INVALID_ACTION");
}

#[tokio::test]
async fn test_self_friend_request_rejected() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, alice) = register_user(&server).await;

    let response = server
        .post_auth(
            "/friends/request",
            &alice.token,
            &SendFriendRequest {
                vibe_code: alice.user.vibe_code.clone(),
            },
        )
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error.code, "SELF_FRIEND_REQUEST");
}

#[tokio::test]
async fn test_unknown_vibe_code() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, alice) = register_user(&server).await;

    let response = server
        .post_auth(
            "/friends/request",
            &alice.token,
            &SendFriendRequest {
                vibe_code: "VibeZZZZ999".to_string(),
            },
        )
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(error.error.code, "UNKNOWN_VIBE_CODE");
}

#[tokio::test]
async fn test_duplicate_friend_request_rejected() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, alice) = register_user(&server).await;
    let (_, bob) = register_user(&server).await;

    let request = SendFriendRequest {
        vibe_code: alice.user.vibe_code.clone(),
    };

    server.post_auth("/friends/request", &bob.token, &request).await.unwrap();

    let response = server.post_auth("/friends/request", &bob.token, &request).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error.code, "REQUEST_ALREADY_SENT");
}

// ============================================================================
// Messaging Tests
// ============================================================================

#[tokio::test]
async fn test_message_requires_contact() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, alice) = register_user(&server).await;
    let (_, bob) = register_user(&server).await;

    let response = server
        .post_auth(
            "/messages/send",
            &alice.token,
            &SendMessageRequest {
                receiver_id: bob.user.id,
                text: "hey stranger".to_string(),
            },
        )
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(error.error.code, "NOT_CONTACT");
}

#[tokio::test]
async fn test_empty_message_rejected() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, alice) = register_user(&server).await;
    let (_, bob) = register_user(&server).await;

    link_users(&server, &alice, &bob).await;

    let response = server
        .post_auth(
            "/messages/send",
            &alice.token,
            &SendMessageRequest {
                receiver_id: bob.user.id,
                text: "   ".to_string(),
            },
        )
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.error.code, "EMPTY_MESSAGE");
}

#[tokio::test]
async fn test_new_contact_has_default_preview() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, alice) = register_user(&server).await;
    let (_, bob) = register_user(&server).await;

    link_users(&server, &alice, &bob).await;

    let response = server.get_auth("/contacts", &alice.token).await.unwrap();
    let contacts: ContactsResponse = assert_json(response, StatusCode::OK).await.unwrap();
    let bob_row = contacts
        .contacts
        .iter()
        .find(|c| c.id == bob.user.id)
        .expect("Bob should be a contact");

    assert_eq!(bob_row.last_msg, "Say hi! 👋");
    assert_eq!(bob_row.last_time, "");
    assert_eq!(bob_row.unread, 0);
}

#[tokio::test]
async fn test_message_flow_and_unread_counts() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, alice) = register_user(&server).await;
    let (_, bob) = register_user(&server).await;

    link_users(&server, &alice, &bob).await;

    // Alice sends two messages; text is trimmed before storage
    for text in ["first one", "  second one  "] {
        let response = server
            .post_auth(
                "/messages/send",
                &alice.token,
                &SendMessageRequest {
                    receiver_id: bob.user.id,
                    text: text.to_string(),
                },
            )
            .await
            .unwrap();
        let ack: AckResponse = assert_json(response, StatusCode::OK).await.unwrap();
        assert_eq!(ack.message, "Sent!");
    }

    // Bob's contact list shows the unread count and last message
    let response = server.get_auth("/contacts", &bob.token).await.unwrap();
    let contacts: ContactsResponse = assert_json(response, StatusCode::OK).await.unwrap();
    let alice_row = contacts
        .contacts
        .iter()
        .find(|c| c.id == alice.user.id)
        .expect("Alice should be a contact");
    assert_eq!(alice_row.unread, 2);
    assert_eq!(alice_row.last_msg, "second one");
    assert!(!alice_row.last_time.is_empty());

    // Bob opens the conversation; messages come back oldest first
    let path = format!("/messages/{}", alice.user.id);
    let response = server.get_auth(&path, &bob.token).await.unwrap();
    let thread: MessagesResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(thread.messages.len(), 2);
    assert_eq!(thread.messages[0].text, "first one");
    assert_eq!(thread.messages[1].text, "second one");
    assert!(!thread.messages[0].is_me);
    assert_eq!(thread.messages[0].sender_id, alice.user.id);

    // Opening the conversation cleared the unread count
    let response = server.get_auth("/contacts", &bob.token).await.unwrap();
    let contacts: ContactsResponse = assert_json(response, StatusCode::OK).await.unwrap();
    let alice_row = contacts
        .contacts
        .iter()
        .find(|c| c.id == alice.user.id)
        .expect("Alice should be a contact");
    assert_eq!(alice_row.unread, 0);
}
