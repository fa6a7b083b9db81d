//! # vibe-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use dto::{
    AckResponse, AuthResponse, ContactResponse, ContactsResponse, FriendRequestOutcome,
    FriendRequestResponse, FriendRequestsResponse, LoginRequest, MessageResponse, MessagesResponse,
    RegisterRequest, RespondFriendRequest, SendFriendRequest, SendMessageRequest, StatusResponse,
    UpdateProfileRequest, UserEnvelope, UserResponse,
};
pub use services::{
    AuthService, ContactService, FriendService, MessageService, ProfileService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult,
};
