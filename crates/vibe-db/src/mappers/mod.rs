//! Entity <-> model mappers

mod contact;
mod friend_request;
mod message;
mod user;
