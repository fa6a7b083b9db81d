//! PostgreSQL repository implementations

pub mod error;

mod contact;
mod friend_request;
mod message;
mod user;

pub use contact::PgContactRepository;
pub use friend_request::PgFriendRequestRepository;
pub use message::PgMessageRepository;
pub use user::PgUserRepository;
