//! Domain entities - core business objects

mod contact;
mod friend_request;
mod message;
mod user;

pub use contact::{Contact, ContactOverview};
pub use friend_request::{FriendRequest, FriendRequestWithSender, RequestStatus, RespondAction};
pub use message::{ConversationMessage, Message};
pub use user::{split_display_name, NewUser, User, DEFAULT_PROFILE_BORDER, NAME_LOCK_DAYS};
