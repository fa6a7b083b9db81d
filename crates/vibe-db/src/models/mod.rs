//! Database models with SQLx `FromRow` derives

mod contact;
mod friend_request;
mod message;
mod user;

pub use contact::ContactOverviewModel;
pub use friend_request::{FriendRequestModel, IncomingRequestModel};
pub use message::{ConversationMessageModel, MessageModel};
pub use user::UserModel;
