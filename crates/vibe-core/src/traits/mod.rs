//! Repository traits (ports)

mod repositories;

pub use repositories::{
    ContactRepository, FriendRequestRepository, MessageRepository, RepoResult, UserRepository,
};
