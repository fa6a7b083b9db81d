//! Friend request entity - a pending or resolved invitation

use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

use crate::entities::User;
use crate::value_objects::{RequestId, UserId};

/// Lifecycle state of a friend request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestStatus {
    Pending,
    Accepted,
    Declined,
}

impl RequestStatus {
    /// Storage representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Declined => "declined",
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when parsing a status from its storage representation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown request status: {0}")]
pub struct ParseRequestStatusError(pub String);

impl FromStr for RequestStatus {
    type Err = ParseRequestStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "accepted" => Ok(Self::Accepted),
            "declined" => Ok(Self::Declined),
            other => Err(ParseRequestStatusError(other.to_string())),
        }
    }
}

/// Receiver's choice when resolving a pending request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RespondAction {
    Accept,
    Decline,
}

impl RespondAction {
    /// Parse the wire value; anything but "accept"/"decline" is rejected
    pub fn parse(action: &str) -> Option<Self> {
        match action {
            "accept" => Some(Self::Accept),
            "decline" => Some(Self::Decline),
            _ => None,
        }
    }
}

/// Friend request entity
///
/// At most one row exists per ordered (sender, receiver) pair, regardless of
/// status; requests transition once and are never re-opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FriendRequest {
    pub id: RequestId,
    pub sender_id: UserId,
    pub receiver_id: UserId,
    pub status: RequestStatus,
    pub sent_at: DateTime<Utc>,
}

impl FriendRequest {
    #[inline]
    pub fn is_pending(&self) -> bool {
        self.status == RequestStatus::Pending
    }
}

/// A pending request joined with the sender's profile, for inbox listings
#[derive(Debug, Clone)]
pub struct FriendRequestWithSender {
    pub request: FriendRequest,
    pub sender: User,
}
