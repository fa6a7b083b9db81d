//! Value objects - typed identifiers and the vibe code

mod ids;
mod vibe_code;

pub use ids::{MessageId, RequestId, UserId};
pub use vibe_code::VibeCode;
