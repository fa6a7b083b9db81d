//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod auth;
pub mod contacts;
pub mod friends;
pub mod messages;
pub mod profile;
pub mod status;
