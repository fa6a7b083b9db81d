//! Authentication utilities

mod password;
mod token;

pub use password::{hash_password, validate_password, verify_password};
pub use token::{Claims, TokenService};
