//! Vibe code - the human-shareable "add me" handle
//!
//! Shape: `"Vibe"` + up to two uppercased characters from the first name +
//! up to two from the last name + three random uppercase alphanumerics.
//! Uniqueness is enforced by the store; this type only knows the shape.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of random characters appended to every code
pub const RANDOM_SUFFIX_LEN: usize = 3;

/// A user's unique, immutable-format contact handle
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VibeCode(String);

impl VibeCode {
    /// Wrap an already-stored code without re-checking its shape
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Generate a fresh code from the owner's names
    ///
    /// The caller is responsible for checking uniqueness against the store
    /// and regenerating on collision.
    pub fn generate(first_name: &str, last_name: &str) -> Self {
        use rand::Rng;

        const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

        let mut code = String::from("Vibe");
        code.extend(first_name.chars().take(2).flat_map(char::to_uppercase));
        code.extend(last_name.chars().take(2).flat_map(char::to_uppercase));

        let mut rng = rand::thread_rng();
        for _ in 0..RANDOM_SUFFIX_LEN {
            code.push(CHARSET[rng.gen_range(0..CHARSET.len())] as char);
        }

        Self(code)
    }

    /// Check whether a string has the generated shape
    ///
    /// Used for diagnostics and tests; stored codes are trusted as-is.
    pub fn has_valid_shape(code: &str) -> bool {
        let Some(rest) = code.strip_prefix("Vibe") else {
            return false;
        };
        if rest.len() < RANDOM_SUFFIX_LEN {
            return false;
        }
        rest.chars()
            .rev()
            .take(RANDOM_SUFFIX_LEN)
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
    }

    /// Get the code as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VibeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for VibeCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl From<VibeCode> for String {
    fn from(code: VibeCode) -> Self {
        code.0
    }
}
