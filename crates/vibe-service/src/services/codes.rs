//! Vibe code allocation against the user store

use vibe_core::error::DomainError;
use vibe_core::traits::UserRepository;
use vibe_core::value_objects::{UserId, VibeCode};

use super::error::{ServiceError, ServiceResult};

/// Upper bound on collision retries before giving up
///
/// With a 36^3 random suffix per name prefix, hitting this bound means the
/// prefix space is effectively full, not that we were unlucky.
const MAX_GENERATION_ATTEMPTS: u32 = 64;

/// Generate a vibe code that is not already taken
///
/// `exclude` skips one user's own row, so a rename can re-roll without
/// colliding with itself.
pub(crate) async fn unique_vibe_code(
    user_repo: &dyn UserRepository,
    first_name: &str,
    last_name: &str,
    exclude: Option<UserId>,
) -> ServiceResult<VibeCode> {
    for _ in 0..MAX_GENERATION_ATTEMPTS {
        let code = VibeCode::generate(first_name, last_name);
        if !user_repo.vibe_code_taken(code.as_str(), exclude).await? {
            return Ok(code);
        }
    }

    Err(ServiceError::Domain(DomainError::VibeCodeSpaceExhausted))
}
