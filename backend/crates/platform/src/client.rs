//! Client identification utilities
//!
//! Authentication happens upstream. The gateway forwards the authenticated
//! player as a UUID header; this module reads it back.

use axum::http::HeaderMap;
use uuid::Uuid;

/// Header carrying the authenticated player id.
pub const PLAYER_ID_HEADER: &str = "x-player-id";

/// Error when identifying the requester
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    #[error("Missing required header: {0}")]
    MissingHeader(&'static str),

    #[error("Malformed header: {0}")]
    MalformedHeader(&'static str),
}

/// Extract the requesting player's id.
///
/// ## Returns
/// * `Ok(Uuid)` - the player id
/// * `Err(IdentityError)` - header absent, not UTF-8, or not a UUID
pub fn extract_player_id(headers: &HeaderMap) -> Result<Uuid, IdentityError> {
    let raw = headers
        .get(PLAYER_ID_HEADER)
        .ok_or(IdentityError::MissingHeader(PLAYER_ID_HEADER))?
        .to_str()
        .map_err(|_| IdentityError::MalformedHeader(PLAYER_ID_HEADER))?;

    Uuid::parse_str(raw.trim()).map_err(|_| IdentityError::MalformedHeader(PLAYER_ID_HEADER))
}
