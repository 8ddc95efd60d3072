//! Game Error Types
//!
//! Game-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Game-specific result type alias
pub type GameResult<T> = Result<T, GameError>;

/// Game-specific error variants
///
/// Every variant except `Database` and `Internal` is an ordinary rejection the
/// client shows to the player.
#[derive(Debug, Error)]
pub enum GameError {
    /// Session does not exist or belongs to another player
    #[error("Game session not found")]
    SessionNotFound,

    /// Mutation attempted on a finished round
    #[error("Game session is already completed")]
    SessionCompleted,

    /// Swap requested with zero swap credits
    #[error("No swaps available")]
    NoSwapsAvailable,

    /// Currency balance too low for the purchase
    #[error("Not enough gems")]
    InsufficientCurrency,

    /// Word is not in the dictionary or cannot be built from the rack
    #[error("Word is not valid for this rack")]
    WordRejected,

    /// Malformed request (length bounds, duration range, ...)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Shop pack size that is not on sale
    #[error("Unknown swap pack: {0}")]
    UnknownSwapPack(u32),

    /// Requester identity missing or malformed
    #[error("Player identity is missing")]
    MissingPlayer,

    /// Persistence failure (transient from the caller's point of view)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl GameError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            GameError::SessionNotFound => ErrorKind::NotFound,
            GameError::SessionCompleted => ErrorKind::Conflict,
            GameError::NoSwapsAvailable
            | GameError::InsufficientCurrency
            | GameError::WordRejected => ErrorKind::UnprocessableEntity,
            GameError::InvalidInput(_) | GameError::UnknownSwapPack(_) => ErrorKind::BadRequest,
            GameError::MissingPlayer => ErrorKind::Unauthorized,
            GameError::Database(_) => ErrorKind::ServiceUnavailable,
            GameError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            GameError::SessionNotFound => "SESSION_NOT_FOUND",
            GameError::SessionCompleted => "SESSION_COMPLETED",
            GameError::NoSwapsAvailable => "NO_SWAPS_AVAILABLE",
            GameError::InsufficientCurrency => "INSUFFICIENT_CURRENCY",
            GameError::WordRejected => "WORD_REJECTED",
            GameError::InvalidInput(_) => "INVALID_INPUT",
            GameError::UnknownSwapPack(_) => "UNKNOWN_SWAP_PACK",
            GameError::MissingPlayer => "MISSING_PLAYER",
            GameError::Database(_) => "STORAGE_UNAVAILABLE",
            GameError::Internal(_) => "INTERNAL",
        }
    }

    fn action(&self) -> Option<&'static str> {
        match self {
            GameError::NoSwapsAvailable => Some("Buy swaps in the shop or wait for tomorrow's free swaps"),
            GameError::InsufficientCurrency => Some("Finish more rounds to earn gems"),
            GameError::SessionNotFound | GameError::SessionCompleted => Some("Start a new round"),
            GameError::Database(_) => Some("Please retry"),
            _ => None,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        // Storage details stay in the logs.
        let message = match self {
            GameError::Database(_) => "Storage is temporarily unavailable".to_string(),
            GameError::Internal(_) => "Internal error".to_string(),
            other => other.to_string(),
        };
        let err = AppError::new(self.kind(), message).with_code(self.code());
        match self.action() {
            Some(action) => err.with_action(action),
            None => err,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            GameError::Database(e) => {
                tracing::error!(error = %e, "Game database error");
            }
            GameError::Internal(msg) => {
                tracing::error!(message = %msg, "Game internal error");
            }
            GameError::NoSwapsAvailable | GameError::InsufficientCurrency => {
                tracing::warn!(code = self.code(), "Game purchase refused");
            }
            _ => {
                tracing::debug!(error = %self, "Game error");
            }
        }
    }
}

impl From<GameError> for AppError {
    fn from(err: GameError) -> Self {
        err.to_app_error()
    }
}

impl IntoResponse for GameError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<platform::client::IdentityError> for GameError {
    fn from(_: platform::client::IdentityError) -> Self {
        GameError::MissingPlayer
    }
}

impl From<JsonRejection> for GameError {
    fn from(rejection: JsonRejection) -> Self {
        GameError::InvalidInput(rejection.body_text())
    }
}
