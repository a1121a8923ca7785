//! Error types for the Gaming Lounge client

use thiserror::Error;

/// Fallback shown when the auth provider reports a failure without a message.
pub const SIGNUP_FALLBACK: &str = "An error occurred during signup. Please try again.";

/// Fallback shown when the store reports a failure without a message.
pub const GAME_INFO_FALLBACK: &str = "Failed to update game information. Please try again.";

/// Fallback shown when a login attempt fails without a message.
pub const LOGIN_FALLBACK: &str = "Could not log in. Please try again.";

/// Every failure a submit can hit. `Auth` and `Store` display the service's
/// reported reason verbatim; the UI shows `Display` output directly.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoungeError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Auth(String),

    #[error("{0}")]
    Store(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("User identifier is missing")]
    MissingUserId,

    #[error("Invalid response from server: {0}")]
    InvalidResponse(String),
}

pub type Result<T> = std::result::Result<T, LoungeError>;
