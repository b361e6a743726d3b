use thiserror::Error;

/// Internal issues indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Argon2 failed to hash a password or parse a stored hash.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    /// JWT encoding failed while issuing a token.
    #[error("Failed to sign access token: {0}")]
    TokenSigning(#[from] jsonwebtoken::errors::Error),

    /// A standard duration does not fit into a chrono duration.
    #[error("Duration out of range: {0}")]
    DurationOutOfRange(#[from] chrono::OutOfRangeError),

    /// A background task panicked or was cancelled.
    #[error("Background task failed: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

impl From<argon2::password_hash::Error> for InternalError {
    fn from(err: argon2::password_hash::Error) -> Self {
        InternalError::PasswordHash(err.to_string())
    }
}
