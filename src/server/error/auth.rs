use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Bearer token missing, malformed, badly signed, expired, revoked, or naming an
    /// account that no longer exists.
    ///
    /// The cause is logged at debug level where it is detected; the client always sees
    /// the same 401 response.
    #[error("Could not validate credentials")]
    Unauthorized,

    /// Login attempted with an unknown email or a wrong password.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Authenticated account lacks the permission required by the operation.
    ///
    /// # Fields
    /// - Account ID of the caller
    /// - Reason the access was denied, logged but not returned to the client
    #[error("Account {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `Unauthorized` / `InvalidCredentials` → 401 with a `WWW-Authenticate: Bearer` header
/// - `AccessDenied` → 403 with a generic message
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::Unauthorized | Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                [(header::WWW_AUTHENTICATE, "Bearer")],
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(account_id, reason) => {
                tracing::debug!("Access denied for account {}: {}", account_id, reason);

                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "Not authorized to perform this action".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
