//! Bearer token extraction.

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::server::error::{auth::AuthError, AppError};

/// Raw bearer token taken from the `Authorization: Bearer <token>` header.
///
/// Extraction fails with `AuthError::Unauthorized` when the header is missing, is not
/// valid UTF-8, uses another scheme, or carries an empty token. The token itself is
/// not verified here; see `AuthGuard`.
#[derive(Debug, Clone)]
pub struct BearerToken(pub String);

impl BearerToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn parse(value: &str) -> Option<Self> {
        let (scheme, token) = value.trim().split_once(' ')?;
        let token = token.trim();

        if scheme.eq_ignore_ascii_case("bearer") && !token.is_empty() {
            Some(Self(token.to_string()))
        } else {
            None
        }
    }
}

impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(BearerToken::parse)
            .ok_or_else(|| {
                tracing::debug!("Request without usable bearer token");
                AuthError::Unauthorized.into()
            })
    }
}
