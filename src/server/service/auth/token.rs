//! JWT access token issuance and validation.

use chrono::{DateTime, Utc};
use jsonwebtoken::{errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::error::internal::InternalError;

/// Claims carried by every access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Unique token ID, so two tokens issued in the same second still differ.
    pub jti: String,
    /// Account ID as a decimal string.
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn account_id(&self) -> Option<i32> {
        self.sub.parse().ok()
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }

    /// Time left before `exp` as seen at `now`, or `None` once expired.
    pub fn remaining_lifetime(&self, now: DateTime<Utc>) -> Option<std::time::Duration> {
        let remaining = self.expires_at()? - now;
        remaining.to_std().ok().filter(|d| !d.is_zero())
    }
}

/// A freshly signed token and the moment it stops being valid.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Signs and verifies access tokens with a shared HMAC secret.
#[derive(Clone)]
pub struct TokenAuthority {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    ttl: chrono::Duration,
}

impl TokenAuthority {
    pub fn new(secret: &[u8], algorithm: Algorithm, ttl: chrono::Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm,
            ttl,
        }
    }

    /// Issue an access token for the given account.
    pub fn issue(&self, account_id: i32) -> Result<IssuedToken, InternalError> {
        self.issue_at(account_id, Utc::now())
    }

    fn issue_at(&self, account_id: i32, now: DateTime<Utc>) -> Result<IssuedToken, InternalError> {
        let expires_at = now + self.ttl;

        let claims = Claims {
            jti: uuid::Uuid::new_v4().to_string(),
            sub: account_id.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token =
            jsonwebtoken::encode(&Header::new(self.algorithm), &claims, &self.encoding_key)?;

        Ok(IssuedToken { token, expires_at })
    }

    /// Validate signature, algorithm and expiry, returning the claims.
    ///
    /// Expiry is checked with zero leeway and a token is dead from the instant `exp`
    /// is reached, matching the lifetime given to its revocation entry.
    pub fn verify(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &validation)?;

        // The library accepts `exp == now`; treat that second as expired.
        if data.claims.exp <= Utc::now().timestamp() {
            return Err(ErrorKind::ExpiredSignature.into());
        }

        Ok(data.claims)
    }
}
