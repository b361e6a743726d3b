//! Session and token authority.
//!
//! A bearer token is accepted only if, in order, its signature and expiry verify, it is
//! absent from the revocation store, and its subject still names an existing account.
//! Every failure surfaces to the client as the same `AuthError::Unauthorized`; the
//! specific cause is logged at debug level.

pub mod password;
pub mod revocation;
pub mod token;

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::account::AccountRepository,
    error::{auth::AuthError, AppError},
    model::account::Account,
    service::auth::{
        revocation::RevocationStore,
        token::{Claims, IssuedToken, TokenAuthority},
    },
    state::ServiceSettings,
    util::timeout::bounded,
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenAuthority,
    revocations: &'a dyn RevocationStore,
    settings: ServiceSettings,
}

impl<'a> AuthService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        tokens: &'a TokenAuthority,
        revocations: &'a dyn RevocationStore,
        settings: ServiceSettings,
    ) -> Self {
        Self {
            db,
            tokens,
            revocations,
            settings,
        }
    }

    /// Checks credentials and issues a new access token.
    ///
    /// # Returns
    /// - `Ok(IssuedToken)` - Signed token for the account
    /// - `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    pub async fn login(&self, email: &str, password: &str) -> Result<IssuedToken, AppError> {
        let email = email.trim().to_lowercase();
        let repo = AccountRepository::new(self.db);

        let account = bounded(self.settings.store_timeout, async {
            Ok(repo.find_by_email(&email).await?)
        })
        .await?;

        let Some(account) = account else {
            tracing::debug!("Login rejected: no account for {}", email);
            return Err(AuthError::InvalidCredentials.into());
        };

        if !password::verify(password.to_string(), account.password_hash.clone()).await? {
            tracing::debug!("Login rejected: wrong password for account {}", account.id);
            return Err(AuthError::InvalidCredentials.into());
        }

        let issued = self.tokens.issue(account.id)?;
        tracing::info!("Account {} logged in", account.id);

        Ok(issued)
    }

    /// Resolves a bearer token to the account it was issued for.
    pub async fn authenticate(&self, token: &str) -> Result<Account, AppError> {
        let (account, _) = self.validate(token).await?;
        Ok(account)
    }

    /// Revokes a valid token for the remainder of its lifetime.
    ///
    /// # Returns
    /// - `Ok(Account)` - The account that owned the token
    /// - `Err(AuthError::Unauthorized)` - Token was already invalid
    pub async fn logout(&self, token: &str) -> Result<Account, AppError> {
        let (account, claims) = self.validate(token).await?;

        if let Some(ttl) = claims.remaining_lifetime(Utc::now()) {
            bounded(
                self.settings.store_timeout,
                self.revocations.revoke(token, ttl),
            )
            .await?;
        }

        tracing::info!("Account {} logged out", account.id);

        Ok(account)
    }

    async fn validate(&self, token: &str) -> Result<(Account, Claims), AppError> {
        let claims = match self.tokens.verify(token) {
            Ok(claims) => claims,
            Err(e) => {
                tracing::debug!("Token rejected: {}", e);
                return Err(AuthError::Unauthorized.into());
            }
        };

        let revoked = bounded(
            self.settings.store_timeout,
            self.revocations.is_revoked(token),
        )
        .await?;
        if revoked {
            tracing::debug!("Token rejected: revoked (jti {})", claims.jti);
            return Err(AuthError::Unauthorized.into());
        }

        let Some(account_id) = claims.account_id() else {
            tracing::debug!("Token rejected: malformed subject '{}'", claims.sub);
            return Err(AuthError::Unauthorized.into());
        };

        let repo = AccountRepository::new(self.db);
        let account = bounded(self.settings.store_timeout, async {
            Ok(repo.find_by_id(account_id).await?)
        })
        .await?;

        match account {
            Some(account) => Ok((account, claims)),
            None => {
                tracing::debug!("Token rejected: account {} no longer exists", account_id);
                Err(AuthError::Unauthorized.into())
            }
        }
    }
}
