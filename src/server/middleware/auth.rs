use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::bearer::BearerToken,
    model::account::Account,
    service::auth::AuthService,
    state::AppState,
};

pub enum Permission {
    /// Caller must be a superuser.
    Admin,
    /// Caller must be the given account or a superuser.
    SelfOrAdmin(i32),
    /// Caller must be the given account; superusers get no override.
    SelfOnly(i32),
}

pub struct AuthGuard<'a> {
    state: &'a AppState,
    token: &'a BearerToken,
}

impl<'a> AuthGuard<'a> {
    pub fn new(state: &'a AppState, token: &'a BearerToken) -> Self {
        Self { state, token }
    }

    /// Authenticates the bearer token and checks every permission in order.
    ///
    /// # Returns
    /// - `Ok(Account)` - The authenticated caller
    /// - `Err(AuthError::Unauthorized)` - Token invalid, expired, revoked, or orphaned
    /// - `Err(AuthError::AccessDenied)` - A permission check failed
    pub async fn require(&self, permissions: &[Permission]) -> Result<Account, AppError> {
        let account = AuthService::new(
            &self.state.db,
            &self.state.tokens,
            self.state.revocations.as_ref(),
            self.state.settings,
        )
        .authenticate(self.token.as_str())
        .await?;

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !account.is_superuser {
                        return Err(AuthError::AccessDenied(
                            account.id,
                            "Account attempted an admin-only action without superuser status"
                                .to_string(),
                        )
                        .into());
                    }
                }
                Permission::SelfOrAdmin(target) => {
                    if account.id != *target && !account.is_superuser {
                        return Err(AuthError::AccessDenied(
                            account.id,
                            format!("Account attempted to access account {}", target),
                        )
                        .into());
                    }
                }
                Permission::SelfOnly(target) => {
                    if account.id != *target {
                        return Err(AuthError::AccessDenied(
                            account.id,
                            format!("Account attempted an owner-only action on account {}", target),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(account)
    }
}
