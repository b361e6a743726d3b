//! Request authentication and authorization.
//!
//! - `bearer` - Extracts the bearer token from the `Authorization` header
//! - `auth` - `AuthGuard` resolving the token to an account and checking permissions

pub mod auth;
pub mod bearer;

#[cfg(test)]
mod test;
