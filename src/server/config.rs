//! Environment-based application configuration.

use std::{str::FromStr, time::Duration};

use jsonwebtoken::Algorithm;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8000";
const DEFAULT_TOKEN_EXPIRE_MINUTES: i64 = 30;
const DEFAULT_STORE_TIMEOUT_SECS: u64 = 5;

/// Which backend holds revoked tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevocationBackend {
    Memory,
    Database,
}

impl FromStr for RevocationBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "database" | "db" => Ok(Self::Database),
            other => Err(format!("expected `memory` or `database`, got `{}`", other)),
        }
    }
}

/// Credentials of the superuser created at startup when none exists yet.
#[derive(Debug, Clone)]
pub struct AdminBootstrap {
    pub email: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    pub jwt_secret: String,
    pub jwt_algorithm: Algorithm,
    pub access_token_expire_minutes: i64,

    pub starting_balance: i64,
    pub store_timeout: Duration,
    pub revocation_backend: RevocationBackend,
    pub enforce_collection_window: bool,

    pub admin: Option<AdminBootstrap>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let jwt_algorithm = match optional("JWT_ALGORITHM").as_deref() {
            None | Some("HS256") => Algorithm::HS256,
            Some("HS384") => Algorithm::HS384,
            Some("HS512") => Algorithm::HS512,
            Some(other) => {
                return Err(ConfigError::InvalidEnvVar {
                    name: "JWT_ALGORITHM".to_string(),
                    reason: format!("unsupported algorithm `{}`, use HS256/HS384/HS512", other),
                }
                .into())
            }
        };

        let access_token_expire_minutes =
            parsed("ACCESS_TOKEN_EXPIRE_MINUTES", DEFAULT_TOKEN_EXPIRE_MINUTES)?;
        if access_token_expire_minutes <= 0 {
            return Err(ConfigError::InvalidEnvVar {
                name: "ACCESS_TOKEN_EXPIRE_MINUTES".to_string(),
                reason: "must be positive".to_string(),
            }
            .into());
        }

        let starting_balance: i64 = parsed("STARTING_BALANCE", 0)?;
        if starting_balance < 0 {
            return Err(ConfigError::InvalidEnvVar {
                name: "STARTING_BALANCE".to_string(),
                reason: "must not be negative".to_string(),
            }
            .into());
        }

        let admin = match (optional("ADMIN_USER_EMAIL"), optional("ADMIN_USER_PASSWORD")) {
            (Some(email), Some(password)) => Some(AdminBootstrap {
                email,
                password,
                first_name: optional("ADMIN_USER_FIRST_NAME"),
                last_name: optional("ADMIN_USER_LAST_NAME"),
            }),
            _ => None,
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            bind_address: optional("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            jwt_secret: required("JWT_SECRET")?,
            jwt_algorithm,
            access_token_expire_minutes,
            starting_balance,
            store_timeout: Duration::from_secs(parsed(
                "STORE_TIMEOUT_SECS",
                DEFAULT_STORE_TIMEOUT_SECS,
            )?),
            revocation_backend: parsed("REVOCATION_STORE", RevocationBackend::Memory)?,
            enforce_collection_window: parsed("ENFORCE_COLLECTION_WINDOW", false)?,
            admin,
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Reads a variable, treating an empty value as unset.
fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parsed<T>(name: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match optional(name) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                reason: e.to_string(),
            }),
    }
}
