//! HTTP request handlers.
//!
//! Controllers authenticate the caller through `AuthGuard`, convert DTOs into
//! parameter types, call the service layer and convert the result back into a DTO.

pub mod account;
pub mod auth;
pub mod bid;
pub mod collection;

use crate::{model::api::SkipLimitQuery, server::error::AppError};

/// Validates pagination before it reaches a repository.
fn page(query: SkipLimitQuery) -> Result<(u64, u64), AppError> {
    query
        .bounds()
        .ok_or_else(|| AppError::BadRequest("skip is out of range".to_string()))
}

#[cfg(test)]
mod test;
