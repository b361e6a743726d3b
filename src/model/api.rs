use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct MessageDto {
    pub message: String,
}

/// Largest page any list endpoint returns; larger `limit` values are clamped.
pub const MAX_PAGE_LIMIT: u64 = 100;

/// Offset pagination used by every list endpoint.
#[derive(Deserialize, Debug, Clone, Copy, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SkipLimitQuery {
    #[serde(default)]
    pub skip: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
}

impl SkipLimitQuery {
    /// Returns `(skip, limit)` with `limit` capped at `MAX_PAGE_LIMIT`.
    ///
    /// `None` when `skip` does not fit the signed 64-bit offset the store binds.
    pub fn bounds(&self) -> Option<(u64, u64)> {
        if self.skip > i64::MAX as u64 {
            return None;
        }

        Some((self.skip, self.limit.min(MAX_PAGE_LIMIT)))
    }
}

fn default_limit() -> u64 {
    10
}

impl Default for SkipLimitQuery {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: default_limit(),
        }
    }
}
