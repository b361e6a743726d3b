use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

use crate::server::data::revoked_token::RevokedTokenRepository;

mod delete_expired;
mod is_active;
mod upsert;
