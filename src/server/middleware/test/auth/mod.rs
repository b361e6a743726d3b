use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{
        auth::{AuthGuard, Permission},
        bearer::BearerToken,
    },
    state::AppState,
};
use test_utils::{builder::TestBuilder, factory};

mod require;
