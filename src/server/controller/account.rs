use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        account::{AccountDto, ChangeEmailQuery, ChangePasswordDto, TopUpQuery},
        api::{ErrorDto, SkipLimitQuery},
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            bearer::BearerToken,
        },
        service::account::AccountService,
        state::AppState,
    },
};

/// Tag for grouping account endpoints in OpenAPI documentation
pub static ACCOUNT_TAG: &str = "account";

/// List accounts.
///
/// # Access Control
/// - `Admin` - Only superusers can list accounts
#[utoipa::path(
    get,
    path = "/users/",
    tag = ACCOUNT_TAG,
    security(("bearer" = [])),
    params(SkipLimitQuery),
    responses(
        (status = 200, description = "Accounts", body = Vec<AccountDto>),
        (status = 401, description = "Could not validate credentials", body = ErrorDto),
        (status = 403, description = "Caller is not a superuser", body = ErrorDto)
    ),
)]
pub async fn get_accounts(
    State(state): State<AppState>,
    token: BearerToken,
    Query(page): Query<SkipLimitQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state, &token)
        .require(&[Permission::Admin])
        .await?;

    let (skip, limit) = super::page(page)?;

    let accounts = AccountService::new(&state.db, &state.locks, state.settings)
        .get_all(skip, limit)
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            accounts
                .into_iter()
                .map(|a| a.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Get an account by ID.
///
/// # Access Control
/// - The account itself or a superuser
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = ACCOUNT_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Account ID")),
    responses(
        (status = 200, description = "Account", body = AccountDto),
        (status = 401, description = "Could not validate credentials", body = ErrorDto),
        (status = 403, description = "Not the account owner", body = ErrorDto),
        (status = 404, description = "Account not found", body = ErrorDto)
    ),
)]
pub async fn get_account(
    State(state): State<AppState>,
    token: BearerToken,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state, &token)
        .require(&[Permission::SelfOrAdmin(id)])
        .await?;

    let account = AccountService::new(&state.db, &state.locks, state.settings)
        .get_by_id(id)
        .await?;

    Ok((StatusCode::OK, Json(account.into_dto())))
}

/// Get an account by email.
///
/// The lookup runs before the ownership check, so a caller learns only that an email
/// exists, not its details, when it belongs to someone else.
#[utoipa::path(
    get,
    path = "/users/email/{email}",
    tag = ACCOUNT_TAG,
    security(("bearer" = [])),
    params(("email" = String, Path, description = "Account email")),
    responses(
        (status = 200, description = "Account", body = AccountDto),
        (status = 401, description = "Could not validate credentials", body = ErrorDto),
        (status = 403, description = "Not the account owner", body = ErrorDto),
        (status = 404, description = "Account not found", body = ErrorDto)
    ),
)]
pub async fn get_account_by_email(
    State(state): State<AppState>,
    token: BearerToken,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&state, &token);
    let _ = guard.require(&[]).await?;

    let account = AccountService::new(&state.db, &state.locks, state.settings)
        .get_by_email(&email)
        .await?;

    let _ = guard.require(&[Permission::SelfOrAdmin(account.id)]).await?;

    Ok((StatusCode::OK, Json(account.into_dto())))
}

/// Change an account's email.
#[utoipa::path(
    put,
    path = "/users/{id}/change-email",
    tag = ACCOUNT_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Account ID"), ChangeEmailQuery),
    responses(
        (status = 200, description = "Email changed", body = AccountDto),
        (status = 400, description = "Email invalid or already registered", body = ErrorDto),
        (status = 401, description = "Could not validate credentials", body = ErrorDto),
        (status = 403, description = "Not the account owner", body = ErrorDto),
        (status = 404, description = "Account not found", body = ErrorDto)
    ),
)]
pub async fn change_email(
    State(state): State<AppState>,
    token: BearerToken,
    Path(id): Path<i32>,
    Query(query): Query<ChangeEmailQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state, &token)
        .require(&[Permission::SelfOrAdmin(id)])
        .await?;

    let account = AccountService::new(&state.db, &state.locks, state.settings)
        .change_email(id, &query.new_email)
        .await?;

    Ok((StatusCode::OK, Json(account.into_dto())))
}

/// Change an account's password.
#[utoipa::path(
    put,
    path = "/users/{id}/change-password",
    tag = ACCOUNT_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Account ID")),
    request_body = ChangePasswordDto,
    responses(
        (status = 200, description = "Password changed", body = AccountDto),
        (status = 400, description = "Empty password", body = ErrorDto),
        (status = 401, description = "Could not validate credentials", body = ErrorDto),
        (status = 403, description = "Not the account owner", body = ErrorDto),
        (status = 404, description = "Account not found", body = ErrorDto)
    ),
)]
pub async fn change_password(
    State(state): State<AppState>,
    token: BearerToken,
    Path(id): Path<i32>,
    Json(payload): Json<ChangePasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state, &token)
        .require(&[Permission::SelfOrAdmin(id)])
        .await?;

    let account = AccountService::new(&state.db, &state.locks, state.settings)
        .change_password(id, payload.new_password)
        .await?;

    Ok((StatusCode::OK, Json(account.into_dto())))
}

/// Credit the caller's own balance.
///
/// # Access Control
/// - Only the account itself; superusers cannot top up other accounts
#[utoipa::path(
    post,
    path = "/users/{id}/top-up",
    tag = ACCOUNT_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Account ID"), TopUpQuery),
    responses(
        (status = 200, description = "Balance credited", body = AccountDto),
        (status = 400, description = "Amount must be positive", body = ErrorDto),
        (status = 401, description = "Could not validate credentials", body = ErrorDto),
        (status = 403, description = "Not the account owner", body = ErrorDto),
        (status = 404, description = "Account not found", body = ErrorDto)
    ),
)]
pub async fn top_up(
    State(state): State<AppState>,
    token: BearerToken,
    Path(id): Path<i32>,
    Query(query): Query<TopUpQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state, &token)
        .require(&[Permission::SelfOnly(id)])
        .await?;

    let account = AccountService::new(&state.db, &state.locks, state.settings)
        .top_up(id, query.amount)
        .await?;

    Ok((StatusCode::OK, Json(account.into_dto())))
}

/// Delete an account and all of its bids.
///
/// # Access Control
/// - `Admin` - Only superusers can delete accounts
#[utoipa::path(
    delete,
    path = "/users/{id}/delete",
    tag = ACCOUNT_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Account ID")),
    responses(
        (status = 200, description = "Deleted account", body = AccountDto),
        (status = 401, description = "Could not validate credentials", body = ErrorDto),
        (status = 403, description = "Caller is not a superuser", body = ErrorDto),
        (status = 404, description = "Account not found", body = ErrorDto)
    ),
)]
pub async fn delete_account(
    State(state): State<AppState>,
    token: BearerToken,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state, &token)
        .require(&[Permission::Admin])
        .await?;

    let account = AccountService::new(&state.db, &state.locks, state.settings)
        .delete(id)
        .await?;

    Ok((StatusCode::OK, Json(account.into_dto())))
}
