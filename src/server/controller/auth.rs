use axum::{extract::State, http::StatusCode, response::IntoResponse, Form, Json};

use crate::{
    model::{
        account::{AccountDto, SignUpDto},
        api::{ErrorDto, MessageDto},
        auth::{LoginFormDto, TokenDto},
    },
    server::{
        error::AppError,
        middleware::bearer::BearerToken,
        model::account::SignUpParams,
        service::{account::AccountService, auth::AuthService},
        state::AppState,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Exchange email and password for a bearer token.
///
/// # Returns
/// - `200 OK` - Token issued
/// - `401 Unauthorized` - Unknown email or wrong password
#[utoipa::path(
    post,
    path = "/login",
    tag = AUTH_TAG,
    request_body(content = LoginFormDto, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Access token issued", body = TokenDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginFormDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(
        &state.db,
        &state.tokens,
        state.revocations.as_ref(),
        state.settings,
    );

    let issued = service.login(&form.username, &form.password).await?;

    Ok((
        StatusCode::OK,
        Json(TokenDto {
            access_token: issued.token,
            token_type: "bearer".to_string(),
            expires_at: issued.expires_at,
        }),
    ))
}

/// Register a new account.
///
/// The account starts with the configured starting balance and is never a superuser.
///
/// # Returns
/// - `201 Created` - Account created
/// - `400 Bad Request` - Email already registered or invalid
#[utoipa::path(
    post,
    path = "/sign-up",
    tag = AUTH_TAG,
    request_body = SignUpDto,
    responses(
        (status = 201, description = "Account created", body = AccountDto),
        (status = 400, description = "Email already registered or invalid input", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn sign_up(
    State(state): State<AppState>,
    Json(payload): Json<SignUpDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AccountService::new(&state.db, &state.locks, state.settings);

    let account = service.sign_up(SignUpParams::from_dto(payload)).await?;

    Ok((StatusCode::CREATED, Json(account.into_dto())))
}

/// Revoke the presented bearer token for the rest of its lifetime.
///
/// # Returns
/// - `200 OK` - Token revoked
/// - `401 Unauthorized` - Token already invalid
#[utoipa::path(
    post,
    path = "/logout",
    tag = AUTH_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Logged out", body = MessageDto),
        (status = 401, description = "Could not validate credentials", body = ErrorDto)
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    token: BearerToken,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(
        &state.db,
        &state.tokens,
        state.revocations.as_ref(),
        state.settings,
    );

    service.logout(token.as_str()).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Successfully logged out".to_string(),
        }),
    ))
}
