use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Form, Json,
};

use crate::{
    model::{
        api::{ErrorDto, SkipLimitQuery},
        collection::{CollectionDto, CreateCollectionFormDto, UpdateExpiryQuery, UserCollectionDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            bearer::BearerToken,
        },
        model::collection::CreateCollectionParams,
        service::collection::CollectionService,
        state::AppState,
    },
};

/// Tag for grouping collection endpoints in OpenAPI documentation
pub static COLLECTION_TAG: &str = "collection";

/// List collections with offset pagination.
#[utoipa::path(
    get,
    path = "/collections/",
    tag = COLLECTION_TAG,
    params(SkipLimitQuery),
    responses(
        (status = 200, description = "Collections", body = Vec<CollectionDto>),
        (status = 503, description = "Store unavailable", body = ErrorDto)
    ),
)]
pub async fn get_collections(
    State(state): State<AppState>,
    Query(page): Query<SkipLimitQuery>,
) -> Result<impl IntoResponse, AppError> {
    let (skip, limit) = super::page(page)?;

    let collections = CollectionService::new(&state.db, &state.locks, state.settings)
        .get_all(skip, limit)
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            collections
                .into_iter()
                .map(|c| c.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

#[utoipa::path(
    get,
    path = "/collections/{game_id}",
    tag = COLLECTION_TAG,
    params(("game_id" = i32, Path, description = "Collection ID")),
    responses(
        (status = 200, description = "Collection", body = CollectionDto),
        (status = 404, description = "Collection not found", body = ErrorDto)
    ),
)]
pub async fn get_collection(
    State(state): State<AppState>,
    Path(game_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let collection = CollectionService::new(&state.db, &state.locks, state.settings)
        .get_by_id(game_id)
        .await?;

    Ok((StatusCode::OK, Json(collection.into_dto())))
}

/// Create a collection.
///
/// # Access Control
/// - `Admin` - Only superusers can create collections
///
/// # Returns
/// - `201 Created` - Collection created, inactive unless `active_game` was set
/// - `400 Bad Request` - Empty name
#[utoipa::path(
    post,
    path = "/add-game",
    tag = COLLECTION_TAG,
    security(("bearer" = [])),
    request_body(content = CreateCollectionFormDto, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 201, description = "Collection created", body = CollectionDto),
        (status = 400, description = "Invalid collection name", body = ErrorDto),
        (status = 401, description = "Could not validate credentials", body = ErrorDto),
        (status = 403, description = "Caller is not a superuser", body = ErrorDto)
    ),
)]
pub async fn create_collection(
    State(state): State<AppState>,
    token: BearerToken,
    Form(form): Form<CreateCollectionFormDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state, &token)
        .require(&[Permission::Admin])
        .await?;

    let collection = CollectionService::new(&state.db, &state.locks, state.settings)
        .create(CreateCollectionParams::from_dto(form))
        .await?;

    Ok((StatusCode::CREATED, Json(collection.into_dto())))
}

/// Flip a collection between active and inactive.
#[utoipa::path(
    post,
    path = "/activate-game/{id}",
    tag = COLLECTION_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Collection ID")),
    responses(
        (status = 200, description = "Status toggled", body = CollectionDto),
        (status = 401, description = "Could not validate credentials", body = ErrorDto),
        (status = 403, description = "Caller is not a superuser", body = ErrorDto),
        (status = 404, description = "Collection not found", body = ErrorDto)
    ),
)]
pub async fn toggle_collection_status(
    State(state): State<AppState>,
    token: BearerToken,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state, &token)
        .require(&[Permission::Admin])
        .await?;

    let collection = CollectionService::new(&state.db, &state.locks, state.settings)
        .toggle_status(id)
        .await?;

    Ok((StatusCode::OK, Json(collection.into_dto())))
}

#[utoipa::path(
    post,
    path = "/update-expiry/{id}",
    tag = COLLECTION_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Collection ID"), UpdateExpiryQuery),
    responses(
        (status = 200, description = "Expiry updated", body = CollectionDto),
        (status = 401, description = "Could not validate credentials", body = ErrorDto),
        (status = 403, description = "Caller is not a superuser", body = ErrorDto),
        (status = 404, description = "Collection not found", body = ErrorDto)
    ),
)]
pub async fn update_collection_expiry(
    State(state): State<AppState>,
    token: BearerToken,
    Path(id): Path<i32>,
    Query(query): Query<UpdateExpiryQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state, &token)
        .require(&[Permission::Admin])
        .await?;

    let collection = CollectionService::new(&state.db, &state.locks, state.settings)
        .set_expiry(id, query.new_expiry)
        .await?;

    Ok((StatusCode::OK, Json(collection.into_dto())))
}

/// Delete a collection together with its bids.
///
/// # Access Control
/// - `Admin` - A non-superuser receives 403 and the collection is left untouched
#[utoipa::path(
    delete,
    path = "/delete-game/{id}",
    tag = COLLECTION_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Collection ID")),
    responses(
        (status = 200, description = "Deleted collection", body = CollectionDto),
        (status = 401, description = "Could not validate credentials", body = ErrorDto),
        (status = 403, description = "Caller is not a superuser", body = ErrorDto),
        (status = 404, description = "Collection not found", body = ErrorDto)
    ),
)]
pub async fn delete_collection(
    State(state): State<AppState>,
    token: BearerToken,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state, &token)
        .require(&[Permission::Admin])
        .await?;

    let collection = CollectionService::new(&state.db, &state.locks, state.settings)
        .delete(id)
        .await?;

    Ok((StatusCode::OK, Json(collection.into_dto())))
}

/// List active collections from the caller's point of view.
///
/// Each entry carries whether the caller already holds a bid, how many bids the
/// collection has, and the days and hours left before it expires.
#[utoipa::path(
    get,
    path = "/user-collections/",
    tag = COLLECTION_TAG,
    security(("bearer" = [])),
    params(SkipLimitQuery),
    responses(
        (status = 200, description = "Active collections", body = Vec<UserCollectionDto>),
        (status = 401, description = "Could not validate credentials", body = ErrorDto)
    ),
)]
pub async fn get_user_collections(
    State(state): State<AppState>,
    token: BearerToken,
    Query(page): Query<SkipLimitQuery>,
) -> Result<impl IntoResponse, AppError> {
    let account = AuthGuard::new(&state, &token).require(&[]).await?;

    let (skip, limit) = super::page(page)?;

    let collections = CollectionService::new(&state.db, &state.locks, state.settings)
        .get_user_collections(account.id, skip, limit)
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            collections
                .into_iter()
                .map(|c| c.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}
