use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto, SkipLimitQuery},
        bid::{BidDto, PlaceBidQuery, UpdateBidDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            bearer::BearerToken,
        },
        model::bid::UpdateBidParams,
        service::bid::BidService,
        state::AppState,
    },
};

/// Tag for grouping bid endpoints in OpenAPI documentation
pub static BID_TAG: &str = "bid";

/// Place a bid on a collection for the calling account.
///
/// Placement debits one unit from the caller's balance and succeeds only while the
/// collection holds fewer than 100 bids.
///
/// # Returns
/// - `201 Created` - Bid recorded and balance debited
/// - `402 Payment Required` - Balance is zero
/// - `404 Not Found` - Collection does not exist
/// - `409 Conflict` - Collection is full (or closed, when the window is enforced)
/// - `503 Service Unavailable` - The store did not answer in time
#[utoipa::path(
    post,
    path = "/bids/",
    tag = BID_TAG,
    security(("bearer" = [])),
    params(PlaceBidQuery),
    responses(
        (status = 201, description = "Bid placed", body = BidDto),
        (status = 401, description = "Could not validate credentials", body = ErrorDto),
        (status = 402, description = "Insufficient funds", body = ErrorDto),
        (status = 404, description = "Collection not found", body = ErrorDto),
        (status = 409, description = "Collection full or closed", body = ErrorDto),
        (status = 503, description = "Store unavailable", body = ErrorDto)
    ),
)]
pub async fn place_bid(
    State(state): State<AppState>,
    token: BearerToken,
    Query(query): Query<PlaceBidQuery>,
) -> Result<impl IntoResponse, AppError> {
    let account = AuthGuard::new(&state, &token).require(&[]).await?;

    let bid = BidService::new(&state.db, &state.locks, state.settings)
        .place(query.game_id, account.id)
        .await?;

    Ok((StatusCode::CREATED, Json(bid.into_dto())))
}

#[utoipa::path(
    get,
    path = "/bids/",
    tag = BID_TAG,
    params(SkipLimitQuery),
    responses(
        (status = 200, description = "Bids", body = Vec<BidDto>)
    ),
)]
pub async fn get_bids(
    State(state): State<AppState>,
    Query(page): Query<SkipLimitQuery>,
) -> Result<impl IntoResponse, AppError> {
    let (skip, limit) = super::page(page)?;

    let bids = BidService::new(&state.db, &state.locks, state.settings)
        .get_all(skip, limit)
        .await?;

    Ok((
        StatusCode::OK,
        Json(bids.into_iter().map(|b| b.into_dto()).collect::<Vec<_>>()),
    ))
}

#[utoipa::path(
    get,
    path = "/bids/{id}",
    tag = BID_TAG,
    params(("id" = i32, Path, description = "Bid ID")),
    responses(
        (status = 200, description = "Bid", body = BidDto),
        (status = 404, description = "Bid not found", body = ErrorDto)
    ),
)]
pub async fn get_bid(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let bid = BidService::new(&state.db, &state.locks, state.settings)
        .get_by_id(id)
        .await?;

    Ok((StatusCode::OK, Json(bid.into_dto())))
}

/// Move a bid to another collection.
///
/// Only `game_id` may be changed; bodies with any other field are rejected before
/// reaching the service. The target collection must exist and have room.
///
/// # Access Control
/// - `Admin` - Only superusers can correct bids
#[utoipa::path(
    put,
    path = "/bids/{id}",
    tag = BID_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Bid ID")),
    request_body = UpdateBidDto,
    responses(
        (status = 200, description = "Bid updated", body = BidDto),
        (status = 401, description = "Could not validate credentials", body = ErrorDto),
        (status = 403, description = "Caller is not a superuser", body = ErrorDto),
        (status = 404, description = "Bid or collection not found", body = ErrorDto),
        (status = 409, description = "Target collection full", body = ErrorDto),
        (status = 422, description = "Unknown or malformed field")
    ),
)]
pub async fn update_bid(
    State(state): State<AppState>,
    token: BearerToken,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateBidDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state, &token)
        .require(&[Permission::Admin])
        .await?;

    let bid = BidService::new(&state.db, &state.locks, state.settings)
        .update(id, UpdateBidParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(bid.into_dto())))
}

/// Delete a bid.
///
/// # Access Control
/// - The account that placed the bid or a superuser
#[utoipa::path(
    delete,
    path = "/bids/{id}",
    tag = BID_TAG,
    security(("bearer" = [])),
    params(("id" = i32, Path, description = "Bid ID")),
    responses(
        (status = 200, description = "Bid deleted", body = MessageDto),
        (status = 401, description = "Could not validate credentials", body = ErrorDto),
        (status = 403, description = "Not the bid owner", body = ErrorDto),
        (status = 404, description = "Bid not found", body = ErrorDto)
    ),
)]
pub async fn delete_bid(
    State(state): State<AppState>,
    token: BearerToken,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let account = AuthGuard::new(&state, &token).require(&[]).await?;

    BidService::new(&state.db, &state.locks, state.settings)
        .delete(id, &account)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Bid deleted successfully".to_string(),
        }),
    ))
}
