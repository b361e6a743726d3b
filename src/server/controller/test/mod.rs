use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use sea_orm::{DatabaseConnection, DbErr, EntityTrait};
use serde_json::Value;
use test_utils::{builder::TestBuilder, context::TestContext, factory};
use tower::ServiceExt;

use crate::server::{router::router, state::AppState};


async fn setup() -> (TestContext, AppState) {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let state = AppState::for_test(test.db.as_ref().unwrap().clone());

    (test, state)
}

fn app(state: &AppState) -> Router {
    router().with_state(state.clone())
}

fn bearer(state: &AppState, account_id: i32) -> String {
    format!("Bearer {}", state.tokens.issue(account_id).unwrap().token)
}

/// Sends `request` through a fresh router and returns the status and decoded JSON body.
///
/// Bodies that are not JSON (such as extractor rejections) decode to `Value::Null`.
async fn send(state: &AppState, request: Request<Body>) -> (StatusCode, Value) {
    let response = app(state).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

fn request(method: Method, uri: &str, auth: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(auth) = auth {
        builder = builder.header(header::AUTHORIZATION, auth);
    }

    builder.body(Body::empty()).unwrap()
}

fn json_request(method: Method, uri: &str, auth: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, auth)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn form_request(uri: &str, auth: Option<&str>, body: &str) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(auth) = auth {
        builder = builder.header(header::AUTHORIZATION, auth);
    }

    builder.body(Body::from(body.to_string())).unwrap()
}

async fn balance_of(db: &DatabaseConnection, account_id: i32) -> Result<i64, DbErr> {
    Ok(entity::prelude::Account::find_by_id(account_id)
        .one(db)
        .await?
        .map(|a| a.balance)
        .unwrap_or_default())
}
