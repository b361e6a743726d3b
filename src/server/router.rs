use axum::{routing::get, Json, Router};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::server::{
    controller::{account, auth, bid, collection},
    state::AppState,
};

/// Path serving the generated OpenAPI document.
pub const OPENAPI_PATH: &str = "/api/docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(title = "Bidboard API", description = "Account ledger, collections and capped bidding"),
    modifiers(&BearerSecurity),
    tags(
        (name = "auth", description = "Login, sign-up and logout"),
        (name = "account", description = "Account management and balance top-up"),
        (name = "collection", description = "Collection lifecycle"),
        (name = "bid", description = "Bid placement and correction")
    )
)]
pub struct ApiDoc;

/// Registers the `bearer` security scheme referenced by protected endpoints.
struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);

        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::login))
        .routes(routes!(auth::sign_up))
        .routes(routes!(auth::logout))
        .routes(routes!(account::get_accounts))
        .routes(routes!(account::get_account))
        .routes(routes!(account::get_account_by_email))
        .routes(routes!(account::change_email))
        .routes(routes!(account::change_password))
        .routes(routes!(account::top_up))
        .routes(routes!(account::delete_account))
        .routes(routes!(collection::get_collections))
        .routes(routes!(collection::get_collection))
        .routes(routes!(collection::create_collection))
        .routes(routes!(collection::toggle_collection_status))
        .routes(routes!(collection::update_collection_expiry))
        .routes(routes!(collection::delete_collection))
        .routes(routes!(collection::get_user_collections))
        .routes(routes!(bid::get_bids, bid::place_bid))
        .routes(routes!(bid::get_bid, bid::update_bid, bid::delete_bid))
        .split_for_parts();

    router.route(
        OPENAPI_PATH,
        get(move || {
            let api = api.clone();
            async move { Json(api) }
        }),
    )
}
