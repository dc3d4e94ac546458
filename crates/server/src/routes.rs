pub mod admin;
pub mod auth;
pub mod items;
pub mod settings;
pub mod users;
pub mod wishlists;

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;

use crate::openapi::ApiDoc;
use auth::ServerState;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "Liveness", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router: public, authenticated and admin routes.
pub fn build_router(cors: CorsLayer, state: ServerState) -> Router {
    let public = Router::new()
        .route("/health", get(health))
        .route("/api/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout));

    // Any signed-in caller
    let api = Router::new()
        .route("/api/wishlists", get(wishlists::list_all).post(wishlists::create))
        .route("/api/wishlists/search", get(wishlists::search))
        .route(
            "/api/wishlists/:slug",
            get(wishlists::get_by_slug).put(wishlists::update).delete(wishlists::delete_by_slug),
        )
        .route("/api/wishlists/:slug/items", post(items::add))
        .route("/api/items", get(items::list))
        .route("/api/items/:id", put(items::update).delete(items::delete))
        .route("/api/users", get(users::list_all))
        .route("/api/users/register", post(users::register))
        .route("/api/users/category/:category", get(users::list_by_category))
        .route("/api/users/:id", delete(users::delete))
        .route("/api/settings/header", get(settings::get_header).put(settings::set_header))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::require_auth));

    // Layers run bottom-up: authenticate first, then check the role.
    let admin_routes = Router::new()
        .route("/api/admin/users", get(admin::list_users).post(admin::create_user))
        .route("/api/admin/users/:id", put(admin::update_user).delete(admin::delete_user))
        .route("/api/admin/wishlists", get(admin::list_wishlists).post(admin::create_wishlist))
        .route("/api/admin/wishlists/:slug", put(admin::update_wishlist))
        .route("/api/admin/wishlists/by-id/:id", delete(admin::delete_wishlist_by_id))
        .route_layer(middleware::from_fn(auth::require_admin))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::require_auth));

    public
        .merge(api)
        .merge(admin_routes)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
