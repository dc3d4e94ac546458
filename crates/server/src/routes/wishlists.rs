use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;

use service::wishlist::domain::{CreateWishlistInput, UpdateWishlistInput, WishlistDto};

use super::auth::ServerState;
use crate::errors::JsonApiError;
use crate::extract::{ApiJson, ApiPath, ApiQuery};

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub name: String,
}

#[utoipa::path(get, path = "/api/wishlists", tag = "wishlists", responses((status = 200, description = "All wishlists with items", body = [crate::openapi::WishlistDoc])))]
pub async fn list_all(State(state): State<ServerState>) -> Result<Json<Vec<WishlistDto>>, JsonApiError> {
    Ok(Json(state.wishlists.list_all().await?))
}

#[utoipa::path(get, path = "/api/wishlists/{slug}", tag = "wishlists", params(("slug" = String, Path, description = "Wishlist slug")), responses((status = 200, description = "Wishlist", body = crate::openapi::WishlistDoc), (status = 404, description = "Not found", body = crate::openapi::ErrorDoc)))]
pub async fn get_by_slug(
    State(state): State<ServerState>,
    ApiPath(slug): ApiPath<String>,
) -> Result<Json<WishlistDto>, JsonApiError> {
    Ok(Json(state.wishlists.get_by_slug(&slug).await?))
}

#[utoipa::path(get, path = "/api/wishlists/search", tag = "wishlists", params(("name" = String, Query, description = "Owner name fragment")), responses((status = 200, description = "Matching wishlists", body = [crate::openapi::WishlistDoc])))]
pub async fn search(
    State(state): State<ServerState>,
    ApiQuery(params): ApiQuery<SearchParams>,
) -> Result<Json<Vec<WishlistDto>>, JsonApiError> {
    Ok(Json(state.wishlists.search_by_owner_name(&params.name).await?))
}

#[utoipa::path(post, path = "/api/wishlists", tag = "wishlists", request_body = crate::openapi::CreateWishlistDoc, responses((status = 201, description = "Created", body = crate::openapi::WishlistDoc), (status = 400, description = "Invalid input", body = crate::openapi::ErrorDoc)))]
pub async fn create(
    State(state): State<ServerState>,
    ApiJson(input): ApiJson<CreateWishlistInput>,
) -> Result<(StatusCode, Json<WishlistDto>), JsonApiError> {
    let created = state.wishlists.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(put, path = "/api/wishlists/{slug}", tag = "wishlists", params(("slug" = String, Path, description = "Wishlist slug")), request_body = crate::openapi::UpdateWishlistDoc, responses((status = 200, description = "Updated", body = crate::openapi::WishlistDoc), (status = 404, description = "Not found", body = crate::openapi::ErrorDoc)))]
pub async fn update(
    State(state): State<ServerState>,
    ApiPath(slug): ApiPath<String>,
    ApiJson(input): ApiJson<UpdateWishlistInput>,
) -> Result<Json<WishlistDto>, JsonApiError> {
    Ok(Json(state.wishlists.update(&slug, input).await?))
}

#[utoipa::path(delete, path = "/api/wishlists/{slug}", tag = "wishlists", params(("slug" = String, Path, description = "Wishlist slug")), responses((status = 204, description = "Deleted"), (status = 404, description = "Not found", body = crate::openapi::ErrorDoc)))]
pub async fn delete_by_slug(
    State(state): State<ServerState>,
    ApiPath(slug): ApiPath<String>,
) -> Result<StatusCode, JsonApiError> {
    state.wishlists.delete_by_slug(&slug).await?;
    Ok(StatusCode::NO_CONTENT)
}
