use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;

use service::wishlist::domain::{ItemDto, ItemInput};

use super::auth::ServerState;
use crate::errors::JsonApiError;
use crate::extract::{ApiJson, ApiPath, ApiQuery};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    pub wishlist_id: i32,
}

#[utoipa::path(post, path = "/api/wishlists/{slug}/items", tag = "items", params(("slug" = String, Path, description = "Wishlist slug")), request_body = crate::openapi::ItemInputDoc, responses((status = 201, description = "Item added", body = crate::openapi::ItemDoc), (status = 404, description = "Wishlist not found", body = crate::openapi::ErrorDoc)))]
pub async fn add(
    State(state): State<ServerState>,
    ApiPath(slug): ApiPath<String>,
    ApiJson(input): ApiJson<ItemInput>,
) -> Result<(StatusCode, Json<ItemDto>), JsonApiError> {
    let created = state.items.add_to_wishlist(&slug, input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(get, path = "/api/items", tag = "items", params(("wishlistId" = i32, Query, description = "Owning wishlist id")), responses((status = 200, description = "Items in insertion order", body = [crate::openapi::ItemDoc])))]
pub async fn list(
    State(state): State<ServerState>,
    ApiQuery(params): ApiQuery<ListParams>,
) -> Result<Json<Vec<ItemDto>>, JsonApiError> {
    Ok(Json(state.items.list_by_wishlist_id(params.wishlist_id).await?))
}

#[utoipa::path(put, path = "/api/items/{id}", tag = "items", params(("id" = i32, Path, description = "Item id")), request_body = crate::openapi::ItemInputDoc, responses((status = 200, description = "Updated", body = crate::openapi::ItemDoc), (status = 404, description = "Not found", body = crate::openapi::ErrorDoc)))]
pub async fn update(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(input): ApiJson<ItemInput>,
) -> Result<Json<ItemDto>, JsonApiError> {
    Ok(Json(state.items.update(id, input).await?))
}

#[utoipa::path(delete, path = "/api/items/{id}", tag = "items", params(("id" = i32, Path, description = "Item id")), responses((status = 204, description = "Deleted"), (status = 404, description = "Not found", body = crate::openapi::ErrorDoc)))]
pub async fn delete(State(state): State<ServerState>, ApiPath(id): ApiPath<i32>) -> Result<StatusCode, JsonApiError> {
    state.items.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
