//! `/api/admin/*`: user and wishlist management. Guarded by `require_admin`.

use axum::{extract::State, http::StatusCode, Json};

use service::user::{RegisterUserInput, UpdateUserInput, UserDto};
use service::wishlist::domain::{CreateWishlistInput, UpdateWishlistInput, WishlistDto};

use super::auth::ServerState;
use crate::errors::JsonApiError;
use crate::extract::{ApiJson, ApiPath};

#[utoipa::path(get, path = "/api/admin/users", tag = "admin", responses((status = 200, description = "All users", body = [crate::openapi::UserDoc]), (status = 403, description = "Not an admin", body = crate::openapi::ErrorDoc)))]
pub async fn list_users(State(state): State<ServerState>) -> Result<Json<Vec<UserDto>>, JsonApiError> {
    Ok(Json(state.users.list_all().await?))
}

#[utoipa::path(post, path = "/api/admin/users", tag = "admin", request_body = crate::openapi::RegisterUserDoc, responses((status = 201, description = "Created", body = crate::openapi::UserDoc), (status = 409, description = "Name taken", body = crate::openapi::ErrorDoc)))]
pub async fn create_user(
    State(state): State<ServerState>,
    ApiJson(input): ApiJson<RegisterUserInput>,
) -> Result<(StatusCode, Json<UserDto>), JsonApiError> {
    let created = state.users.register(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(put, path = "/api/admin/users/{id}", tag = "admin", params(("id" = i32, Path, description = "User id")), request_body = crate::openapi::RegisterUserDoc, responses((status = 200, description = "Updated", body = crate::openapi::UserDoc), (status = 404, description = "Not found", body = crate::openapi::ErrorDoc), (status = 409, description = "Name taken", body = crate::openapi::ErrorDoc)))]
pub async fn update_user(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(input): ApiJson<UpdateUserInput>,
) -> Result<Json<UserDto>, JsonApiError> {
    Ok(Json(state.users.update(id, input).await?))
}

#[utoipa::path(delete, path = "/api/admin/users/{id}", tag = "admin", params(("id" = i32, Path, description = "User id")), responses((status = 204, description = "Deleted"), (status = 404, description = "Not found", body = crate::openapi::ErrorDoc)))]
pub async fn delete_user(State(state): State<ServerState>, ApiPath(id): ApiPath<i32>) -> Result<StatusCode, JsonApiError> {
    state.users.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(get, path = "/api/admin/wishlists", tag = "admin", responses((status = 200, description = "All wishlists", body = [crate::openapi::WishlistDoc])))]
pub async fn list_wishlists(State(state): State<ServerState>) -> Result<Json<Vec<WishlistDto>>, JsonApiError> {
    Ok(Json(state.wishlists.list_all().await?))
}

#[utoipa::path(post, path = "/api/admin/wishlists", tag = "admin", request_body = crate::openapi::CreateWishlistDoc, responses((status = 201, description = "Created", body = crate::openapi::WishlistDoc)))]
pub async fn create_wishlist(
    State(state): State<ServerState>,
    ApiJson(input): ApiJson<CreateWishlistInput>,
) -> Result<(StatusCode, Json<WishlistDto>), JsonApiError> {
    let created = state.wishlists.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(put, path = "/api/admin/wishlists/{slug}", tag = "admin", params(("slug" = String, Path, description = "Wishlist slug")), request_body = crate::openapi::UpdateWishlistDoc, responses((status = 200, description = "Updated", body = crate::openapi::WishlistDoc), (status = 404, description = "Not found", body = crate::openapi::ErrorDoc)))]
pub async fn update_wishlist(
    State(state): State<ServerState>,
    ApiPath(slug): ApiPath<String>,
    ApiJson(input): ApiJson<UpdateWishlistInput>,
) -> Result<Json<WishlistDto>, JsonApiError> {
    Ok(Json(state.wishlists.update(&slug, input).await?))
}

#[utoipa::path(delete, path = "/api/admin/wishlists/by-id/{id}", tag = "admin", params(("id" = i32, Path, description = "Wishlist id")), responses((status = 204, description = "Deleted"), (status = 404, description = "Not found", body = crate::openapi::ErrorDoc)))]
pub async fn delete_wishlist_by_id(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<StatusCode, JsonApiError> {
    state.wishlists.delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
