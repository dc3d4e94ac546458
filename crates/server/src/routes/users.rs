use axum::{extract::State, http::StatusCode, Json};

use models::user::Category;
use service::user::{RegisterUserInput, UserDto};

use super::auth::ServerState;
use crate::errors::JsonApiError;
use crate::extract::{ApiJson, ApiPath};

#[utoipa::path(get, path = "/api/users", tag = "users", responses((status = 200, description = "Users ordered by full name", body = [crate::openapi::UserDoc])))]
pub async fn list_all(State(state): State<ServerState>) -> Result<Json<Vec<UserDto>>, JsonApiError> {
    Ok(Json(state.users.list_all().await?))
}

/// Category segment is case-insensitive: `kid` and `KID` both work.
#[utoipa::path(get, path = "/api/users/category/{category}", tag = "users", params(("category" = String, Path, description = "ADULT, KID or PET")), responses((status = 200, description = "Users in category", body = [crate::openapi::UserDoc]), (status = 400, description = "Unknown category", body = crate::openapi::ErrorDoc)))]
pub async fn list_by_category(
    State(state): State<ServerState>,
    ApiPath(raw): ApiPath<String>,
) -> Result<Json<Vec<UserDto>>, JsonApiError> {
    let category: Category = raw.parse().map_err(service::errors::ServiceError::from)?;
    Ok(Json(state.users.list_by_category(category).await?))
}

#[utoipa::path(post, path = "/api/users/register", tag = "users", request_body = crate::openapi::RegisterUserDoc, responses((status = 201, description = "Registered", body = crate::openapi::UserDoc), (status = 409, description = "Name taken", body = crate::openapi::ErrorDoc)))]
pub async fn register(
    State(state): State<ServerState>,
    ApiJson(input): ApiJson<RegisterUserInput>,
) -> Result<(StatusCode, Json<UserDto>), JsonApiError> {
    let created = state.users.register(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(delete, path = "/api/users/{id}", tag = "users", params(("id" = i32, Path, description = "User id")), responses((status = 204, description = "Deleted"), (status = 404, description = "Not found", body = crate::openapi::ErrorDoc)))]
pub async fn delete(State(state): State<ServerState>, ApiPath(id): ApiPath<i32>) -> Result<StatusCode, JsonApiError> {
    state.users.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
