use axum::{extract::State, Extension, Json};

use service::auth::{AuthError, Identity};
use service::setting::SettingValue;

use super::auth::ServerState;
use crate::errors::JsonApiError;
use crate::extract::ApiJson;

#[utoipa::path(get, path = "/api/settings/header", tag = "settings", responses((status = 200, description = "Header title", body = crate::openapi::SettingValueDoc)))]
pub async fn get_header(State(state): State<ServerState>) -> Result<Json<SettingValue>, JsonApiError> {
    let value = state.settings.get_header_title().await?;
    Ok(Json(SettingValue { value }))
}

/// Readable by everyone signed in, writable by admins only.
#[utoipa::path(put, path = "/api/settings/header", tag = "settings", request_body = crate::openapi::SettingValueDoc, responses((status = 200, description = "Stored", body = crate::openapi::SettingValueDoc), (status = 403, description = "Not an admin", body = crate::openapi::ErrorDoc)))]
pub async fn set_header(
    State(state): State<ServerState>,
    Extension(identity): Extension<Identity>,
    ApiJson(input): ApiJson<SettingValue>,
) -> Result<Json<SettingValue>, JsonApiError> {
    if !identity.is_admin() {
        return Err(AuthError::Forbidden.into());
    }
    let value = state.settings.set_header_title(&input.value).await?;
    Ok(Json(SettingValue { value }))
}
