//! OpenAPI document served at `/api-docs/openapi.json`.
//!
//! Schemas mirror the JSON shapes of the service DTOs.

use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(Serialize, ToSchema)]
pub struct ErrorDoc { pub error: String, pub detail: Option<String> }

#[derive(Serialize, ToSchema)]
pub struct LoginRequest {
    /// `user` or `admin`
    pub username: String,
    pub password: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse { pub token: String, pub role: String, pub expires_at: i64 }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemInputDoc {
    pub item_name: String,
    pub description: Option<String>,
    pub shop_link: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemDoc {
    pub id: i32,
    pub item_name: String,
    pub description: Option<String>,
    pub shop_link: Option<String>,
    pub wishlist_id: i32,
    pub created_at: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateWishlistDoc {
    pub owner_name: String,
    pub note: Option<String>,
    pub items: Vec<ItemInputDoc>,
}

#[derive(Serialize, ToSchema)]
pub struct UpdateWishlistDoc { pub note: Option<String> }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WishlistDoc {
    pub id: i32,
    pub owner_name: String,
    pub unique_slug: String,
    pub note: Option<String>,
    pub items: Vec<ItemDoc>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserDoc {
    pub full_name: String,
    /// ADULT, KID or PET
    pub category: String,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDoc {
    pub id: i32,
    pub full_name: String,
    pub category: String,
    pub created_at: String,
}

#[derive(Serialize, ToSchema)]
pub struct SettingValueDoc { pub value: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::auth::login,
        crate::routes::auth::logout,
        crate::routes::wishlists::list_all,
        crate::routes::wishlists::get_by_slug,
        crate::routes::wishlists::search,
        crate::routes::wishlists::create,
        crate::routes::wishlists::update,
        crate::routes::wishlists::delete_by_slug,
        crate::routes::items::add,
        crate::routes::items::list,
        crate::routes::items::update,
        crate::routes::items::delete,
        crate::routes::users::list_all,
        crate::routes::users::list_by_category,
        crate::routes::users::register,
        crate::routes::users::delete,
        crate::routes::settings::get_header,
        crate::routes::settings::set_header,
        crate::routes::admin::list_users,
        crate::routes::admin::create_user,
        crate::routes::admin::update_user,
        crate::routes::admin::delete_user,
        crate::routes::admin::list_wishlists,
        crate::routes::admin::create_wishlist,
        crate::routes::admin::update_wishlist,
        crate::routes::admin::delete_wishlist_by_id,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorDoc,
            LoginRequest,
            LoginResponse,
            ItemInputDoc,
            ItemDoc,
            CreateWishlistDoc,
            UpdateWishlistDoc,
            WishlistDoc,
            RegisterUserDoc,
            UserDoc,
            SettingValueDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "auth"),
        (name = "wishlists"),
        (name = "items"),
        (name = "users"),
        (name = "settings"),
        (name = "admin")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_business_paths() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        for p in ["/api/wishlists", "/api/wishlists/{slug}", "/api/items/{id}", "/api/admin/wishlists/by-id/{id}", "/api/settings/header"] {
            assert!(paths.iter().any(|k| k.as_str() == p), "missing {p}");
        }
    }
}
