use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::Response,
    Extension, Json,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use sea_orm::DatabaseConnection;
use serde::Serialize;

use service::auth::{AuthError, AuthService, Authenticator, Identity, LoginInput, Role};
use service::item::{ItemService, SeaOrmItemRepository};
use service::setting::{SeaOrmSettingRepository, SettingService};
use service::user::{SeaOrmUserRepository, UserService};
use service::wishlist::{SeaOrmWishlistRepository, WishlistService};

use crate::errors::JsonApiError;
use crate::extract::ApiJson;

pub const AUTH_COOKIE: &str = "auth_token";

/// Shared handler state: immutable services behind `Arc`.
#[derive(Clone)]
pub struct ServerState {
    pub auth: Arc<AuthService>,
    pub cookie_secure: bool,
    pub wishlists: Arc<WishlistService<SeaOrmWishlistRepository>>,
    pub items: Arc<ItemService<SeaOrmItemRepository>>,
    pub users: Arc<UserService<SeaOrmUserRepository>>,
    pub settings: Arc<SettingService<SeaOrmSettingRepository>>,
}

impl ServerState {
    pub fn new(db: DatabaseConnection, auth: Arc<AuthService>, cookie_secure: bool) -> Self {
        Self {
            auth,
            cookie_secure,
            wishlists: Arc::new(WishlistService::new(Arc::new(SeaOrmWishlistRepository::new(db.clone())))),
            items: Arc::new(ItemService::new(Arc::new(SeaOrmItemRepository::new(db.clone())))),
            users: Arc::new(UserService::new(Arc::new(SeaOrmUserRepository::new(db.clone())))),
            settings: Arc::new(SettingService::new(Arc::new(SeaOrmSettingRepository::new(db)))),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginOutput {
    pub token: String,
    pub role: Role,
    pub expires_at: i64,
}

#[utoipa::path(post, path = "/api/auth/login", tag = "auth", request_body = crate::openapi::LoginRequest, responses((status = 200, description = "Logged in", body = crate::openapi::LoginResponse), (status = 401, description = "Unauthorized", body = crate::openapi::ErrorDoc)))]
pub async fn login(
    State(state): State<ServerState>,
    jar: CookieJar,
    ApiJson(input): ApiJson<LoginInput>,
) -> Result<(CookieJar, Json<LoginOutput>), JsonApiError> {
    let session = state.auth.login(input).await?;
    let mut cookie = Cookie::new(AUTH_COOKIE, session.token.clone());
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_secure(state.cookie_secure);
    cookie.set_same_site(SameSite::Lax);
    let out = LoginOutput { token: session.token, role: session.identity.role, expires_at: session.expires_at };
    Ok((jar.add(cookie), Json(out)))
}

#[utoipa::path(post, path = "/api/auth/logout", tag = "auth", responses((status = 204, description = "Logged out")))]
pub async fn logout(jar: CookieJar) -> (CookieJar, StatusCode) {
    let mut cookie = Cookie::from(AUTH_COOKIE);
    cookie.set_path("/");
    (jar.remove(cookie), StatusCode::NO_CONTENT)
}

/// `Authorization: Bearer <token>` first, then the `auth_token` cookie.
fn extract_token(req: &Request, jar: &CookieJar) -> Option<String> {
    req.headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .or_else(|| jar.get(AUTH_COOKIE).map(|c| c.value().to_string()).filter(|t| !t.is_empty()))
}

/// Authenticates the caller and stores its [`Identity`] in request extensions.
pub async fn require_auth(
    State(state): State<ServerState>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Result<Response, JsonApiError> {
    let path = req.uri().path().to_string();
    let Some(token) = extract_token(&req, &jar) else {
        tracing::warn!(path = %path, "missing bearer token and auth cookie");
        return Err(AuthError::Unauthorized.into());
    };
    match state.auth.authenticate(&token) {
        Ok(identity) => {
            req.extensions_mut().insert(identity);
            Ok(next.run(req).await)
        }
        Err(e) => {
            tracing::warn!(path = %path, err = %e, "token validation failed");
            Err(e.into())
        }
    }
}

/// Must run after [`require_auth`].
pub async fn require_admin(
    Extension(identity): Extension<Identity>,
    req: Request,
    next: Next,
) -> Result<Response, JsonApiError> {
    if !identity.is_admin() {
        tracing::warn!(subject = %identity.subject, path = %req.uri().path(), "admin route refused");
        return Err(AuthError::Forbidden.into());
    }
    Ok(next.run(req).await)
}
