use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use configs::AppConfig;
use tower_http::cors::CorsLayer;
use tracing::info;

use service::auth::{AuthConfig, AuthService};

use crate::routes::{self, auth::ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Hash the configured passwords once; plain text is dropped with the config.
pub fn build_auth(cfg: &configs::AuthConfig) -> anyhow::Result<AuthService> {
    let svc = AuthService::new(
        AuthConfig {
            jwt_secret: cfg.jwt_secret.clone(),
            token_ttl: chrono::Duration::hours(cfg.token_ttl_hours),
        },
        &cfg.user_password,
        &cfg.admin_password,
    )?;
    Ok(svc)
}

/// Build the app for an already-validated config and serve it.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let db = models::db::connect_with_config(&cfg.database).await?;
    if cfg.database.run_migrations {
        models::db::migrate(&db).await?;
    }

    let auth = Arc::new(build_auth(&cfg.auth)?);
    let state = ServerState::new(db, auth, cfg.auth.cookie_secure);
    let app: Router = routes::build_router(build_cors(), state);

    let addr: SocketAddr = format!("{}:{}", cfg.server.host, cfg.server.port).parse()?;
    info!(%addr, "starting wishlist server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
