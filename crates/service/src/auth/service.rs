use argon2::{
    password_hash::{PasswordHasher, PasswordVerifier, SaltString},
    Argon2, PasswordHash,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header as JwtHeader, Validation};
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use super::domain::{AuthSession, Identity, LoginInput, Role};
use super::errors::AuthError;

/// Turns a bearer token into an [`Identity`].
pub trait Authenticator: Send + Sync {
    fn authenticate(&self, token: &str) -> Result<Identity, AuthError>;
}

/// Auth service configuration
#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub token_ttl: Duration,
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    role: Role,
    iat: i64,
    exp: i64,
}

fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    Ok(Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AuthError::HashError(e.to_string()))?
        .to_string())
}

/// Shared-password auth: one password for the `user` login, one for `admin`.
/// Only Argon2 hashes of the passwords are kept.
pub struct AuthService {
    cfg: AuthConfig,
    user_hash: String,
    admin_hash: String,
}

impl AuthService {
    pub fn new(cfg: AuthConfig, user_password: &str, admin_password: &str) -> Result<Self, AuthError> {
        Ok(Self {
            cfg,
            user_hash: hash_password(user_password)?,
            admin_hash: hash_password(admin_password)?,
        })
    }

    /// Verify the password for `user` or `admin` and issue a signed token.
    #[instrument(skip(self, input), fields(username = %input.username))]
    pub async fn login(&self, input: LoginInput) -> Result<AuthSession, AuthError> {
        let role = Role::from_username(&input.username).ok_or(AuthError::Unauthorized)?;
        let stored = match role {
            Role::User => &self.user_hash,
            Role::Admin => &self.admin_hash,
        };
        let parsed = PasswordHash::new(stored).map_err(|e| AuthError::HashError(e.to_string()))?;
        if Argon2::default().verify_password(input.password.as_bytes(), &parsed).is_err() {
            warn!("login rejected");
            return Err(AuthError::Unauthorized);
        }

        let now = Utc::now();
        let exp = (now + self.cfg.token_ttl).timestamp();
        let claims = Claims { sub: input.username.clone(), role, iat: now.timestamp(), exp };
        let token = encode(&JwtHeader::default(), &claims, &EncodingKey::from_secret(self.cfg.jwt_secret.as_bytes()))
            .map_err(|e| AuthError::TokenError(e.to_string()))?;
        info!(role = %role, "login_succeeded");
        Ok(AuthSession { identity: Identity { role, subject: input.username }, token, expires_at: exp })
    }
}

impl Authenticator for AuthService {
    fn authenticate(&self, token: &str) -> Result<Identity, AuthError> {
        let validation = Validation::new(Algorithm::HS256);
        let data = decode::<Claims>(token, &DecodingKey::from_secret(self.cfg.jwt_secret.as_bytes()), &validation)
            .map_err(|_| AuthError::Unauthorized)?;
        Ok(Identity { role: data.claims.role, subject: data.claims.sub })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn svc() -> AuthService {
        AuthService::new(
            AuthConfig { jwt_secret: "test-secret".into(), token_ttl: Duration::hours(12) },
            "family",
            "santa",
        )
        .unwrap()
    }

    fn login(username: &str, password: &str) -> LoginInput {
        LoginInput { username: username.into(), password: password.into() }
    }

    #[tokio::test]
    async fn login_issues_token_accepted_by_authenticate() {
        let svc = svc();
        let session = svc.login(login("admin", "santa")).await.unwrap();
        assert!(session.identity.is_admin());
        assert!(session.expires_at > Utc::now().timestamp());

        let identity = svc.authenticate(&session.token).unwrap();
        assert_eq!(identity, Identity { role: Role::Admin, subject: "admin".into() });

        let user = svc.login(login("user", "family")).await.unwrap();
        assert!(!svc.authenticate(&user.token).unwrap().is_admin());
    }

    #[tokio::test]
    async fn wrong_password_or_username_is_unauthorized() {
        let svc = svc();
        assert!(matches!(svc.login(login("user", "santa")).await, Err(AuthError::Unauthorized)));
        assert!(matches!(svc.login(login("root", "santa")).await, Err(AuthError::Unauthorized)));
    }

    #[tokio::test]
    async fn tampered_or_foreign_tokens_are_rejected() {
        let svc = svc();
        let session = svc.login(login("user", "family")).await.unwrap();
        let admin = svc.login(login("admin", "santa")).await.unwrap();
        // user signature over admin claims
        let user_parts: Vec<&str> = session.token.split('.').collect();
        let admin_parts: Vec<&str> = admin.token.split('.').collect();
        let tampered = format!("{}.{}.{}", user_parts[0], admin_parts[1], user_parts[2]);
        assert!(matches!(svc.authenticate(&tampered), Err(AuthError::Unauthorized)));
        assert!(svc.authenticate("not-a-token").is_err());

        let other = AuthService::new(
            AuthConfig { jwt_secret: "other-secret".into(), token_ttl: Duration::hours(1) },
            "family",
            "santa",
        )
        .unwrap();
        assert!(other.authenticate(&session.token).is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        let svc = AuthService::new(
            AuthConfig { jwt_secret: "test-secret".into(), token_ttl: Duration::hours(-2) },
            "family",
            "santa",
        )
        .unwrap();
        let session = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap()
            .block_on(svc.login(LoginInput { username: "user".into(), password: "family".into() }))
            .unwrap();
        assert!(matches!(svc.authenticate(&session.token), Err(AuthError::Unauthorized)));
    }

    #[test]
    fn codes_are_stable() {
        assert_eq!(AuthError::Unauthorized.code(), 1004);
        assert_eq!(AuthError::Forbidden.code(), 1005);
    }
}
