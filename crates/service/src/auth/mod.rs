//! Auth collaborator: shared-password login issuing signed tokens, and
//! token authentication for the HTTP layer.
//!
//! Services never see transport state; handlers receive an [`domain::Identity`].

pub mod domain;
pub mod errors;
pub mod service;

pub use domain::{AuthSession, Identity, LoginInput, Role};
pub use errors::AuthError;
pub use service::{AuthConfig, AuthService, Authenticator};
