//! Service layer: business rules for wishlists, items, users, site settings
//! and the auth collaborator.
//! - Each area is split into domain types, a repository trait with a SeaORM
//!   implementation, and a service generic over that trait.
//! - Entity definitions and field validation live in the `models` crate.

pub mod errors;
pub mod slug;
pub mod auth;
pub mod user;
pub mod wishlist;
pub mod item;
pub mod setting;
#[cfg(test)]
pub mod test_support;
