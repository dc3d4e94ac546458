//! Wishlist aggregate: a wishlist plus its exclusively-owned items.

pub mod domain;
pub mod repository;
pub mod service;

pub use repository::{SeaOrmWishlistRepository, WishlistRepository};
pub use service::WishlistService;
