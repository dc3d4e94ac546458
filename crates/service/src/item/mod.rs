//! Items are mutated through the owning wishlist: every change also
//! refreshes the wishlist's `updated_at`.

pub mod repository;
pub mod service;

pub use repository::{ItemRepository, SeaOrmItemRepository};
pub use service::ItemService;
