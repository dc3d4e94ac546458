//! SeaORM entities and connection helpers for the wishlist store.

pub mod errors;
pub mod db;
pub mod user;
pub mod wishlist;
pub mod wishlist_item;
pub mod site_setting;
