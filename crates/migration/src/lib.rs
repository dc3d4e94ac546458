//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20241201_000001_create_users;
mod m20241201_000002_create_wishlists;
mod m20241201_000003_create_wishlist_items;
mod m20241201_000004_create_site_settings;
mod m20241201_000005_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20241201_000001_create_users::Migration),
            Box::new(m20241201_000002_create_wishlists::Migration),
            Box::new(m20241201_000003_create_wishlist_items::Migration),
            Box::new(m20241201_000004_create_site_settings::Migration),
            // Indexes should always be applied last
            Box::new(m20241201_000005_add_indexes::Migration),
        ]
    }
}
