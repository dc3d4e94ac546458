//! Create `wishlists` table.
//!
//! The unique constraint on `unique_slug` is the authoritative guard against
//! duplicate slugs; the application pre-check only avoids most collisions.
//! There is no foreign key to `users`: owners are display names.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Wishlists::Table)
                    .if_not_exists()
                    .col(pk_auto(Wishlists::Id))
                    .col(string_len(Wishlists::OwnerName, 255).not_null())
                    .col(string_len(Wishlists::UniqueSlug, 255).unique_key().not_null())
                    .col(
                        ColumnDef::new(Wishlists::Note)
                            .string_len(1000)
                            .null(),
                    )
                    .col(timestamp_with_time_zone(Wishlists::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Wishlists::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Wishlists::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Wishlists { Table, Id, OwnerName, UniqueSlug, Note, CreatedAt, UpdatedAt }
