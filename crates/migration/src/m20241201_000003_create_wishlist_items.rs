//! Create `wishlist_items` table with FK to `wishlists`.
//!
//! Items are owned by exactly one wishlist and go away with it.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WishlistItems::Table)
                    .if_not_exists()
                    .col(pk_auto(WishlistItems::Id))
                    .col(integer(WishlistItems::WishlistId).not_null())
                    .col(string_len(WishlistItems::ItemName, 255).not_null())
                    .col(
                        ColumnDef::new(WishlistItems::Description)
                            .text()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(WishlistItems::ShopLink)
                            .string_len(1000)
                            .null(),
                    )
                    .col(timestamp_with_time_zone(WishlistItems::CreatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_wishlist_items_wishlist")
                            .from(WishlistItems::Table, WishlistItems::WishlistId)
                            .to(Wishlists::Table, Wishlists::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(WishlistItems::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum WishlistItems { Table, Id, WishlistId, ItemName, Description, ShopLink, CreatedAt }

#[derive(DeriveIden)]
enum Wishlists { Table, Id }
