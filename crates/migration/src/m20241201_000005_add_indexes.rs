use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Items are always read per wishlist
        manager
            .create_index(
                Index::create()
                    .name("idx_wishlist_items_wishlist")
                    .table(WishlistItems::Table)
                    .col(WishlistItems::WishlistId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_users_category")
                    .table(Users::Table)
                    .col(Users::Category)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_wishlist_items_wishlist").table(WishlistItems::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_users_category").table(Users::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum WishlistItems { Table, WishlistId }

#[derive(DeriveIden)]
enum Users { Table, Category }
