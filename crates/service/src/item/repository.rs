use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set, TransactionTrait};

use models::{wishlist, wishlist_item};

use crate::errors::ServiceError;
use crate::wishlist::domain::ItemInput;

#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// `None` when no wishlist has this slug.
    async fn add_to_wishlist(&self, slug: &str, input: ItemInput) -> Result<Option<wishlist_item::Model>, ServiceError>;
    async fn update(&self, id: i32, input: ItemInput) -> Result<Option<wishlist_item::Model>, ServiceError>;
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
    async fn list_by_wishlist_id(&self, wishlist_id: i32) -> Result<Vec<wishlist_item::Model>, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmItemRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmItemRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl ItemRepository for SeaOrmItemRepository {
    async fn add_to_wishlist(&self, slug: &str, input: ItemInput) -> Result<Option<wishlist_item::Model>, ServiceError> {
        let txn = self.db.begin().await?;
        let Some(owner) = wishlist::find_by_slug(&txn, slug).await? else {
            return Ok(None);
        };
        let created = wishlist_item::create(
            &txn,
            owner.id,
            &input.item_name,
            input.description.as_deref(),
            input.shop_link.as_deref(),
        )
        .await?;
        wishlist::touch(&txn, owner.id).await?;
        txn.commit().await?;
        Ok(Some(created))
    }

    async fn update(&self, id: i32, input: ItemInput) -> Result<Option<wishlist_item::Model>, ServiceError> {
        let txn = self.db.begin().await?;
        let Some(found) = wishlist_item::Entity::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };
        let owner_id = found.wishlist_id;
        let mut am: wishlist_item::ActiveModel = found.into();
        am.item_name = Set(input.item_name);
        am.description = Set(input.description);
        am.shop_link = Set(input.shop_link);
        let updated = am.update(&txn).await?;
        wishlist::touch(&txn, owner_id).await?;
        txn.commit().await?;
        Ok(Some(updated))
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let txn = self.db.begin().await?;
        let Some(found) = wishlist_item::Entity::find_by_id(id).one(&txn).await? else {
            return Ok(false);
        };
        wishlist_item::Entity::delete_by_id(found.id).exec(&txn).await?;
        wishlist::touch(&txn, found.wishlist_id).await?;
        txn.commit().await?;
        Ok(true)
    }

    async fn list_by_wishlist_id(&self, wishlist_id: i32) -> Result<Vec<wishlist_item::Model>, ServiceError> {
        Ok(wishlist_item::list_for_wishlist(&self.db, wishlist_id).await?)
    }
}
