use std::sync::Arc;

use tracing::{info, instrument};

use super::repository::ItemRepository;
use crate::errors::ServiceError;
use crate::wishlist::domain::{ItemDto, ItemInput};
use crate::wishlist::service::validate_item;

pub struct ItemService<R: ItemRepository> {
    repo: Arc<R>,
}

impl<R: ItemRepository> ItemService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    #[instrument(skip(self, input), fields(item = %input.item_name))]
    pub async fn add_to_wishlist(&self, slug: &str, input: ItemInput) -> Result<ItemDto, ServiceError> {
        validate_item(&input)?;
        let created = self
            .repo
            .add_to_wishlist(slug, input)
            .await?
            .ok_or_else(|| ServiceError::not_found("wishlist"))?;
        info!(id = created.id, wishlist_id = created.wishlist_id, "item_added");
        Ok(created.into())
    }

    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i32, input: ItemInput) -> Result<ItemDto, ServiceError> {
        validate_item(&input)?;
        let updated = self
            .repo
            .update(id, input)
            .await?
            .ok_or_else(|| ServiceError::not_found("item"))?;
        info!(wishlist_id = updated.wishlist_id, "item_updated");
        Ok(updated.into())
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        if !self.repo.delete(id).await? {
            return Err(ServiceError::not_found("item"));
        }
        info!("item_deleted");
        Ok(())
    }

    /// Unknown wishlist ids give an empty list.
    pub async fn list_by_wishlist_id(&self, wishlist_id: i32) -> Result<Vec<ItemDto>, ServiceError> {
        let items = self.repo.list_by_wishlist_id(wishlist_id).await?;
        Ok(items.into_iter().map(ItemDto::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::SeaOrmItemRepository;
    use crate::test_support::get_db;
    use crate::wishlist::domain::CreateWishlistInput;
    use crate::wishlist::{SeaOrmWishlistRepository, WishlistService};

    struct Fixture {
        wishlists: WishlistService<SeaOrmWishlistRepository>,
        items: ItemService<SeaOrmItemRepository>,
    }

    async fn fixture() -> anyhow::Result<Fixture> {
        let db = get_db().await?;
        Ok(Fixture {
            wishlists: WishlistService::new(Arc::new(SeaOrmWishlistRepository::new(db.clone()))),
            items: ItemService::new(Arc::new(SeaOrmItemRepository::new(db))),
        })
    }

    fn item(name: &str) -> ItemInput {
        ItemInput { item_name: name.into(), ..ItemInput::default() }
    }

    async fn pause() {
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }

    #[tokio::test]
    async fn add_links_item_and_touches_wishlist() -> anyhow::Result<()> {
        let f = fixture().await?;
        let w = f.wishlists.create(CreateWishlistInput { owner_name: "Nina".into(), ..Default::default() }).await?;
        pause().await;

        let input = ItemInput { item_name: "Scarf".into(), description: Some("wool".into()), shop_link: Some("https://shop/scarf".into()) };
        let added = f.items.add_to_wishlist(&w.unique_slug, input).await?;
        assert_eq!(added.wishlist_id, w.id);
        assert_eq!(added.description.as_deref(), Some("wool"));

        let after = f.wishlists.get_by_slug(&w.unique_slug).await?;
        assert_eq!(after.items.len(), 1);
        assert!(after.updated_at > w.updated_at);
        Ok(())
    }

    #[tokio::test]
    async fn add_to_unknown_wishlist_is_not_found() -> anyhow::Result<()> {
        let f = fixture().await?;
        let res = f.items.add_to_wishlist("ghost-123456", item("Anything")).await;
        assert!(matches!(res, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn update_replaces_fields_but_not_owner() -> anyhow::Result<()> {
        let f = fixture().await?;
        let w = f.wishlists.create(CreateWishlistInput { owner_name: "Oli".into(), items: vec![item("Cap")], ..Default::default() }).await?;
        let id = w.items[0].id;
        pause().await;

        let updated = f
            .items
            .update(id, ItemInput { item_name: "Hat".into(), description: None, shop_link: Some("https://x".into()) })
            .await?;
        assert_eq!(updated.item_name, "Hat");
        assert_eq!(updated.shop_link.as_deref(), Some("https://x"));
        assert_eq!(updated.wishlist_id, w.id);
        assert_eq!(updated.created_at, w.items[0].created_at);

        let after = f.wishlists.get_by_slug(&w.unique_slug).await?;
        assert!(after.updated_at > w.updated_at);

        assert!(matches!(f.items.update(9999, item("Nope")).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(f.items.update(id, item(" ")).await, Err(ServiceError::Validation(_))));
        Ok(())
    }

    #[tokio::test]
    async fn delete_and_list() -> anyhow::Result<()> {
        let f = fixture().await?;
        let w = f
            .wishlists
            .create(CreateWishlistInput { owner_name: "Pat".into(), items: vec![item("A"), item("B"), item("C")], ..Default::default() })
            .await?;
        f.items.delete(w.items[1].id).await?;

        let names: Vec<String> = f.items.list_by_wishlist_id(w.id).await?.into_iter().map(|i| i.item_name).collect();
        assert_eq!(names, vec!["A".to_string(), "C".to_string()]);
        assert!(matches!(f.items.delete(w.items[1].id).await, Err(ServiceError::NotFound(_))));
        assert!(f.items.list_by_wishlist_id(424242).await?.is_empty());
        Ok(())
    }
}
