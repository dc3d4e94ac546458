use std::sync::Arc;

use tracing::{info, instrument, warn};

use models::{wishlist, wishlist_item};

use super::domain::{CreateWishlistInput, ItemInput, NewWishlist, UpdateWishlistInput, WishlistDto};
use super::repository::WishlistRepository;
use crate::errors::ServiceError;
use crate::slug;

/// Application service for the wishlist aggregate.
pub struct WishlistService<R: WishlistRepository> {
    repo: Arc<R>,
}

pub(crate) fn validate_item(input: &ItemInput) -> Result<(), ServiceError> {
    wishlist_item::validate_item_name(&input.item_name)?;
    wishlist_item::validate_shop_link(input.shop_link.as_deref())?;
    Ok(())
}

impl<R: WishlistRepository> WishlistService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn list_all(&self) -> Result<Vec<WishlistDto>, ServiceError> {
        let rows = self.repo.list_all().await?;
        Ok(rows.into_iter().map(WishlistDto::from).collect())
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<WishlistDto, ServiceError> {
        self.repo
            .find_by_slug(slug)
            .await?
            .map(WishlistDto::from)
            .ok_or_else(|| ServiceError::not_found("wishlist"))
    }

    /// Case-insensitive substring match on the owner name. Blank matches all.
    pub async fn search_by_owner_name(&self, fragment: &str) -> Result<Vec<WishlistDto>, ServiceError> {
        let rows = if fragment.trim().is_empty() {
            self.repo.list_all().await?
        } else {
            self.repo.search_by_owner(fragment).await?
        };
        Ok(rows.into_iter().map(WishlistDto::from).collect())
    }

    /// Pick a slug not currently in use. Only an optimisation: the UNIQUE
    /// constraint checked in `create` is what actually guarantees uniqueness.
    async fn generate_slug(&self, owner_name: &str) -> Result<String, ServiceError> {
        let base = slug::normalize_base(owner_name);
        for attempt in 1..=slug::PRECHECK_ATTEMPTS {
            let candidate = slug::with_random_suffix(&base);
            if !self.repo.slug_exists(&candidate).await? {
                return Ok(candidate);
            }
            warn!(slug = %candidate, attempt, "slug already taken, regenerating");
        }
        Err(ServiceError::conflict("could not allocate a unique slug"))
    }

    #[instrument(skip(self, input), fields(owner = %input.owner_name, items = input.items.len()))]
    pub async fn create(&self, input: CreateWishlistInput) -> Result<WishlistDto, ServiceError> {
        wishlist::validate_owner_name(&input.owner_name)?;
        wishlist::validate_note(input.note.as_deref())?;
        for item in &input.items {
            validate_item(item)?;
        }

        for attempt in 1..=slug::SAVE_ATTEMPTS {
            let unique_slug = self.generate_slug(&input.owner_name).await?;
            let new = NewWishlist {
                owner_name: input.owner_name.clone(),
                unique_slug: unique_slug.clone(),
                note: input.note.clone(),
                items: input.items.clone(),
            };
            match self.repo.insert(new).await {
                Ok(created) => {
                    info!(id = created.wishlist.id, slug = %unique_slug, "wishlist_created");
                    return Ok(created.into());
                }
                Err(ServiceError::Conflict(detail)) => {
                    warn!(slug = %unique_slug, attempt, detail = %detail, "slug collided on save, retrying");
                }
                Err(e) => return Err(e),
            }
        }
        Err(ServiceError::conflict("could not allocate a unique slug"))
    }

    #[instrument(skip(self, input))]
    pub async fn update(&self, slug: &str, input: UpdateWishlistInput) -> Result<WishlistDto, ServiceError> {
        wishlist::validate_note(input.note.as_deref())?;
        let updated = self
            .repo
            .update_note(slug, input.note)
            .await?
            .ok_or_else(|| ServiceError::not_found("wishlist"))?;
        info!(id = updated.wishlist.id, "wishlist_updated");
        Ok(updated.into())
    }

    #[instrument(skip(self))]
    pub async fn delete_by_slug(&self, slug: &str) -> Result<(), ServiceError> {
        if !self.repo.delete_by_slug(slug).await? {
            return Err(ServiceError::not_found("wishlist"));
        }
        info!("wishlist_deleted");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn delete_by_id(&self, id: i32) -> Result<(), ServiceError> {
        if !self.repo.delete_by_id(id).await? {
            return Err(ServiceError::not_found("wishlist"));
        }
        info!("wishlist_deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::atomic::Ordering;

    use crate::test_support::get_db;
    use crate::wishlist::repository::{mock::MockWishlistRepository, SeaOrmWishlistRepository};

    async fn seaorm_service() -> anyhow::Result<WishlistService<SeaOrmWishlistRepository>> {
        let db = get_db().await?;
        Ok(WishlistService::new(Arc::new(SeaOrmWishlistRepository::new(db))))
    }

    fn item(name: &str, link: Option<&str>, desc: Option<&str>) -> ItemInput {
        ItemInput {
            item_name: name.into(),
            shop_link: link.map(Into::into),
            description: desc.map(Into::into),
        }
    }

    fn input(owner: &str, items: Vec<ItemInput>) -> CreateWishlistInput {
        CreateWishlistInput { owner_name: owner.into(), note: None, items }
    }

    fn assert_slug_for(base: &str, slug: &str) {
        let suffix = slug.strip_prefix(&format!("{base}-")).unwrap_or_else(|| panic!("{slug} lacks {base}-"));
        assert_eq!(suffix.len(), 6);
        assert!(suffix.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
    }

    #[tokio::test]
    async fn create_fetch_delete_scenario() -> anyhow::Result<()> {
        let svc = seaorm_service().await?;
        let created = svc.create(input("Maria Santos", vec![])).await?;
        assert_eq!(created.owner_name, "Maria Santos");
        assert!(created.items.is_empty());
        assert_eq!(created.created_at, created.updated_at);
        assert_slug_for("maria-santos", &created.unique_slug);

        let fetched = svc.get_by_slug(&created.unique_slug).await?;
        assert_eq!(fetched, created);

        svc.delete_by_slug(&created.unique_slug).await?;
        assert!(matches!(svc.get_by_slug(&created.unique_slug).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(svc.delete_by_slug(&created.unique_slug).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn items_come_back_in_input_order() -> anyhow::Result<()> {
        let svc = seaorm_service().await?;
        let items = vec![
            item("Bike", Some("https://shop/bike"), Some("red")),
            item("Book", None, None),
            item("Lego", Some("https://shop/lego"), None),
        ];
        let created = svc.create(CreateWishlistInput { owner_name: "Kim".into(), note: Some("hi".into()), items: items.clone() }).await?;
        let fetched = svc.get_by_slug(&created.unique_slug).await?;
        let got: Vec<ItemInput> = fetched
            .items
            .iter()
            .map(|i| ItemInput { item_name: i.item_name.clone(), shop_link: i.shop_link.clone(), description: i.description.clone() })
            .collect();
        assert_eq!(got, items);
        assert!(fetched.items.iter().all(|i| i.wishlist_id == created.id));
        Ok(())
    }

    #[tokio::test]
    async fn same_owner_never_duplicates_slugs() -> anyhow::Result<()> {
        let svc = seaorm_service().await?;
        let mut slugs = HashSet::new();
        for _ in 0..20 {
            let w = svc.create(input("John Smith", vec![])).await?;
            assert!(slugs.insert(w.unique_slug));
        }
        assert_eq!(svc.list_all().await?.len(), 20);
        Ok(())
    }

    #[tokio::test]
    async fn invalid_input_is_rejected_before_persisting() -> anyhow::Result<()> {
        let svc = seaorm_service().await?;
        assert!(matches!(svc.create(input("  ", vec![])).await, Err(ServiceError::Validation(_))));
        let bad_item = input("Joe", vec![item("Bike", None, None), item("", None, None)]);
        assert!(matches!(svc.create(bad_item).await, Err(ServiceError::Validation(_))));
        let long_note = CreateWishlistInput { owner_name: "Joe".into(), note: Some("n".repeat(1001)), items: vec![] };
        assert!(matches!(svc.create(long_note).await, Err(ServiceError::Validation(_))));
        assert!(svc.list_all().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn update_changes_only_note_and_updated_at() -> anyhow::Result<()> {
        let svc = seaorm_service().await?;
        let created = svc.create(input("Ana", vec![item("Kite", None, None)])).await?;
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;

        let updated = svc.update(&created.unique_slug, UpdateWishlistInput { note: Some("blue please".into()) }).await?;
        assert_eq!(updated.note.as_deref(), Some("blue please"));
        assert!(updated.updated_at > created.updated_at);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.owner_name, created.owner_name);
        assert_eq!(updated.unique_slug, created.unique_slug);
        assert_eq!(updated.items, created.items);

        let cleared = svc.update(&created.unique_slug, UpdateWishlistInput { note: None }).await?;
        assert!(cleared.note.is_none());

        let missing = svc.update("nobody-000000", UpdateWishlistInput::default()).await;
        assert!(matches!(missing, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn search_is_case_insensitive_substring() -> anyhow::Result<()> {
        let svc = seaorm_service().await?;
        for owner in ["John Smith", "JOHNNY", "Jon", "100% Joy"] {
            svc.create(input(owner, vec![])).await?;
        }
        let mut owners: Vec<String> = svc.search_by_owner_name("john").await?.into_iter().map(|w| w.owner_name).collect();
        owners.sort();
        assert_eq!(owners, vec!["JOHNNY".to_string(), "John Smith".to_string()]);
        assert!(svc.search_by_owner_name("zzz").await?.is_empty());
        assert_eq!(svc.search_by_owner_name("0%").await?.len(), 1);
        assert_eq!(svc.search_by_owner_name("_").await?.len(), 0);
        assert_eq!(svc.search_by_owner_name("  ").await?.len(), 4);
        Ok(())
    }

    #[tokio::test]
    async fn search_keeps_surrounding_whitespace() -> anyhow::Result<()> {
        let svc = seaorm_service().await?;
        svc.create(input("JOHNNY", vec![])).await?;
        svc.create(input("Jo Ann", vec![])).await?;
        let owners: Vec<String> = svc.search_by_owner_name("jo ").await?.into_iter().map(|w| w.owner_name).collect();
        assert_eq!(owners, vec!["Jo Ann".to_string()]);
        Ok(())
    }

    #[tokio::test]
    async fn delete_by_id_removes_items() -> anyhow::Result<()> {
        let db = get_db().await?;
        let svc = WishlistService::new(Arc::new(SeaOrmWishlistRepository::new(db.clone())));
        let created = svc.create(input("Leo", vec![item("Ball", None, None), item("Bone", None, None)])).await?;
        svc.delete_by_id(created.id).await?;
        assert!(wishlist_item::list_for_wishlist(&db, created.id).await?.is_empty());
        assert!(matches!(svc.delete_by_id(created.id).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn save_time_collision_is_retried_with_fresh_slug() -> anyhow::Result<()> {
        let repo = Arc::new(MockWishlistRepository::with_collisions(2));
        let svc = WishlistService::new(repo.clone());
        let created = svc.create(input("Maria Santos", vec![])).await?;
        assert_eq!(repo.insert_calls.load(Ordering::SeqCst), 3);
        let seen = repo.seen_slugs.lock().unwrap().clone();
        assert_eq!(seen.last(), Some(&created.unique_slug));
        assert_slug_for("maria-santos", &created.unique_slug);
        Ok(())
    }

    #[tokio::test]
    async fn persistent_collision_ends_in_conflict() -> anyhow::Result<()> {
        let repo = Arc::new(MockWishlistRepository::with_collisions(usize::MAX));
        let svc = WishlistService::new(repo.clone());
        let res = svc.create(input("Maria Santos", vec![])).await;
        assert!(matches!(res, Err(ServiceError::Conflict(_))));
        assert_eq!(repo.insert_calls.load(Ordering::SeqCst), slug::SAVE_ATTEMPTS);
        assert!(repo.list_all().await?.is_empty());
        Ok(())
    }
}
