use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, Func, LikeExpr},
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

use models::{wishlist, wishlist_item};

use super::domain::{NewWishlist, WishlistAggregate};
use crate::errors::ServiceError;

/// Persistence port for the wishlist aggregate.
#[async_trait]
pub trait WishlistRepository: Send + Sync {
    async fn list_all(&self) -> Result<Vec<WishlistAggregate>, ServiceError>;
    async fn find_by_slug(&self, slug: &str) -> Result<Option<WishlistAggregate>, ServiceError>;
    async fn search_by_owner(&self, fragment: &str) -> Result<Vec<WishlistAggregate>, ServiceError>;
    async fn slug_exists(&self, slug: &str) -> Result<bool, ServiceError>;
    /// Insert wishlist and items atomically. A taken slug surfaces as `Conflict`.
    async fn insert(&self, new: NewWishlist) -> Result<WishlistAggregate, ServiceError>;
    async fn update_note(&self, slug: &str, note: Option<String>) -> Result<Option<WishlistAggregate>, ServiceError>;
    async fn delete_by_slug(&self, slug: &str) -> Result<bool, ServiceError>;
    async fn delete_by_id(&self, id: i32) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmWishlistRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmWishlistRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

/// `%` and `_` in user input match literally.
fn like_contains(fragment: &str) -> String {
    let mut escaped = String::with_capacity(fragment.len() + 2);
    escaped.push('%');
    for c in fragment.to_lowercase().chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

async fn attach_items<C: ConnectionTrait>(
    conn: &C,
    wishlists: Vec<wishlist::Model>,
) -> Result<Vec<WishlistAggregate>, ServiceError> {
    let ids: Vec<i32> = wishlists.iter().map(|w| w.id).collect();
    let mut by_owner: HashMap<i32, Vec<wishlist_item::Model>> = HashMap::new();
    for item in wishlist_item::list_for_wishlists(conn, &ids).await? {
        by_owner.entry(item.wishlist_id).or_default().push(item);
    }
    Ok(wishlists
        .into_iter()
        .map(|w| {
            let items = by_owner.remove(&w.id).unwrap_or_default();
            WishlistAggregate { wishlist: w, items }
        })
        .collect())
}

async fn load_one<C: ConnectionTrait>(conn: &C, w: wishlist::Model) -> Result<WishlistAggregate, ServiceError> {
    let items = wishlist_item::list_for_wishlist(conn, w.id).await?;
    Ok(WishlistAggregate { wishlist: w, items })
}

/// Items first, then the wishlist, in one transaction.
async fn delete_aggregate(db: &DatabaseConnection, w: wishlist::Model) -> Result<(), ServiceError> {
    let txn = db.begin().await?;
    wishlist_item::delete_for_wishlist(&txn, w.id).await?;
    wishlist::Entity::delete_by_id(w.id).exec(&txn).await?;
    txn.commit().await?;
    Ok(())
}

#[async_trait]
impl WishlistRepository for SeaOrmWishlistRepository {
    async fn list_all(&self) -> Result<Vec<WishlistAggregate>, ServiceError> {
        let rows = wishlist::Entity::find()
            .order_by_asc(wishlist::Column::Id)
            .all(&self.db)
            .await?;
        attach_items(&self.db, rows).await
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<WishlistAggregate>, ServiceError> {
        match wishlist::find_by_slug(&self.db, slug).await? {
            Some(w) => Ok(Some(load_one(&self.db, w).await?)),
            None => Ok(None),
        }
    }

    async fn search_by_owner(&self, fragment: &str) -> Result<Vec<WishlistAggregate>, ServiceError> {
        let pattern = LikeExpr::new(like_contains(fragment)).escape('\\');
        let rows = wishlist::Entity::find()
            .filter(Expr::expr(Func::lower(Expr::col(wishlist::Column::OwnerName))).like(pattern))
            .order_by_asc(wishlist::Column::Id)
            .all(&self.db)
            .await?;
        attach_items(&self.db, rows).await
    }

    async fn slug_exists(&self, slug: &str) -> Result<bool, ServiceError> {
        Ok(wishlist::slug_exists(&self.db, slug).await?)
    }

    async fn insert(&self, new: NewWishlist) -> Result<WishlistAggregate, ServiceError> {
        let now: sea_orm::prelude::DateTimeWithTimeZone = Utc::now().into();
        let txn = self.db.begin().await?;
        let am = wishlist::ActiveModel {
            id: NotSet,
            owner_name: Set(new.owner_name),
            unique_slug: Set(new.unique_slug),
            note: Set(new.note),
            created_at: Set(now),
            updated_at: Set(now),
        };
        let created = am.insert(&txn).await?;
        let mut items = Vec::with_capacity(new.items.len());
        for input in &new.items {
            let item = wishlist_item::create(
                &txn,
                created.id,
                &input.item_name,
                input.description.as_deref(),
                input.shop_link.as_deref(),
            )
            .await?;
            items.push(item);
        }
        txn.commit().await?;
        Ok(WishlistAggregate { wishlist: created, items })
    }

    async fn update_note(&self, slug: &str, note: Option<String>) -> Result<Option<WishlistAggregate>, ServiceError> {
        let Some(found) = wishlist::find_by_slug(&self.db, slug).await? else {
            return Ok(None);
        };
        let mut am: wishlist::ActiveModel = found.into();
        am.note = Set(note);
        am.updated_at = Set(Utc::now().into());
        let updated = am.update(&self.db).await?;
        Ok(Some(load_one(&self.db, updated).await?))
    }

    async fn delete_by_slug(&self, slug: &str) -> Result<bool, ServiceError> {
        match wishlist::find_by_slug(&self.db, slug).await? {
            Some(w) => {
                delete_aggregate(&self.db, w).await?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_by_id(&self, id: i32) -> Result<bool, ServiceError> {
        match wishlist::Entity::find_by_id(id).one(&self.db).await? {
            Some(w) => {
                delete_aggregate(&self.db, w).await?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// In-memory repository for tests; can be told to reject the next N inserts
/// as slug collisions.
#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockWishlistRepository {
        rows: Mutex<Vec<WishlistAggregate>>,
        next_id: AtomicUsize,
        pub collisions_left: AtomicUsize,
        pub insert_calls: AtomicUsize,
        pub seen_slugs: Mutex<Vec<String>>,
    }

    impl MockWishlistRepository {
        pub fn with_collisions(n: usize) -> Self {
            let repo = Self::default();
            repo.collisions_left.store(n, Ordering::SeqCst);
            repo
        }
    }

    #[async_trait]
    impl WishlistRepository for MockWishlistRepository {
        async fn list_all(&self) -> Result<Vec<WishlistAggregate>, ServiceError> {
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn find_by_slug(&self, slug: &str) -> Result<Option<WishlistAggregate>, ServiceError> {
            Ok(self.rows.lock().unwrap().iter().find(|a| a.wishlist.unique_slug == slug).cloned())
        }

        async fn search_by_owner(&self, fragment: &str) -> Result<Vec<WishlistAggregate>, ServiceError> {
            let needle = fragment.to_lowercase();
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .filter(|a| a.wishlist.owner_name.to_lowercase().contains(&needle))
                .cloned()
                .collect())
        }

        async fn slug_exists(&self, slug: &str) -> Result<bool, ServiceError> {
            Ok(self.find_by_slug(slug).await?.is_some())
        }

        async fn insert(&self, new: NewWishlist) -> Result<WishlistAggregate, ServiceError> {
            self.insert_calls.fetch_add(1, Ordering::SeqCst);
            self.seen_slugs.lock().unwrap().push(new.unique_slug.clone());
            let left = self.collisions_left.load(Ordering::SeqCst);
            if left > 0 {
                self.collisions_left.store(left - 1, Ordering::SeqCst);
                return Err(ServiceError::conflict("UNIQUE constraint failed: wishlists.unique_slug"));
            }
            let id = self.next_id.fetch_add(1, Ordering::SeqCst) as i32 + 1;
            let now: sea_orm::prelude::DateTimeWithTimeZone = Utc::now().into();
            let items = new
                .items
                .iter()
                .enumerate()
                .map(|(i, it)| wishlist_item::Model {
                    id: id * 1000 + i as i32,
                    wishlist_id: id,
                    item_name: it.item_name.clone(),
                    description: it.description.clone(),
                    shop_link: it.shop_link.clone(),
                    created_at: now,
                })
                .collect();
            let agg = WishlistAggregate {
                wishlist: wishlist::Model {
                    id,
                    owner_name: new.owner_name,
                    unique_slug: new.unique_slug,
                    note: new.note,
                    created_at: now,
                    updated_at: now,
                },
                items,
            };
            self.rows.lock().unwrap().push(agg.clone());
            Ok(agg)
        }

        async fn update_note(&self, slug: &str, note: Option<String>) -> Result<Option<WishlistAggregate>, ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            Ok(rows.iter_mut().find(|a| a.wishlist.unique_slug == slug).map(|a| {
                a.wishlist.note = note;
                a.wishlist.updated_at = Utc::now().into();
                a.clone()
            }))
        }

        async fn delete_by_slug(&self, slug: &str) -> Result<bool, ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            let before = rows.len();
            rows.retain(|a| a.wishlist.unique_slug != slug);
            Ok(rows.len() != before)
        }

        async fn delete_by_id(&self, id: i32) -> Result<bool, ServiceError> {
            let mut rows = self.rows.lock().unwrap();
            let before = rows.len();
            rows.retain(|a| a.wishlist.id != id);
            Ok(rows.len() != before)
        }
    }
}
