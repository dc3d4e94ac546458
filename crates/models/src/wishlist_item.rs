use chrono::Utc;
use sea_orm::{entity::prelude::*, ConnectionTrait, NotSet, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::{errors, wishlist};

pub const ITEM_NAME_MAX_LEN: usize = 255;
pub const SHOP_LINK_MAX_LEN: usize = 1000;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "wishlist_items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub wishlist_id: i32,
    pub item_name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub shop_link: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Wishlist }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Wishlist => Entity::belongs_to(wishlist::Entity)
                .from(Column::WishlistId)
                .to(wishlist::Column::Id)
                .on_delete(ForeignKeyAction::Cascade)
                .into(),
        }
    }
}

impl Related<wishlist::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Wishlist.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_item_name(name: &str) -> Result<(), errors::ModelError> {
    if name.trim().is_empty() {
        return Err(errors::ModelError::Validation("itemName is required".into()));
    }
    if name.chars().count() > ITEM_NAME_MAX_LEN {
        return Err(errors::ModelError::Validation(format!("itemName must be at most {ITEM_NAME_MAX_LEN} characters")));
    }
    Ok(())
}

pub fn validate_shop_link(link: Option<&str>) -> Result<(), errors::ModelError> {
    match link {
        Some(l) if l.chars().count() > SHOP_LINK_MAX_LEN => {
            Err(errors::ModelError::Validation(format!("shopLink must be at most {SHOP_LINK_MAX_LEN} characters")))
        }
        _ => Ok(()),
    }
}

pub async fn create<C: ConnectionTrait>(
    db: &C,
    wishlist_id: i32,
    item_name: &str,
    description: Option<&str>,
    shop_link: Option<&str>,
) -> Result<Model, errors::ModelError> {
    validate_item_name(item_name)?;
    validate_shop_link(shop_link)?;
    let am = ActiveModel {
        id: NotSet,
        wishlist_id: Set(wishlist_id),
        item_name: Set(item_name.to_string()),
        description: Set(description.map(str::to_string)),
        shop_link: Set(shop_link.map(str::to_string)),
        created_at: Set(Utc::now().into()),
    };
    Ok(am.insert(db).await?)
}

/// Items of one wishlist in insertion order.
pub async fn list_for_wishlist<C: ConnectionTrait>(db: &C, wishlist_id: i32) -> Result<Vec<Model>, errors::ModelError> {
    Ok(Entity::find()
        .filter(Column::WishlistId.eq(wishlist_id))
        .order_by_asc(Column::Id)
        .all(db)
        .await?)
}

/// Items of many wishlists, ordered by id so each group keeps insertion order.
pub async fn list_for_wishlists<C: ConnectionTrait>(db: &C, wishlist_ids: &[i32]) -> Result<Vec<Model>, errors::ModelError> {
    if wishlist_ids.is_empty() {
        return Ok(Vec::new());
    }
    Ok(Entity::find()
        .filter(Column::WishlistId.is_in(wishlist_ids.iter().copied()))
        .order_by_asc(Column::Id)
        .all(db)
        .await?)
}

pub async fn delete_for_wishlist<C: ConnectionTrait>(db: &C, wishlist_id: i32) -> Result<u64, errors::ModelError> {
    let res = Entity::delete_many()
        .filter(Column::WishlistId.eq(wishlist_id))
        .exec(db)
        .await?;
    Ok(res.rows_affected)
}
