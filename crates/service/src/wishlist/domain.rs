use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use models::{wishlist, wishlist_item};

/// Item fields as supplied by a caller (create, add or update).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ItemInput {
    #[serde(default)]
    pub item_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub shop_link: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWishlistInput {
    #[serde(default)]
    pub owner_name: String,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub items: Vec<ItemInput>,
}

/// Only the note is editable; an absent note clears it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWishlistInput {
    #[serde(default)]
    pub note: Option<String>,
}

/// A validated wishlist ready to be inserted with its items.
#[derive(Debug, Clone)]
pub struct NewWishlist {
    pub owner_name: String,
    pub unique_slug: String,
    pub note: Option<String>,
    pub items: Vec<ItemInput>,
}

/// Persisted wishlist together with its items in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct WishlistAggregate {
    pub wishlist: wishlist::Model,
    pub items: Vec<wishlist_item::Model>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ItemDto {
    pub id: i32,
    pub item_name: String,
    pub description: Option<String>,
    pub shop_link: Option<String>,
    pub wishlist_id: i32,
    pub created_at: DateTime<FixedOffset>,
}

impl From<wishlist_item::Model> for ItemDto {
    fn from(m: wishlist_item::Model) -> Self {
        Self {
            id: m.id,
            item_name: m.item_name,
            description: m.description,
            shop_link: m.shop_link,
            wishlist_id: m.wishlist_id,
            created_at: m.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WishlistDto {
    pub id: i32,
    pub owner_name: String,
    pub unique_slug: String,
    pub note: Option<String>,
    pub items: Vec<ItemDto>,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

impl From<WishlistAggregate> for WishlistDto {
    fn from(a: WishlistAggregate) -> Self {
        let w = a.wishlist;
        Self {
            id: w.id,
            owner_name: w.owner_name,
            unique_slug: w.unique_slug,
            note: w.note,
            items: a.items.into_iter().map(ItemDto::from).collect(),
            created_at: w.created_at,
            updated_at: w.updated_at,
        }
    }
}
