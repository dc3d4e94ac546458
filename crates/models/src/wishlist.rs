//! Wishlist aggregate root.
//!
//! `owner_name` is a display name only. It is not a foreign key
//! to `users`: a wishlist may exist for someone who never registered, and
//! deleting a user leaves their wishlists in place.
use chrono::Utc;
use sea_orm::{entity::prelude::*, sea_query::Expr, ConnectionTrait};
use serde::{Deserialize, Serialize};

use crate::{errors, wishlist_item};

pub const OWNER_NAME_MAX_LEN: usize = 255;
pub const NOTE_MAX_LEN: usize = 1000;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "wishlists")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub owner_name: String,
    #[sea_orm(unique)]
    pub unique_slug: String,
    pub note: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Items }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Items => Entity::has_many(wishlist_item::Entity).into(),
        }
    }
}

impl Related<wishlist_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Items.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_owner_name(name: &str) -> Result<(), errors::ModelError> {
    if name.trim().is_empty() {
        return Err(errors::ModelError::Validation("ownerName is required".into()));
    }
    if name.chars().count() > OWNER_NAME_MAX_LEN {
        return Err(errors::ModelError::Validation(format!("ownerName must be at most {OWNER_NAME_MAX_LEN} characters")));
    }
    Ok(())
}

pub fn validate_note(note: Option<&str>) -> Result<(), errors::ModelError> {
    match note {
        Some(n) if n.chars().count() > NOTE_MAX_LEN => {
            Err(errors::ModelError::Validation(format!("note must be at most {NOTE_MAX_LEN} characters")))
        }
        _ => Ok(()),
    }
}

pub async fn find_by_slug<C: ConnectionTrait>(db: &C, slug: &str) -> Result<Option<Model>, errors::ModelError> {
    Ok(Entity::find().filter(Column::UniqueSlug.eq(slug)).one(db).await?)
}

pub async fn slug_exists<C: ConnectionTrait>(db: &C, slug: &str) -> Result<bool, errors::ModelError> {
    Ok(find_by_slug(db, slug).await?.is_some())
}

/// Refresh `updated_at` after a change anywhere in the aggregate.
pub async fn touch<C: ConnectionTrait>(db: &C, id: i32) -> Result<(), errors::ModelError> {
    let now: DateTimeWithTimeZone = Utc::now().into();
    Entity::update_many()
        .col_expr(Column::UpdatedAt, Expr::value(now))
        .filter(Column::Id.eq(id))
        .exec(db)
        .await?;
    Ok(())
}
