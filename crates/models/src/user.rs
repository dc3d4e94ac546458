use std::str::FromStr;

use chrono::Utc;
use sea_orm::{entity::prelude::*, ConnectionTrait, NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::errors;

pub const FULL_NAME_MAX_LEN: usize = 255;

/// Who a wishlist is for. Stored as the upper-case variant name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    #[sea_orm(string_value = "ADULT")]
    Adult,
    #[sea_orm(string_value = "KID")]
    Kid,
    #[sea_orm(string_value = "PET")]
    Pet,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Adult => "ADULT",
            Category::Kid => "KID",
            Category::Pet => "PET",
        }
    }
}

impl FromStr for Category {
    type Err = errors::ModelError;

    /// Case-insensitive: `kid`, `Kid` and `KID` all parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ADULT" => Ok(Category::Adult),
            "KID" => Ok(Category::Kid),
            "PET" => Ok(Category::Pet),
            other => Err(errors::ModelError::Validation(format!(
                "unknown category '{other}' (expected ADULT, KID or PET)"
            ))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub full_name: String,
    pub category: Category,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match *self {}
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_full_name(name: &str) -> Result<(), errors::ModelError> {
    if name.trim().is_empty() {
        return Err(errors::ModelError::Validation("fullName is required".into()));
    }
    if name.chars().count() > FULL_NAME_MAX_LEN {
        return Err(errors::ModelError::Validation(format!("fullName must be at most {FULL_NAME_MAX_LEN} characters")));
    }
    Ok(())
}

pub async fn create<C: ConnectionTrait>(db: &C, full_name: &str, category: Category) -> Result<Model, errors::ModelError> {
    validate_full_name(full_name)?;
    let am = ActiveModel {
        id: NotSet,
        full_name: Set(full_name.to_string()),
        category: Set(category),
        created_at: Set(Utc::now().into()),
    };
    Ok(am.insert(db).await?)
}

/// Exact, case-sensitive name lookup.
pub async fn find_by_full_name<C: ConnectionTrait>(db: &C, full_name: &str) -> Result<Option<Model>, errors::ModelError> {
    Ok(Entity::find()
        .filter(Column::FullName.eq(full_name))
        .one(db)
        .await?)
}
