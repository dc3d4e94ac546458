use sea_orm::{entity::prelude::*, sea_query::OnConflict, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::errors;

pub const HEADER_TITLE_KEY: &str = "header_title";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "site_settings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub setting_key: String,
    #[sea_orm(column_type = "Text")]
    pub value: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match *self {}
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn get<C: ConnectionTrait>(db: &C, key: &str) -> Result<Option<String>, errors::ModelError> {
    let found = Entity::find_by_id(key.to_string()).one(db).await?;
    Ok(found.map(|m| m.value))
}

/// Insert or overwrite; last write wins.
pub async fn upsert<C: ConnectionTrait>(db: &C, key: &str, value: &str) -> Result<(), errors::ModelError> {
    let am = ActiveModel {
        setting_key: Set(key.to_string()),
        value: Set(value.to_string()),
    };
    Entity::insert(am)
        .on_conflict(
            OnConflict::column(Column::SettingKey)
                .update_column(Column::Value)
                .to_owned(),
        )
        .exec(db)
        .await?;
    Ok(())
}
