use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use models::user::{self, Category};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserInput {
    #[serde(default)]
    pub full_name: String,
    pub category: Category,
}

/// Admin full replace of the mutable fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserInput {
    #[serde(default)]
    pub full_name: String,
    pub category: Category,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i32,
    pub full_name: String,
    pub category: Category,
    pub created_at: DateTime<FixedOffset>,
}

impl From<user::Model> for UserDto {
    fn from(m: user::Model) -> Self {
        Self { id: m.id, full_name: m.full_name, category: m.category, created_at: m.created_at }
    }
}
