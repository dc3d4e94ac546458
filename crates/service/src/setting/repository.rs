use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use models::site_setting;

use crate::errors::ServiceError;

#[async_trait]
pub trait SettingRepository: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, ServiceError>;
    async fn upsert(&self, key: &str, value: &str) -> Result<(), ServiceError>;
}

pub struct SeaOrmSettingRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmSettingRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl SettingRepository for SeaOrmSettingRepository {
    async fn get(&self, key: &str) -> Result<Option<String>, ServiceError> {
        Ok(site_setting::get(&self.db, key).await?)
    }

    async fn upsert(&self, key: &str, value: &str) -> Result<(), ServiceError> {
        Ok(site_setting::upsert(&self.db, key, value).await?)
    }
}
