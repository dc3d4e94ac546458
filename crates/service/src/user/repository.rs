use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};

use models::user::{self, Category};

use crate::errors::ServiceError;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn list_all(&self) -> Result<Vec<user::Model>, ServiceError>;
    async fn list_by_category(&self, category: Category) -> Result<Vec<user::Model>, ServiceError>;
    async fn find_by_full_name(&self, full_name: &str) -> Result<Option<user::Model>, ServiceError>;
    async fn insert(&self, full_name: &str, category: Category) -> Result<user::Model, ServiceError>;
    async fn update(&self, id: i32, full_name: &str, category: Category) -> Result<Option<user::Model>, ServiceError>;
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmUserRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmUserRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn list_all(&self) -> Result<Vec<user::Model>, ServiceError> {
        Ok(user::Entity::find()
            .order_by_asc(user::Column::FullName)
            .all(&self.db)
            .await?)
    }

    async fn list_by_category(&self, category: Category) -> Result<Vec<user::Model>, ServiceError> {
        Ok(user::Entity::find()
            .filter(user::Column::Category.eq(category))
            .order_by_asc(user::Column::FullName)
            .all(&self.db)
            .await?)
    }

    async fn find_by_full_name(&self, full_name: &str) -> Result<Option<user::Model>, ServiceError> {
        Ok(user::find_by_full_name(&self.db, full_name).await?)
    }

    async fn insert(&self, full_name: &str, category: Category) -> Result<user::Model, ServiceError> {
        Ok(user::create(&self.db, full_name, category).await?)
    }

    async fn update(&self, id: i32, full_name: &str, category: Category) -> Result<Option<user::Model>, ServiceError> {
        let Some(found) = user::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };
        let mut am: user::ActiveModel = found.into();
        am.full_name = Set(full_name.to_string());
        am.category = Set(category);
        Ok(Some(am.update(&self.db).await?))
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let res = user::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }
}
