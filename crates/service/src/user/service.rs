use std::sync::Arc;

use tracing::{info, instrument, warn};

use models::user::{self, Category};

use super::domain::{RegisterUserInput, UpdateUserInput, UserDto};
use super::repository::UserRepository;
use crate::errors::ServiceError;

pub struct UserService<R: UserRepository> {
    repo: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Ordered by full name.
    pub async fn list_all(&self) -> Result<Vec<UserDto>, ServiceError> {
        Ok(self.repo.list_all().await?.into_iter().map(UserDto::from).collect())
    }

    pub async fn list_by_category(&self, category: Category) -> Result<Vec<UserDto>, ServiceError> {
        Ok(self.repo.list_by_category(category).await?.into_iter().map(UserDto::from).collect())
    }

    /// Names are compared exactly; "Ana" and "ANA" are different users.
    #[instrument(skip(self, input), fields(full_name = %input.full_name, category = input.category.as_str()))]
    pub async fn register(&self, input: RegisterUserInput) -> Result<UserDto, ServiceError> {
        user::validate_full_name(&input.full_name)?;
        if self.repo.find_by_full_name(&input.full_name).await?.is_some() {
            warn!("user already registered");
            return Err(ServiceError::conflict(format!("user '{}' already exists", input.full_name)));
        }
        let created = self.repo.insert(&input.full_name, input.category).await?;
        info!(id = created.id, "user_registered");
        Ok(created.into())
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        if !self.repo.delete(id).await? {
            return Err(ServiceError::not_found("user"));
        }
        info!("user_deleted");
        Ok(())
    }

    #[instrument(skip(self, input), fields(full_name = %input.full_name))]
    pub async fn update(&self, id: i32, input: UpdateUserInput) -> Result<UserDto, ServiceError> {
        user::validate_full_name(&input.full_name)?;
        if let Some(other) = self.repo.find_by_full_name(&input.full_name).await? {
            if other.id != id {
                return Err(ServiceError::conflict(format!("user '{}' already exists", input.full_name)));
            }
        }
        let updated = self
            .repo
            .update(id, &input.full_name, input.category)
            .await?
            .ok_or_else(|| ServiceError::not_found("user"))?;
        info!("user_updated");
        Ok(updated.into())
    }
}
