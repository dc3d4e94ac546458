use models::errors::{is_unique_violation, ModelError};
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    pub fn conflict(msg: impl Into<String>) -> Self { Self::Conflict(msg.into()) }

    pub fn validation(msg: impl Into<String>) -> Self { Self::Validation(msg.into()) }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(m) => ServiceError::Validation(m),
            ModelError::Duplicate(m) => ServiceError::Conflict(m),
            ModelError::Db(m) => ServiceError::Db(m),
        }
    }
}

impl From<DbErr> for ServiceError {
    fn from(e: DbErr) -> Self {
        if is_unique_violation(&e) {
            return ServiceError::Conflict(e.to_string());
        }
        ServiceError::Db(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_errors_map_onto_service_taxonomy() {
        assert!(matches!(ServiceError::from(ModelError::Validation("x".into())), ServiceError::Validation(_)));
        assert!(matches!(ServiceError::from(ModelError::Duplicate("x".into())), ServiceError::Conflict(_)));
        assert!(matches!(ServiceError::from(ModelError::Db("x".into())), ServiceError::Db(_)));
    }

    #[test]
    fn plain_db_errors_stay_infrastructure() {
        let e = ServiceError::from(DbErr::Custom("boom".into()));
        assert!(matches!(e, ServiceError::Db(_)));
        assert_eq!(ServiceError::not_found("wishlist").to_string(), "not found: wishlist not found");
    }
}
