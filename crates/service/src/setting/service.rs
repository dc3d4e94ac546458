use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use models::site_setting::HEADER_TITLE_KEY;

use super::repository::SettingRepository;
use crate::errors::ServiceError;

pub const DEFAULT_HEADER_TITLE: &str = "Malagapo Christmas Wishlist";

/// `{"value": ...}` body used for reading and writing a setting.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SettingValue {
    #[serde(default)]
    pub value: String,
}

pub struct SettingService<R: SettingRepository> {
    repo: Arc<R>,
}

impl<R: SettingRepository> SettingService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn get_header_title(&self) -> Result<String, ServiceError> {
        Ok(self
            .repo
            .get(HEADER_TITLE_KEY)
            .await?
            .unwrap_or_else(|| DEFAULT_HEADER_TITLE.to_string()))
    }

    /// Last write wins.
    #[instrument(skip(self, value))]
    pub async fn set_header_title(&self, value: &str) -> Result<String, ServiceError> {
        self.repo.upsert(HEADER_TITLE_KEY, value).await?;
        info!(len = value.len(), "header_title_updated");
        Ok(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setting::SeaOrmSettingRepository;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn header_title_defaults_then_last_write_wins() -> anyhow::Result<()> {
        let svc = SettingService::new(Arc::new(SeaOrmSettingRepository::new(get_db().await?)));
        assert_eq!(svc.get_header_title().await?, DEFAULT_HEADER_TITLE);

        svc.set_header_title("Family Gifts 2026").await?;
        svc.set_header_title("Noel").await?;
        assert_eq!(svc.get_header_title().await?, "Noel");
        Ok(())
    }

    #[test]
    fn setting_value_shape() {
        let v: SettingValue = serde_json::from_str(r#"{"value":"Hi"}"#).unwrap();
        assert_eq!(v.value, "Hi");
        assert_eq!(serde_json::to_string(&v).unwrap(), r#"{"value":"Hi"}"#);
    }
}
