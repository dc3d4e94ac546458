//! Key-value site settings. Only the header title is used.

pub mod repository;
pub mod service;

pub use repository::{SeaOrmSettingRepository, SettingRepository};
pub use service::{SettingService, SettingValue, DEFAULT_HEADER_TITLE};
