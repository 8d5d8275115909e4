use anyhow::Result;

use crate::{
    domain::settings_key::SettingKey,
    infra::{config::AppConfig, error::AppError},
};

pub trait ConfigAdapter {
    fn load(&self) -> Result<AppConfig>;
}

/// Typed key-value persistence for per-user settings.
pub trait SettingsStore {
    fn text(&self, key: SettingKey) -> Result<Option<String>, AppError>;
    fn set_text(&mut self, key: SettingKey, value: &str) -> Result<(), AppError>;

    /// Missing flags read as `false`.
    fn flag(&self, key: SettingKey) -> Result<bool, AppError>;
    fn set_flag(&mut self, key: SettingKey, value: bool) -> Result<(), AppError>;

    /// Missing lists read as empty.
    fn list(&self, key: SettingKey) -> Result<Vec<String>, AppError>;
    fn set_list(&mut self, key: SettingKey, values: &[String]) -> Result<(), AppError>;

    fn remove(&mut self, key: SettingKey) -> Result<(), AppError>;
}
