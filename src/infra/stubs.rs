use std::collections::HashMap;

use crate::{
    domain::settings_key::SettingKey,
    infra::{contracts::SettingsStore, error::AppError},
};

#[cfg(test)]
use crate::infra::{config::AppConfig, contracts::ConfigAdapter};

#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct StubConfigAdapter;

#[cfg(test)]
impl ConfigAdapter for StubConfigAdapter {
    fn load(&self) -> anyhow::Result<AppConfig> {
        Ok(AppConfig::default())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum StoredValue {
    Text(String),
    Flag(bool),
    List(Vec<String>),
}

/// Process-local settings store, used when nothing should touch disk.
#[derive(Debug, Clone, Default)]
pub struct InMemorySettingsStore {
    values: HashMap<SettingKey, StoredValue>,
}

impl SettingsStore for InMemorySettingsStore {
    fn text(&self, key: SettingKey) -> Result<Option<String>, AppError> {
        match self.values.get(&key) {
            None => Ok(None),
            Some(StoredValue::Text(text)) => Ok(Some(text.clone())),
            Some(_) => Err(AppError::SettingsType {
                key: key.as_str(),
                expected: "string",
            }),
        }
    }

    fn set_text(&mut self, key: SettingKey, value: &str) -> Result<(), AppError> {
        self.values.insert(key, StoredValue::Text(value.to_owned()));
        Ok(())
    }

    fn flag(&self, key: SettingKey) -> Result<bool, AppError> {
        match self.values.get(&key) {
            None => Ok(false),
            Some(StoredValue::Flag(flag)) => Ok(*flag),
            Some(_) => Err(AppError::SettingsType {
                key: key.as_str(),
                expected: "boolean",
            }),
        }
    }

    fn set_flag(&mut self, key: SettingKey, value: bool) -> Result<(), AppError> {
        self.values.insert(key, StoredValue::Flag(value));
        Ok(())
    }

    fn list(&self, key: SettingKey) -> Result<Vec<String>, AppError> {
        match self.values.get(&key) {
            None => Ok(Vec::new()),
            Some(StoredValue::List(values)) => Ok(values.clone()),
            Some(_) => Err(AppError::SettingsType {
                key: key.as_str(),
                expected: "array of strings",
            }),
        }
    }

    fn set_list(&mut self, key: SettingKey, values: &[String]) -> Result<(), AppError> {
        self.values.insert(key, StoredValue::List(values.to_vec()));
        Ok(())
    }

    fn remove(&mut self, key: SettingKey) -> Result<(), AppError> {
        self.values.remove(&key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stub_config_returns_defaults() {
        let adapter = StubConfigAdapter;
        let config = adapter.load().expect("stub config must load");

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn in_memory_store_reports_type_mismatch() {
        let mut store = InMemorySettingsStore::default();
        store
            .set_text(SettingKey::MudMode, "true")
            .expect("in-memory write cannot fail");

        assert!(store.flag(SettingKey::MudMode).is_err());
        assert_eq!(
            store.text(SettingKey::MudMode).expect("text read"),
            Some("true".to_owned())
        );
    }
}
