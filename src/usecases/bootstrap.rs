use std::path::{Path, PathBuf};

use crate::{
    infra::{
        self,
        config::{AppConfig, FileConfigAdapter},
        contracts::{ConfigAdapter, SettingsStore},
        error::AppError,
        settings_store::FileSettingsStore,
        storage_layout::StorageLayout,
        stubs::InMemorySettingsStore,
    },
    usecases::context::AppContext,
};

/// Where settings live for this run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsBackend {
    #[default]
    File,
    Ephemeral,
}

pub fn bootstrap(
    config_path: Option<&Path>,
    backend: SettingsBackend,
) -> anyhow::Result<AppContext> {
    let config = FileConfigAdapter::new(config_path).load()?;
    infra::logging::init(&config.logging)?;

    Ok(build_context(config, backend)?)
}

fn build_context(config: AppConfig, backend: SettingsBackend) -> Result<AppContext, AppError> {
    let settings: Box<dyn SettingsStore> = match backend {
        SettingsBackend::File => {
            let store = FileSettingsStore::open(settings_path(&config)?)?;
            tracing::debug!(path = %store.path().display(), "settings store opened");
            Box::new(store)
        }
        SettingsBackend::Ephemeral => Box::new(InMemorySettingsStore::default()),
    };

    Ok(AppContext::new(config, settings))
}

fn settings_path(config: &AppConfig) -> Result<PathBuf, AppError> {
    if let Some(path) = &config.storage.settings_file {
        return Ok(path.clone());
    }

    let layout = StorageLayout::resolve()?;
    layout.ensure_dirs()?;
    Ok(layout.settings_file())
}
