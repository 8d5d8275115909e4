use crate::{
    domain::{graphics_mode::GraphicsMode, settings_key::SettingKey},
    infra::{contracts::SettingsStore, error::AppError},
};

pub fn mud_mode(store: &dyn SettingsStore) -> Result<bool, AppError> {
    store.flag(SettingKey::MudMode)
}

pub fn set_mud_mode(store: &mut dyn SettingsStore, enabled: bool) -> Result<(), AppError> {
    store.set_flag(SettingKey::MudMode, enabled)?;
    tracing::info!(enabled, "mud mode updated");
    Ok(())
}

/// Reads the graphics mode. Unknown stored labels fall back to the default.
pub fn graphics_mode(store: &dyn SettingsStore) -> Result<GraphicsMode, AppError> {
    let Some(label) = store.text(SettingKey::GraphicsMode)? else {
        return Ok(GraphicsMode::default());
    };

    Ok(GraphicsMode::from_label(&label).unwrap_or_else(|| {
        tracing::warn!(label = %label, "unknown graphics mode stored, using default");
        GraphicsMode::default()
    }))
}

pub fn set_graphics_mode(
    store: &mut dyn SettingsStore,
    mode: GraphicsMode,
) -> Result<GraphicsMode, AppError> {
    store.set_text(SettingKey::GraphicsMode, mode.as_label())?;
    tracing::info!(mode = mode.as_label(), "switched to {}", mode.description());
    Ok(mode)
}

pub fn toggle_graphics_mode(store: &mut dyn SettingsStore) -> Result<GraphicsMode, AppError> {
    let next = graphics_mode(store)?.toggled();
    set_graphics_mode(store, next)
}

pub fn api_key(store: &dyn SettingsStore) -> Result<Option<String>, AppError> {
    Ok(store
        .text(SettingKey::GooglePlacesApiKey)?
        .filter(|key| !key.is_empty()))
}

pub fn set_api_key(store: &mut dyn SettingsStore, key: &str) -> Result<(), AppError> {
    store.set_text(SettingKey::GooglePlacesApiKey, key.trim())
}

pub fn clear_api_key(store: &mut dyn SettingsStore) -> Result<(), AppError> {
    store.remove(SettingKey::GooglePlacesApiKey)
}
