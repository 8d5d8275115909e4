use crate::{
    domain::{favorites::FavoritesState, settings_key::SettingKey},
    infra::{contracts::SettingsStore, error::AppError},
};

pub fn load_favorites(store: &dyn SettingsStore) -> Result<FavoritesState, AppError> {
    Ok(FavoritesState::from_addresses(
        store.list(SettingKey::Favorites)?,
    ))
}

/// Adds an address and persists the list. Returns `false` for blank input.
pub fn add_favorite(store: &mut dyn SettingsStore, address: &str) -> Result<bool, AppError> {
    let mut favorites = load_favorites(store)?;
    if !favorites.add(address) {
        return Ok(false);
    }

    store.set_list(SettingKey::Favorites, favorites.addresses())?;
    tracing::info!(count = favorites.addresses().len(), "favorite added");
    Ok(true)
}

/// Removes the address at `index`. Out-of-range indexes are ignored.
pub fn remove_favorite(
    store: &mut dyn SettingsStore,
    index: usize,
) -> Result<Option<String>, AppError> {
    let mut favorites = load_favorites(store)?;
    if favorites.select(index).is_none() {
        return Ok(None);
    }

    let removed = favorites.remove_selected();
    store.set_list(SettingKey::Favorites, favorites.addresses())?;
    tracing::info!(index, "favorite removed");
    Ok(removed)
}

/// Returns the host address a selection would fill in.
pub fn select_favorite(store: &dyn SettingsStore, index: usize) -> Result<Option<String>, AppError> {
    let mut favorites = load_favorites(store)?;
    Ok(favorites.select(index).map(ToOwned::to_owned))
}
