/// Keys of the persisted per-user settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKey {
    Favorites,
    MudMode,
    RememberUsername,
    RememberPassword,
    Username,
    Password,
    GooglePlacesApiKey,
    GraphicsMode,
}

impl SettingKey {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Favorites => "favorites",
            Self::MudMode => "mud_mode",
            Self::RememberUsername => "remember_username",
            Self::RememberPassword => "remember_password",
            Self::Username => "username",
            Self::Password => "password",
            Self::GooglePlacesApiKey => "google_places_api_key",
            Self::GraphicsMode => "graphics_mode",
        }
    }

    /// Whether the stored value must never be logged or echoed in full.
    pub fn is_secret(self) -> bool {
        matches!(self, Self::Password | Self::GooglePlacesApiKey)
    }
}
