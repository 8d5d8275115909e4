use crate::{
    domain::favorites::FavoritesState, infra::secrets::mask_secret,
    usecases::dispatch::DispatchReport,
};

pub fn favorites_lines(favorites: &FavoritesState) -> Vec<String> {
    if favorites.addresses().is_empty() {
        return vec!["No favorites saved.".to_owned()];
    }

    favorites
        .addresses()
        .iter()
        .enumerate()
        .map(|(index, address)| format!("{index:>3}  {address}"))
        .collect()
}

pub fn api_key_line(key: Option<&str>) -> String {
    match key {
        Some(key) => format!("Google Places API key: {}", mask_secret(key)),
        None => "Google Places API key: not set".to_owned(),
    }
}

pub fn toggle_line(label: &str, enabled: bool) -> String {
    format!("{label}: {}", if enabled { "on" } else { "off" })
}

/// Summary for stderr. `None` when everything was delivered.
pub fn delivery_warning(report: &DispatchReport) -> Option<String> {
    if report.all_delivered() {
        return None;
    }

    let failed = report.failed_chunks();
    Some(format!(
        "{failed} chunk(s) were not delivered; see log for details."
    ))
}
