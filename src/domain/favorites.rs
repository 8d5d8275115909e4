/// Saved host addresses with an optional selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FavoritesState {
    addresses: Vec<String>,
    selected_index: Option<usize>,
}

impl FavoritesState {
    pub fn from_addresses(addresses: Vec<String>) -> Self {
        Self {
            addresses,
            selected_index: None,
        }
    }

    pub fn addresses(&self) -> &[String] {
        &self.addresses
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    pub fn selected_address(&self) -> Option<&str> {
        self.selected_index
            .and_then(|index| self.addresses.get(index))
            .map(String::as_str)
    }

    /// Appends a trimmed address. Blank input is ignored and returns `false`.
    pub fn add(&mut self, address: &str) -> bool {
        let address = address.trim();
        if address.is_empty() {
            return false;
        }

        self.addresses.push(address.to_owned());
        true
    }

    /// Selects the address at `index`, returning it when the index is valid.
    pub fn select(&mut self, index: usize) -> Option<&str> {
        if index >= self.addresses.len() {
            return None;
        }

        self.selected_index = Some(index);
        self.selected_address()
    }

    /// Removes the selected address. No-op without a selection.
    pub fn remove_selected(&mut self) -> Option<String> {
        let index = self.selected_index.take()?;
        if index >= self.addresses.len() {
            return None;
        }

        Some(self.addresses.remove(index))
    }
}
