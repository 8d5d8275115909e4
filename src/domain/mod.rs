//! Domain layer: core entities and business rules.

pub mod favorites;
pub mod graphics_mode;
pub mod outbound;
pub mod settings_key;

/// Returns the domain module name for smoke checks.
pub fn module_name() -> &'static str {
    "domain"
}
