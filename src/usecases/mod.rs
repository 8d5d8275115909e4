//! Use case layer: application workflows and orchestration.

pub mod bootstrap;
pub mod context;
pub mod dispatch;
pub mod favorites;
pub mod preferences;
pub mod session;

/// Returns the usecases module name for smoke checks.
pub fn module_name() -> &'static str {
    "usecases"
}
