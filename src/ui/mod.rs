//! UI layer: terminal prompts and plain-text rendering for the CLI.

pub mod prompt;
pub mod render;

/// Returns the UI module name for smoke checks.
pub fn module_name() -> &'static str {
    "ui"
}
