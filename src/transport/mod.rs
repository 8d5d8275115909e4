//! Transport integration layer: sinks for outbound chunks.
//!
//! The real link to the remote host lives outside this crate. What ships
//! here is a logging placeholder and a raw writer for piping.

pub mod contracts;
pub mod error;
pub mod log;
pub mod writer;

pub use contracts::Transport;
pub use error::TransportError;

/// Returns the transport module name for smoke checks.
pub fn module_name() -> &'static str {
    "transport"
}
