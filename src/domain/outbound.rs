//! Outbound line preparation and chunking rules.
//!
//! A prepared line is `[prefix + " "] + raw line + terminator`. It is split
//! into chunks of at most `bound` characters, left to right, without ever
//! cutting through a character.

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

/// Line terminator expected by the remote host.
pub const LINE_TERMINATOR: &str = "\r\n";

/// Control sequence that provokes a fresh prompt from the remote session.
pub const LIVENESS_SEQUENCE: &str = "\r\n";

/// Whether an outbound line receives the mud-mode prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineMode {
    #[default]
    Plain,
    Mud,
}

impl LineMode {
    pub fn from_flag(mud_mode: bool) -> Self {
        if mud_mode {
            Self::Mud
        } else {
            Self::Plain
        }
    }

    pub fn as_label(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Mud => "mud",
        }
    }
}

/// How the terminator is applied to a line that may already carry one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TerminatorPolicy {
    /// Append only when the line does not already end with the terminator.
    #[default]
    Idempotent,
    /// Append unconditionally.
    Always,
}

/// Builds the prepared line for a raw user line.
pub fn prepare_line(
    raw: &str,
    mode: LineMode,
    prefix: &str,
    policy: TerminatorPolicy,
) -> String {
    let mut prepared = String::with_capacity(prefix.len() + raw.len() + 3);

    if mode == LineMode::Mud {
        prepared.push_str(prefix);
        prepared.push(' ');
    }

    prepared.push_str(raw);

    let already_terminated = raw.ends_with(LINE_TERMINATOR);
    if policy == TerminatorPolicy::Always || !already_terminated {
        prepared.push_str(LINE_TERMINATOR);
    }

    prepared
}

/// Splits `line` into consecutive slices of at most `bound` characters.
///
/// An empty line yields no chunks.
pub fn chunk_line(line: &str, bound: NonZeroUsize) -> Vec<&str> {
    let bound = bound.get();
    let mut chunks = Vec::with_capacity(line.len() / bound + 1);
    let mut start = 0;
    let mut chars_in_chunk = 0;

    for (offset, _) in line.char_indices() {
        if chars_in_chunk == bound {
            chunks.push(&line[start..offset]);
            start = offset;
            chars_in_chunk = 0;
        }
        chars_in_chunk += 1;
    }

    if start < line.len() {
        chunks.push(&line[start..]);
    }

    chunks
}
