use std::{num::NonZeroUsize, path::PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::outbound::TerminatorPolicy;

const DEFAULT_CHUNK_BOUND: usize = 250;
const DEFAULT_MODE_PREFIX: &str = "Gos";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub logging: LogConfig,
    pub dispatch: DispatchConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    pub level: String,
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            file: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DispatchConfig {
    pub chunk_bound: NonZeroUsize,
    pub mode_prefix: String,
    pub terminator_policy: TerminatorPolicy,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            chunk_bound: NonZeroUsize::new(DEFAULT_CHUNK_BOUND).unwrap_or(NonZeroUsize::MIN),
            mode_prefix: DEFAULT_MODE_PREFIX.to_owned(),
            terminator_policy: TerminatorPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct StorageConfig {
    pub settings_file: Option<PathBuf>,
}
