use std::{num::NonZeroUsize, path::PathBuf};

use serde::Deserialize;

use crate::{
    domain::outbound::TerminatorPolicy,
    infra::{
        config::{AppConfig, DispatchConfig, LogConfig, StorageConfig},
        error::AppError,
    },
};

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    pub logging: Option<FileLogConfig>,
    pub dispatch: Option<FileDispatchConfig>,
    pub storage: Option<FileStorageConfig>,
}

impl FileConfig {
    pub fn merge_into(self, config: &mut AppConfig) -> Result<(), AppError> {
        if let Some(logging) = self.logging {
            logging.merge_into(&mut config.logging);
        }

        if let Some(dispatch) = self.dispatch {
            dispatch.merge_into(&mut config.dispatch)?;
        }

        if let Some(storage) = self.storage {
            storage.merge_into(&mut config.storage);
        }

        Ok(())
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLogConfig {
    pub level: Option<String>,
    pub file: Option<PathBuf>,
}

impl FileLogConfig {
    fn merge_into(self, config: &mut LogConfig) {
        if let Some(level) = self.level {
            config.level = level;
        }

        if let Some(file) = self.file {
            config.file = Some(file);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileDispatchConfig {
    pub chunk_bound: Option<usize>,
    pub mode_prefix: Option<String>,
    pub terminator_policy: Option<TerminatorPolicy>,
}

impl FileDispatchConfig {
    fn merge_into(self, config: &mut DispatchConfig) -> Result<(), AppError> {
        if let Some(chunk_bound) = self.chunk_bound {
            config.chunk_bound =
                NonZeroUsize::new(chunk_bound).ok_or_else(|| AppError::InvalidConfig {
                    field: "dispatch.chunk_bound",
                    details: "must be greater than zero".into(),
                })?;
        }

        if let Some(mode_prefix) = self.mode_prefix {
            config.mode_prefix = mode_prefix;
        }

        if let Some(policy) = self.terminator_policy {
            config.terminator_policy = policy;
        }

        Ok(())
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileStorageConfig {
    pub settings_file: Option<PathBuf>,
}

impl FileStorageConfig {
    fn merge_into(self, config: &mut StorageConfig) {
        if let Some(settings_file) = self.settings_file {
            config.settings_file = Some(settings_file);
        }
    }
}
