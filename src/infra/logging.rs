use std::path::Path;

use tracing_subscriber::EnvFilter;

use crate::infra::{config::LogConfig, error::AppError};

/// Installs the global subscriber. Events go to stderr unless a log file is
/// configured, so stdout stays reserved for transport output.
pub fn init(config: &LogConfig) -> Result<(), AppError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.file.as_deref() {
        Some(path) => {
            let (dir, file_name) = split_log_path(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(true)
                .with_ansi(false)
                .with_writer(tracing_appender::rolling::never(dir, file_name))
                .try_init()
                .map_err(AppError::LoggingInit)
        }
        None => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(AppError::LoggingInit),
    }
}

fn split_log_path(path: &Path) -> Result<(&Path, &std::ffi::OsStr), AppError> {
    let file_name = path.file_name().ok_or_else(|| AppError::InvalidConfig {
        field: "logging.file",
        details: format!("{} has no file name", path.display()),
    })?;

    let dir = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    Ok((dir, file_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_file_name_logs_into_current_dir() {
        let (dir, file_name) = split_log_path(Path::new("bbsterm.log")).expect("path should split");

        assert_eq!(dir, Path::new("."));
        assert_eq!(file_name, "bbsterm.log");
    }

    #[test]
    fn rejects_path_without_file_name() {
        let error = split_log_path(Path::new("/")).expect_err("root has no file name");

        assert!(matches!(
            error,
            AppError::InvalidConfig {
                field: "logging.file",
                ..
            }
        ));
    }
}
