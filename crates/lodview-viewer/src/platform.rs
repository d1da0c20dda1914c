//! Per-user directories for configuration and logs.

use std::io;
use std::path::{Path, PathBuf};

/// Failures locating or creating the viewer's directories.
#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    /// The OS exposes no per-user configuration directory.
    #[error("no per-user configuration directory on this system; pass --config")]
    NoConfigDir,
    /// Creating the config or log directory failed.
    #[error("cannot create viewer directory: {0}")]
    Io(#[from] io::Error),
}

/// Where the viewer keeps `config.ron` and its log files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformDirs {
    /// Holds `config.ron`.
    pub config_dir: PathBuf,
    /// Holds `lodview.log` in debug builds.
    pub log_dir: PathBuf,
}

const APP_NAME: &str = "lodview";
const LOG_SUBDIR: &str = "logs";

impl PlatformDirs {
    /// Resolve the OS configuration directory without creating anything.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::NoConfigDir`] if the OS does not expose a
    /// configuration directory.
    pub fn resolve() -> Result<Self, PlatformError> {
        let base = dirs::config_dir().ok_or(PlatformError::NoConfigDir)?;
        Ok(Self::with_config_dir(base.join(APP_NAME)))
    }

    /// Use `config_dir` as given, e.g. from `--config`. Logs go beneath it.
    pub fn with_config_dir(config_dir: PathBuf) -> Self {
        let log_dir = config_dir.join(LOG_SUBDIR);
        Self {
            config_dir,
            log_dir,
        }
    }

    /// Directories rooted under `root`, for tests.
    pub fn resolve_with_root(root: &Path) -> Self {
        Self::with_config_dir(root.join(APP_NAME))
    }

    /// Create both directories on disk.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::Io`] if a directory cannot be created.
    pub fn create_dirs(&self) -> Result<(), PlatformError> {
        std::fs::create_dir_all(&self.config_dir)?;
        std::fs::create_dir_all(&self.log_dir)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_puts_logs_beneath_config() {
        let dirs = PlatformDirs::with_config_dir(PathBuf::from("custom"));
        assert_eq!(dirs.config_dir, PathBuf::from("custom"));
        assert_eq!(dirs.log_dir, Path::new("custom").join("logs"));
    }

    #[test]
    fn test_resolve_is_absolute_when_available() {
        if dirs::config_dir().is_none() {
            assert!(matches!(
                PlatformDirs::resolve(),
                Err(PlatformError::NoConfigDir)
            ));
            return;
        }
        let dirs = PlatformDirs::resolve().unwrap();
        assert!(dirs.config_dir.is_absolute());
        assert!(dirs.config_dir.ends_with(APP_NAME));
    }

    #[test]
    fn test_directory_creation() {
        let tmp = tempfile::tempdir().unwrap();
        let dirs = PlatformDirs::resolve_with_root(tmp.path());
        dirs.create_dirs().unwrap();
        assert!(dirs.config_dir.is_dir());
        assert!(dirs.log_dir.is_dir());
    }

    #[test]
    fn test_error_display() {
        let err = PlatformError::from(io::Error::other("boom"));
        assert!(err.to_string().contains("boom"));
        assert!(PlatformError::NoConfigDir.to_string().contains("--config"));
        assert!(std::error::Error::source(&err).is_some());
        assert!(std::error::Error::source(&PlatformError::NoConfigDir).is_none());
    }
}
