//! Application configuration schemas.
//!
//! Configuration is read from an optional TOML file and overlaid with
//! environment variables prefixed with `DRIVEPATH__` via the `config` crate.

pub mod drive;
pub mod logging;

use serde::{Deserialize, Serialize};

use self::drive::DriveConfig;
use self::logging::LoggingConfig;

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Remote drive settings.
    #[serde(default)]
    pub drive: DriveConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file (missing file is allowed) and
    /// the environment.
    ///
    /// Environment variables use `__` as the section separator, e.g.
    /// `DRIVEPATH__DRIVE__AUTHORIZATION_TOKEN`.
    pub fn load(path: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("DRIVEPATH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("absent.toml");
        let config = AppConfig::load(path.to_str().expect("utf-8 path")).expect("load");

        assert_eq!(config.drive.page_size, 100);
        assert!(config.drive.include_all_drives);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_file_overrides_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("drivepath.toml");
        let mut file = std::fs::File::create(&path).expect("create");
        writeln!(
            file,
            "[drive]\npage_size = 5000\nauthorization_token = \"abc\"\n\n[logging]\nformat = \"json\""
        )
        .expect("write");

        let config = AppConfig::load(path.to_str().expect("utf-8 path")).expect("load");
        assert_eq!(config.drive.authorization_token.as_deref(), Some("abc"));
        assert_eq!(config.drive.effective_page_size(), 1000);
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "info");
    }
}
