//! Settings for the browser, read from an optional RON file and overridden
//! by command-line flags.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use artwork_core::PageSize;
use artwork_engine::{CatalogSettings, DEFAULT_BASE_URL};
use catalog_logging::{catalog_info, LogDestination, DEFAULT_LOG_FILE};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::cli::Args;

pub const SETTINGS_FILENAME: &str = "artwork_browser.ron";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings from {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse settings from {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
    #[error("unsupported page size {0} (expected 12, 24 or 48)")]
    PageSize(u32),
    #[error("{0} must be at least one second")]
    ZeroTimeout(&'static str),
    #[error("unknown log level {0:?}")]
    LogLevel(String),
    #[error("unknown log destination {0:?} (expected file, terminal or both)")]
    LogDestination(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub base_url: String,
    pub default_page_size: u32,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub max_bytes: u64,
    pub log_file: PathBuf,
    pub log_level: String,
    pub log_destination: String,
}

impl Default for Settings {
    fn default() -> Self {
        let catalog = CatalogSettings::default();
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            default_page_size: PageSize::default().rows(),
            connect_timeout_secs: catalog.connect_timeout.as_secs(),
            request_timeout_secs: catalog.request_timeout.as_secs(),
            max_bytes: catalog.max_bytes,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            log_level: "info".to_string(),
            log_destination: "file".to_string(),
        }
    }
}

impl Settings {
    /// Loads the settings file and applies flag overrides.
    ///
    /// An explicit `--config` must exist; the default file is optional.
    pub fn resolve(args: &Args) -> Result<Self, SettingsError> {
        let mut settings = match &args.config {
            Some(path) => Self::load(path)?,
            None => Self::load_optional(Path::new(SETTINGS_FILENAME))?,
        };

        if let Some(base_url) = &args.base_url {
            settings.base_url = base_url.clone();
        }
        if let Some(rows) = args.page_size {
            settings.default_page_size = rows;
        }
        if let Some(destination) = &args.log {
            settings.log_destination = destination.clone();
        }

        settings.validate()?;
        Ok(settings)
    }

    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let content = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = ron::from_str(&content).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        catalog_info!("Loaded settings from {:?}", path);
        Ok(settings)
    }

    fn load_optional(path: &Path) -> Result<Self, SettingsError> {
        match Self::load(path) {
            Err(SettingsError::Read { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            other => other,
        }
    }

    fn validate(&self) -> Result<(), SettingsError> {
        self.page_size()?;
        if self.connect_timeout_secs == 0 {
            return Err(SettingsError::ZeroTimeout("connect_timeout_secs"));
        }
        if self.request_timeout_secs == 0 {
            return Err(SettingsError::ZeroTimeout("request_timeout_secs"));
        }
        self.level_filter()?;
        self.destination()?;
        Ok(())
    }

    pub fn page_size(&self) -> Result<PageSize, SettingsError> {
        PageSize::from_rows(self.default_page_size)
            .ok_or(SettingsError::PageSize(self.default_page_size))
    }

    pub fn level_filter(&self) -> Result<LevelFilter, SettingsError> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| SettingsError::LogLevel(self.log_level.clone()))
    }

    pub fn destination(&self) -> Result<LogDestination, SettingsError> {
        LogDestination::parse(&self.log_destination)
            .ok_or_else(|| SettingsError::LogDestination(self.log_destination.clone()))
    }

    pub fn catalog_settings(&self) -> CatalogSettings {
        CatalogSettings {
            base_url: self.base_url.clone(),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            max_bytes: self.max_bytes,
            ..CatalogSettings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_settings(dir: &tempfile::TempDir, content: &str) -> PathBuf {
        let path = dir.path().join(SETTINGS_FILENAME);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn partial_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_settings(&dir, "(default_page_size: 48, log_level: \"debug\")");

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.page_size().unwrap(), PageSize::FortyEight);
        assert_eq!(settings.level_filter().unwrap(), LevelFilter::Debug);
        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.request_timeout_secs, 30);
    }

    #[test]
    fn example_file_matches_defaults() {
        let example: Settings =
            ron::from_str(include_str!("../../../../artwork_browser.example.ron")).unwrap();
        assert_eq!(example, Settings::default());
    }

    #[test]
    fn flags_override_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_settings(
            &dir,
            "(base_url: \"http://file.example\", default_page_size: 48)",
        );
        let args = Args {
            config: Some(path),
            base_url: Some("http://flag.example".to_string()),
            page_size: Some(24),
            log: Some("terminal".to_string()),
        };

        let settings = Settings::resolve(&args).unwrap();
        assert_eq!(settings.base_url, "http://flag.example");
        assert_eq!(settings.page_size().unwrap(), PageSize::TwentyFour);
        assert_eq!(settings.destination().unwrap(), LogDestination::Terminal);
        assert_eq!(settings.catalog_settings().base_url, "http://flag.example");
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let args = Args {
            config: Some(dir.path().join("nope.ron")),
            ..Args::default()
        };
        assert!(matches!(
            Settings::resolve(&args),
            Err(SettingsError::Read { .. })
        ));
    }

    #[test]
    fn zero_timeout_in_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_settings(&dir, "(request_timeout_secs: 0)");
        let args = Args {
            config: Some(path),
            ..Args::default()
        };
        assert!(matches!(
            Settings::resolve(&args),
            Err(SettingsError::ZeroTimeout("request_timeout_secs"))
        ));
    }

    #[test]
    fn missing_default_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_optional(&dir.path().join(SETTINGS_FILENAME)).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_settings(&dir, "(default_page_size: \"twelve\"");
        assert!(matches!(
            Settings::load(&path),
            Err(SettingsError::Parse { .. })
        ));
    }

    #[test]
    fn invalid_values_are_rejected() {
        let settings = Settings {
            default_page_size: 10,
            ..Settings::default()
        };
        assert!(matches!(settings.validate(), Err(SettingsError::PageSize(10))));

        let settings = Settings {
            connect_timeout_secs: 0,
            ..Settings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::ZeroTimeout("connect_timeout_secs"))
        ));

        let settings = Settings {
            request_timeout_secs: 0,
            ..Settings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::ZeroTimeout("request_timeout_secs"))
        ));

        let settings = Settings {
            log_level: "loud".to_string(),
            ..Settings::default()
        };
        assert!(matches!(settings.validate(), Err(SettingsError::LogLevel(_))));

        let settings = Settings {
            log_destination: "syslog".to_string(),
            ..Settings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::LogDestination(_))
        ));
    }
}
