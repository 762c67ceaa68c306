//! User settings for the portfolio tool
//!
//! Display preferences and the default log filter. The settings file is
//! read if present and never written: nothing is kept between runs.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use super::paths::ConfigPaths;
use crate::display::DEFAULT_TIMESTAMP_FORMAT;
use crate::error::PortfolioError;

/// User settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Currency symbol placed before amounts (empty by default)
    #[serde(default)]
    pub currency_symbol: String,

    /// Timestamp format for transaction registers (strftime format)
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,

    /// `tracing` filter directive used when `RUST_LOG` is unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
}

fn default_timestamp_format() -> String {
    DEFAULT_TIMESTAMP_FORMAT.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: String::new(),
            timestamp_format: default_timestamp_format(),
            log_filter: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if there is no file
    pub fn load_or_default(paths: &ConfigPaths) -> Result<Self, PortfolioError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| PortfolioError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| PortfolioError::Config(format!("Failed to parse settings file: {}", e)))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject values that parse as JSON but cannot be used
    pub fn validate(&self) -> Result<(), PortfolioError> {
        if StrftimeItems::new(&self.timestamp_format).any(|item| matches!(item, Item::Error)) {
            return Err(PortfolioError::Config(format!(
                "Invalid timestamp_format '{}' in settings file",
                self.timestamp_format
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "");
        assert_eq!(settings.timestamp_format, "%Y-%m-%d %H:%M:%S");
        assert!(settings.log_filter.is_none());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ConfigPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_default(&paths).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_load_partial_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ConfigPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{ "currency_symbol": "£" }"#).unwrap();

        let settings = Settings::load_or_default(&paths).unwrap();
        assert_eq!(settings.currency_symbol, "£");
        assert_eq!(settings.timestamp_format, "%Y-%m-%d %H:%M:%S");
    }

    #[test]
    fn test_malformed_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ConfigPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_default(&paths).unwrap_err();
        assert!(matches!(err, PortfolioError::Config(_)));
    }

    #[test]
    fn test_invalid_timestamp_format() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ConfigPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{ "timestamp_format": "%Q" }"#).unwrap();

        let err = Settings::load_or_default(&paths).unwrap_err();
        assert!(matches!(err, PortfolioError::Config(_)));
        assert!(err.to_string().contains("%Q"));
    }

    #[test]
    fn test_validate() {
        assert!(Settings::default().validate().is_ok());

        let mut settings = Settings::default();
        settings.timestamp_format = "%d/%m/%Y %H:%M".into();
        assert!(settings.validate().is_ok());

        settings.timestamp_format = "%Y-%m-%d %".into();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let settings = Settings {
            currency_symbol: "€".into(),
            timestamp_format: "%d/%m/%Y".into(),
            log_filter: Some("portfolio_cli=debug".into()),
        };
        let json = serde_json::to_string(&settings).unwrap();
        let deserialized: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, deserialized);
    }
}
