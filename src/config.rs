use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::constants;
use crate::error::{LinksError, Result};

/// Runtime settings. Missing keys in the config file fall back to the
/// built-in defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// CSV export URL that is fetched.
    pub sheet_url: String,
    /// Link to the spreadsheet shown in the page footer. Empty hides it.
    pub sheet_edit_url: String,
    pub table_output: PathBuf,
    pub grouped_output: PathBuf,
    pub timeout_seconds: u64,
    pub title: String,
    pub log_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sheet_url: constants::default_sheet_url(),
            sheet_edit_url: constants::default_sheet_edit_url(),
            table_output: PathBuf::from(constants::TABLE_OUTPUT_FILE),
            grouped_output: PathBuf::from(constants::GROUPED_OUTPUT_FILE),
            timeout_seconds: constants::HTTP_TIMEOUT_SECONDS,
            title: constants::PAGE_TITLE.to_string(),
            log_dir: None,
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file, or returns the defaults when no
    /// path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = fs::read_to_string(path).map_err(|e| {
            LinksError::Config(format!("Failed to read config file '{}': {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.sheet_url.trim().is_empty() {
            return Err(LinksError::Config("sheet_url must not be empty".into()));
        }
        if self.timeout_seconds == 0 {
            return Err(LinksError::Config("timeout_seconds must be positive".into()));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}
