use crate::error::{CustbookError, Result};
use crate::store::fs::DEFAULT_DATA_FILE;
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Environment variable overriding the directory `config.json` is read from.
pub const CONFIG_DIR_ENV: &str = "CUSTBOOK_CONFIG_DIR";

/// Configuration for custbook, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct CustbookConfig {
    /// Backing file used when no `--file` is given
    #[serde(default)]
    pub data_file: Option<PathBuf>,
}

impl CustbookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(CustbookError::Io)?;
        let config: CustbookConfig =
            serde_json::from_str(&content).map_err(CustbookError::Serialization)?;
        Ok(config)
    }

    /// Picks the backing file: an explicit path wins, then the configured
    /// `data_file`, then `customers.json` in the working directory.
    pub fn resolve_data_file(&self, explicit: Option<PathBuf>) -> PathBuf {
        explicit
            .or_else(|| self.data_file.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE))
    }
}

/// Directory holding `config.json`: `$CUSTBOOK_CONFIG_DIR` if set, otherwise
/// the platform config directory.
pub fn config_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "custbook", "custbook")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| CustbookError::Config("Could not determine config dir".to_string()))
}
