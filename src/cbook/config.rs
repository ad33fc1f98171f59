use crate::error::{CbookError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "contacts.json";
const DEFAULT_PAGE_SIZE: usize = 3;

pub const KEYS: [&str; 2] = ["data-file", "page-size"];

/// Configuration for cbook, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CbookConfig {
    /// File the contacts are saved to, relative to the data dir
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Contacts per page in `show all`
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for CbookConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            page_size: default_page_size(),
        }
    }
}

impl CbookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(CbookError::Io)?;
        let config: CbookConfig =
            serde_json::from_str(&content).map_err(CbookError::Serialization)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(CbookError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(CbookError::Serialization)?;
        fs::write(config_path, content).map_err(CbookError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data-file" => Some(self.data_file.clone()),
            "page-size" => Some(self.page_size.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "data-file" => {
                if value.trim().is_empty() {
                    return Err(CbookError::Config("data-file cannot be empty".into()));
                }
                self.data_file = value.trim().to_string();
            }
            "page-size" => self.page_size = parse_page_size(value)?,
            other => return Err(CbookError::Config(format!("Unknown config key: {}", other))),
        }
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(CbookError::Config("page-size must be at least 1".into()));
        }
        if self.data_file.trim().is_empty() {
            return Err(CbookError::Config("data-file cannot be empty".into()));
        }
        Ok(())
    }
}

pub fn parse_page_size(value: &str) -> Result<usize> {
    match value.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(CbookError::Config(format!(
            "page-size must be a positive number, got '{}'",
            value
        ))),
    }
}
