use crate::error::Result;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "customers.json";

/// Configuration for rolodex, stored in `<home>/config.json`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RolodexConfig {
    /// Store file name, relative to the home directory
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Colorize terminal output
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_color() -> bool {
    true
}

impl Default for RolodexConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            color: default_color(),
        }
    }
}

impl RolodexConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: RolodexConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Where the store lives when no explicit file is given.
    pub fn data_path<P: AsRef<Path>>(&self, home: P) -> PathBuf {
        home.as_ref().join(&self.data_file)
    }
}
