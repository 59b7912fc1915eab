use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the journal store file.
    pub storage: String,
    #[serde(default = "default_trend_window")]
    pub trend_window_days: i64,
    #[serde(default = "default_list_limit")]
    pub list_limit: usize,
}

fn default_trend_window() -> i64 {
    30
}
fn default_list_limit() -> usize {
    20
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage: Self::storage_dir().to_string_lossy().to_string(),
            trend_window_days: default_trend_window(),
            list_limit: default_list_limit(),
        }
    }
}

impl Config {
    /// Standard configuration directory depending on the platform.
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = std::env::var("APPDATA")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("."));
            appdata.join("medjournal")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".medjournal")
        }
    }

    /// Full path of the config file.
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("medjournal.conf")
    }

    /// Default directory for the journal store file.
    pub fn storage_dir() -> PathBuf {
        Self::config_dir().join("store")
    }

    /// Load configuration from file, or return defaults if not found or
    /// unreadable. Loading never fails: a broken config degrades to the
    /// defaults rather than blocking every command.
    pub fn load() -> Self {
        let path = Self::config_file();
        match fs::read_to_string(&path) {
            Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Create the config directory and write the configuration file.
    /// `is_test` skips the config write so tests leave no trace.
    pub fn init_all(custom_store: Option<String>, is_test: bool) -> AppResult<Config> {
        let dir = Self::config_dir();

        let store_dir = match custom_store {
            Some(path) => {
                let p = PathBuf::from(&path);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => Self::storage_dir(),
        };

        let config = Config {
            storage: store_dir.to_string_lossy().to_string(),
            trend_window_days: default_trend_window(),
            list_limit: default_list_limit(),
        };

        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml =
                serde_yaml::to_string(&config).map_err(|e| AppError::Config(e.to_string()))?;
            fs::write(Self::config_file(), yaml).map_err(|_| AppError::ConfigSave)?;
        }
        fs::create_dir_all(&store_dir)?;

        Ok(config)
    }

    /// Report missing or suspicious fields without touching the file.
    pub fn check(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if self.storage.trim().is_empty() {
            problems.push("'storage' is empty: journal data has nowhere to live".to_string());
        }
        if self.trend_window_days <= 0 {
            problems.push(format!(
                "'trend_window_days' is {}: the trend window must be at least one day",
                self.trend_window_days
            ));
        }
        if self.list_limit == 0 {
            problems.push("'list_limit' is 0: `list` would never show anything".to_string());
        }
        problems
    }
}
