use crate::error::{LibrisError, Result};
use crate::view::{ViewOptions, DEFAULT_HISTORY_LIMIT, DEFAULT_LOCATION_PLACEHOLDER};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

pub const KEY_HISTORY_LIMIT: &str = "history-limit";
pub const KEY_LOCATION_PLACEHOLDER: &str = "location-placeholder";

/// Configuration for libris, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LibrisConfig {
    /// Maximum number of history entries shown per copy
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    /// Text shown in place of an empty copy location
    #[serde(default = "default_location_placeholder")]
    pub location_placeholder: String,
}

fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

fn default_location_placeholder() -> String {
    DEFAULT_LOCATION_PLACEHOLDER.to_string()
}

impl Default for LibrisConfig {
    fn default() -> Self {
        Self {
            history_limit: default_history_limit(),
            location_placeholder: default_location_placeholder(),
        }
    }
}

impl LibrisConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            LibrisError::Config(format!("{}: {}", config_path.display(), e))
        })?;
        if config.history_limit == 0 {
            return Err(LibrisError::Config(format!(
                "{}: history_limit must be at least 1",
                config_path.display()
            )));
        }
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn view_options(&self) -> ViewOptions {
        ViewOptions {
            history_limit: self.history_limit,
            location_placeholder: self.location_placeholder.clone(),
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            KEY_HISTORY_LIMIT => Some(self.history_limit.to_string()),
            KEY_LOCATION_PLACEHOLDER => Some(self.location_placeholder.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            KEY_HISTORY_LIMIT => {
                let limit: usize = value
                    .trim()
                    .parse()
                    .map_err(|_| format!("{} must be a whole number, got {:?}", key, value))?;
                if limit == 0 {
                    return Err(format!("{} must be at least 1", key));
                }
                self.history_limit = limit;
                Ok(())
            }
            KEY_LOCATION_PLACEHOLDER => {
                self.location_placeholder = value.to_string();
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }

    pub fn list_all(&self) -> Vec<(&'static str, String)> {
        vec![
            (KEY_HISTORY_LIMIT, self.history_limit.to_string()),
            (KEY_LOCATION_PLACEHOLDER, self.location_placeholder.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = LibrisConfig::default();
        assert_eq!(config.history_limit, 5);
        assert_eq!(config.view_options(), ViewOptions::default());
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();
        let config = LibrisConfig::load(temp.path().join("nowhere")).unwrap();
        assert_eq!(config, LibrisConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();
        let mut config = LibrisConfig::default();
        config.set(KEY_HISTORY_LIMIT, "3").unwrap();
        config.save(temp.path()).unwrap();

        let loaded = LibrisConfig::load(temp.path()).unwrap();
        assert_eq!(loaded.history_limit, 3);
        assert_eq!(loaded.view_options().history_limit, 3);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILENAME), r#"{"history_limit": 2}"#).unwrap();
        let loaded = LibrisConfig::load(temp.path()).unwrap();
        assert_eq!(loaded.history_limit, 2);
        assert_eq!(loaded.location_placeholder, "—");
    }

    #[test]
    fn test_malformed_file_is_a_config_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILENAME), "{ nope").unwrap();
        assert!(matches!(
            LibrisConfig::load(temp.path()),
            Err(LibrisError::Config(_))
        ));
    }

    #[test]
    fn test_zero_history_limit_in_file_is_rejected() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILENAME), r#"{"history_limit": 0}"#).unwrap();
        let err = LibrisConfig::load(temp.path()).unwrap_err();
        assert!(matches!(err, LibrisError::Config(_)));
        assert!(err.to_string().contains("history_limit must be at least 1"));
    }

    #[test]
    fn test_set_validates_values() {
        let mut config = LibrisConfig::default();
        assert!(config.set(KEY_HISTORY_LIMIT, "0").is_err());
        assert!(config.set(KEY_HISTORY_LIMIT, "many").is_err());
        assert!(config.set("colour", "red").is_err());
        config.set(KEY_LOCATION_PLACEHOLDER, "n/a").unwrap();
        assert_eq!(config.get(KEY_LOCATION_PLACEHOLDER).unwrap(), "n/a");
    }
}
