use crate::error::{Result, ViewError};
use crate::sheets::ServiceAccountKey;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The one spreadsheet this tool reads
pub const SPREADSHEET_NAME: &str = "Puslespill";

/// Inline service account JSON or a path to it
pub const CREDENTIALS_ENV: &str = "PUSLESPILL_CREDENTIALS";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub credentials_path: Option<PathBuf>,
    /// Sort the table ascending by barcode right after loading
    pub sort_on_load: bool,
    pub bind_address: String,
    /// Built web bundle served by `puslespill serve`
    pub static_dir: Option<PathBuf>,
    pub timeout_seconds: u64,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ViewError::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("puslespill-view").join("config.json"))
    }

    pub fn set_credentials_path(&mut self, path: &Path) -> Result<()> {
        // reject unreadable keys before persisting
        ServiceAccountKey::from_file(path)?;
        let absolute = path.canonicalize()?;
        self.credentials_path = Some(absolute);
        self.save()
    }

    pub fn set_sort_on_load(&mut self, sort: bool) -> Result<()> {
        self.sort_on_load = sort;
        self.save()
    }

    /// Service account key. The environment variable wins over the config file.
    pub fn load_credentials(&self) -> Result<ServiceAccountKey> {
        if let Ok(value) = std::env::var(CREDENTIALS_ENV) {
            if !value.trim().is_empty() {
                return ServiceAccountKey::from_env_value(&value);
            }
        }

        match &self.credentials_path {
            Some(path) => ServiceAccountKey::from_file(path),
            None => Err(ViewError::MissingCredentials),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            credentials_path: None,
            sort_on_load: false,
            bind_address: "0.0.0.0:8080".into(),
            static_dir: None,
            timeout_seconds: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.credentials_path.is_none());
        assert!(!config.sort_on_load);
        assert_eq!(config.bind_address, "0.0.0.0:8080");
    }

    #[test]
    fn test_load_missing_file_gives_default() {
        let dir = tempdir().expect("Failed to create temp dir");
        let config = Config::load_from(&dir.path().join("config.json")).expect("load failed");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("nested").join("config.json");

        let config = Config {
            sort_on_load: true,
            static_dir: Some(PathBuf::from("web-wasm/dist")),
            ..Default::default()
        };
        config.save_to(&path).expect("save failed");

        let loaded = Config::load_from(&path).expect("load failed");
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "sort_on_load": true }"#).unwrap();

        let config = Config::load_from(&path).expect("load failed");
        assert!(config.sort_on_load);
        assert_eq!(config.timeout_seconds, 30);
    }

    #[test]
    fn test_corrupted_file_is_error() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ invalid json }").unwrap();

        assert!(matches!(Config::load_from(&path), Err(ViewError::JsonParse(_))));
    }
}
