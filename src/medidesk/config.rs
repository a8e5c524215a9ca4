use crate::error::{MedideskError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for medidesk, stored as config.json in the platform
/// data directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MedideskConfig {
    /// Directory holding the record files; overrides the platform
    /// default when set. The --data-dir flag overrides both.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

impl MedideskConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(MedideskError::Io)?;
        let config: MedideskConfig =
            serde_json::from_str(&content).map_err(MedideskError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(MedideskError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(MedideskError::Serialization)?;
        fs::write(config_path, content).map_err(MedideskError::Io)?;
        Ok(())
    }

    /// Formatted value for a config key, or None for an unknown key.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data-dir" => Some(
                self.data_dir
                    .as_ref()
                    .map(|dir| dir.display().to_string())
                    .unwrap_or_else(|| "(platform default)".to_string()),
            ),
            _ => None,
        }
    }

    /// Sets a config key from its string form.
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "data-dir" => {
                self.data_dir = Some(PathBuf::from(value));
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = MedideskConfig::default();
        assert_eq!(config.data_dir, None);
        assert_eq!(config.get("data-dir").unwrap(), "(platform default)");
    }

    #[test]
    fn test_unknown_key() {
        let mut config = MedideskConfig::default();
        assert_eq!(config.get("delimiter"), None);
        assert!(config.set("delimiter", ";").is_err());
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = MedideskConfig::load(dir.path()).unwrap();
        assert_eq!(config, MedideskConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();

        let mut config = MedideskConfig::default();
        config.set("data-dir", "/srv/clinic/records").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = MedideskConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.data_dir, Some(PathBuf::from("/srv/clinic/records")));
    }

    #[test]
    fn test_serialization_roundtrip() {
        let config = MedideskConfig {
            data_dir: Some(PathBuf::from("/tmp/records")),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: MedideskConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, parsed);
    }
}
