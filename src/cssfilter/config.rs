use crate::error::{FilterError, Result};
use crate::gesture::{Multipliers, DEFAULT_ROW_HEIGHT};
use crate::list::UnknownKindPolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Keys accepted by [`EditorConfig::get`] and [`EditorConfig::set`].
pub const CONFIG_KEYS: &[&str] = &[
    "row-height",
    "slow-multiplier",
    "fast-multiplier",
    "unknown-kinds",
];

/// Editor configuration, stored as `config.json` in the config directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorConfig {
    /// Height in pixels of one row, used to turn a row drag into an index
    #[serde(default = "default_row_height")]
    pub row_height: f64,

    /// Label-drag multipliers for the slow and fast modifiers
    #[serde(default)]
    pub multipliers: Multipliers,

    /// Whether unknown filter names abort a parse or are skipped
    #[serde(default)]
    pub unknown_kinds: UnknownKindPolicy,
}

fn default_row_height() -> f64 {
    DEFAULT_ROW_HEIGHT
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            row_height: DEFAULT_ROW_HEIGHT,
            multipliers: Multipliers::default(),
            unknown_kinds: UnknownKindPolicy::default(),
        }
    }
}

impl EditorConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: EditorConfig = serde_json::from_str(&content)?;
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

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "row-height" => Some(self.row_height.to_string()),
            "slow-multiplier" => Some(self.multipliers.slow.to_string()),
            "fast-multiplier" => Some(self.multipliers.fast.to_string()),
            "unknown-kinds" => Some(self.unknown_kinds.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "row-height" => self.row_height = parse_positive(key, value)?,
            "slow-multiplier" => self.multipliers.slow = parse_positive(key, value)?,
            "fast-multiplier" => self.multipliers.fast = parse_positive(key, value)?,
            "unknown-kinds" => {
                self.unknown_kinds = value.parse().map_err(FilterError::Config)?;
            }
            other => {
                return Err(FilterError::Config(format!(
                    "Unknown config key: {}",
                    other
                )))
            }
        }
        Ok(())
    }
}

fn parse_positive(key: &str, value: &str) -> Result<f64> {
    match value.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => Ok(v),
        _ => Err(FilterError::Config(format!(
            "{} must be a positive number, got '{}'",
            key, value
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EditorConfig::default();
        assert_eq!(config.row_height, 32.0);
        assert_eq!(config.multipliers.slow, 0.1);
        assert_eq!(config.multipliers.fast, 10.0);
        assert_eq!(config.unknown_kinds, UnknownKindPolicy::Reject);
    }

    #[test]
    fn test_get_and_set() {
        let mut config = EditorConfig::default();
        config.set("row-height", "24").unwrap();
        config.set("unknown-kinds", "skip").unwrap();
        assert_eq!(config.get("row-height").as_deref(), Some("24"));
        assert_eq!(config.get("unknown-kinds").as_deref(), Some("skip"));
        assert_eq!(config.get("fast-multiplier").as_deref(), Some("10"));
        assert!(config.get("colour").is_none());
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = EditorConfig::default();
        assert!(config.set("row-height", "0").is_err());
        assert!(config.set("row-height", "tall").is_err());
        assert!(config.set("slow-multiplier", "-1").is_err());
        assert!(config.set("unknown-kinds", "maybe").is_err());
        assert!(config.set("colour", "red").is_err());
        assert_eq!(config, EditorConfig::default());
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = EditorConfig::load(temp_dir.path().join("absent")).unwrap();
        assert_eq!(config, EditorConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dir = temp_dir.path().join("nested");

        let mut config = EditorConfig::default();
        config.set("slow-multiplier", "0.5").unwrap();
        config.save(&dir).unwrap();

        let loaded = EditorConfig::load(&dir).unwrap();
        assert_eq!(loaded.multipliers.slow, 0.5);
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILENAME),
            r#"{ "unknown_kinds": "skip" }"#,
        )
        .unwrap();

        let loaded = EditorConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.unknown_kinds, UnknownKindPolicy::Skip);
        assert_eq!(loaded.row_height, 32.0);
    }
}
