use crate::error::{Result, RollcallError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "students.json";
const DEFAULT_SHEET_TITLE: &str = "Student Attendance Barcodes";

/// Configuration for rollcall, stored next to the roster data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RollcallConfig {
    /// Roster filename inside the data directory.
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Heading printed on every page of the barcode sheet.
    #[serde(default = "default_sheet_title")]
    pub sheet_title: String,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_sheet_title() -> String {
    DEFAULT_SHEET_TITLE.to_string()
}

impl Default for RollcallConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            sheet_title: default_sheet_title(),
        }
    }
}

impl RollcallConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(RollcallError::Io)?;
        let config: RollcallConfig =
            serde_json::from_str(&content).map_err(RollcallError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(RollcallError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(RollcallError::Serialization)?;
        fs::write(config_path, content).map_err(RollcallError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults() {
        let config = RollcallConfig::default();
        assert_eq!(config.data_file, "students.json");
        assert_eq!(config.sheet_title, "Student Attendance Barcodes");
    }

    #[test]
    fn load_missing_config_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let config = RollcallConfig::load(dir.path()).unwrap();
        assert_eq!(config, RollcallConfig::default());
    }

    #[test]
    fn save_and_load() {
        let dir = TempDir::new().unwrap();
        let config = RollcallConfig {
            data_file: "roster.json".to_string(),
            sheet_title: "Homeroom 4B".to_string(),
        };
        config.save(dir.path()).unwrap();

        let loaded = RollcallConfig::load(dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_keys_take_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            "{\"data_file\": \"roster.json\"}",
        )
        .unwrap();

        let loaded = RollcallConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.data_file, "roster.json");
        assert_eq!(loaded.sheet_title, "Student Attendance Barcodes");
    }
}
