//! Dashboard configuration, read from an optional JSON file.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File looked up in the working directory at startup.
pub const CONFIG_FILE: &str = "food_waste_dashboard.json";

pub const DEFAULT_DATASET: &str = "cleaned_global_food_wastage_dataseta.csv";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Invalid config {path}: export size must be non-zero, got {width}x{height}")]
    ExportSize {
        path: PathBuf,
        width: u32,
        height: u32,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub dataset_path: PathBuf,
    pub window_size: [f32; 2],
    pub log_level: String,
    pub export_width: u32,
    pub export_height: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(DEFAULT_DATASET),
            window_size: [1400.0, 800.0],
            log_level: "info".to_string(),
            export_width: 1200,
            export_height: 800,
        }
    }
}

impl DashboardConfig {
    /// Load `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        if config.export_width == 0 || config.export_height == 0 {
            return Err(ConfigError::ExportSize {
                path: path.to_path_buf(),
                width: config.export_width,
                height: config.export_height,
            });
        }
        Ok(config)
    }

    pub fn export_size(&self) -> (u32, u32) {
        (self.export_width, self.export_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = DashboardConfig::load_or_default(dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(cfg, DashboardConfig::default());
        assert_eq!(cfg.dataset_path, PathBuf::from(DEFAULT_DATASET));
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, r#"{ "dataset_path": "data/waste.csv", "log_level": "debug" }"#).unwrap();

        let cfg = DashboardConfig::load_or_default(&path).unwrap();
        assert_eq!(cfg.dataset_path, PathBuf::from("data/waste.csv"));
        assert_eq!(cfg.log_level, "debug");
        assert_eq!(cfg.export_size(), (1200, 800));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            DashboardConfig::load_or_default(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn zero_export_size_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);

        fs::write(&path, r#"{ "export_width": 0 }"#).unwrap();
        match DashboardConfig::load(&path) {
            Err(ConfigError::ExportSize { width, height, .. }) => assert_eq!((width, height), (0, 800)),
            other => panic!("expected ExportSize, got {other:?}"),
        }

        fs::write(&path, r#"{ "export_height": 0 }"#).unwrap();
        assert!(matches!(
            DashboardConfig::load_or_default(&path),
            Err(ConfigError::ExportSize { .. })
        ));
    }
}
