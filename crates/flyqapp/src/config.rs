//! # Configuration
//!
//! Settings are managed by [`confique`]: layered loading from environment
//! variables, an optional TOML file in the OS config directory, and compiled
//! defaults.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `param_name` | `filter` | Query parameter name used when printing share URLs |
//! | `default_color` | `#4a90d9` | Color assigned to saved filters when none is given |
//! | `data_dir` | OS data dir | Where filters and the session tree live (`FLYQ_DATA_DIR`) |

use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{FilterError, Result};

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FlyqConfig {
    /// Query parameter name for shareable filter URLs.
    #[config(default = "filter")]
    pub param_name: String,

    /// Color assigned to saved filters when none is given.
    #[config(default = "#4a90d9")]
    pub default_color: String,

    /// Overrides the OS-default data directory.
    #[config(env = "FLYQ_DATA_DIR")]
    pub data_dir: Option<PathBuf>,
}

impl Default for FlyqConfig {
    fn default() -> Self {
        Self {
            param_name: "filter".to_string(),
            default_color: "#4a90d9".to_string(),
            data_dir: None,
        }
    }
}

impl FlyqConfig {
    /// Loads env > config file > defaults. A missing config file is fine;
    /// a malformed one is an error.
    pub fn load() -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(dirs) = directories::ProjectDirs::from("", "", "flyq") {
            builder = builder.file(dirs.config_dir().join("flyq.toml"));
        }
        builder
            .load()
            .map_err(|err| FilterError::Config(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FlyqConfig::default();
        assert_eq!(config.param_name, "filter");
        assert_eq!(config.default_color, "#4a90d9");
        assert!(config.data_dir.is_none());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flyq.toml");
        std::fs::write(&path, "param_name = \"q\"\n").unwrap();

        let config: FlyqConfig = FlyqConfig::builder().file(&path).load().unwrap();
        assert_eq!(config.param_name, "q");
        assert_eq!(config.default_color, "#4a90d9");
    }

    #[test]
    fn test_missing_file_falls_through_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config: FlyqConfig = FlyqConfig::builder()
            .file(dir.path().join("absent.toml"))
            .load()
            .unwrap();
        assert_eq!(config, FlyqConfig::default());
    }
}
