use crate::core::{IngestError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One (file, asset) pair driving one ingestion loop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WellSource {
    pub file_path: String,
    pub asset_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub wells: Vec<WellSource>,
    #[serde(default = "default_output_path")]
    pub output_path: String,
}

fn default_output_path() -> String {
    "samples.jsonl".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wells: vec![
                WellSource {
                    file_path: "sources/well03101_refined.csv".to_string(),
                    asset_name: "well03101".to_string(),
                },
                WellSource {
                    file_path: "sources/well05601_refined.csv".to_string(),
                    asset_name: "well05601".to_string(),
                },
            ],
            output_path: default_output_path(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&raw)?;

        if config.wells.is_empty() {
            return Err(IngestError::Config("no wells configured".to_string()));
        }

        Ok(config)
    }

    /// A missing config file is not an error: the built-in two-well setup
    /// applies. A present but malformed file is fatal.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}
