use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Conversion parameters suitable for config files and scripted runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertParams {
    /// Rename specification, e.g. `full_name:name,dob:date_of_birth`
    pub rename: Option<String>,
    /// If false, the date coercion stage is skipped
    pub parse_dates: bool,
    /// Optional path for a JSON conversion report
    pub report: Option<PathBuf>,
}

impl Default for ConvertParams {
    fn default() -> Self {
        Self {
            rename: None,
            parse_dates: true,
            report: None,
        }
    }
}

impl ConvertParams {
    /// Load parameters from a JSON file. Absent fields take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let config_err = |message: String| Error::Config {
            path: path.to_path_buf(),
            message,
        };
        let text = std::fs::read_to_string(path).map_err(|e| config_err(e.to_string()))?;
        serde_json::from_str(&text).map_err(|e| config_err(e.to_string()))
    }
}
