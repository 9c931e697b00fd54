use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::background::SearchParams;
use crate::consts::{DEFAULT_THRESHOLD, GRADIENT_SEARCH_COLUMNS};
use crate::error::Result;

/// Settings for the gradient, subtract and flatten operations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkyflatConfig {
    /// Grayscale pixels at or below this value count as background.
    #[serde(default = "default_threshold")]
    pub threshold: f32,
    /// Number of columns scanned inward from each edge.
    #[serde(default = "default_num_columns")]
    pub num_columns: usize,
    /// Directory receiving `output.png` and `output_gradient.png`.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_threshold() -> f32 {
    DEFAULT_THRESHOLD
}
fn default_num_columns() -> usize {
    GRADIENT_SEARCH_COLUMNS
}
fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for SkyflatConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            num_columns: GRADIENT_SEARCH_COLUMNS,
            output_dir: default_output_dir(),
        }
    }
}

impl SkyflatConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn search(&self) -> SearchParams {
        SearchParams {
            threshold: self.threshold,
            num_columns: self.num_columns,
        }
    }
}
