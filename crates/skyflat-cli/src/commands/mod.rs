pub mod config;
pub mod flatten;
pub mod gradient;
pub mod points;
pub mod subtract;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use skyflat_core::error::SkyflatError;
use skyflat_core::pipeline::config::SkyflatConfig;

/// Search options shared by `points`, `gradient` and `flatten`.
#[derive(Args)]
pub struct SearchOptions {
    /// Config file (TOML); replaces the command defaults, flags below override it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Brightness cutoff (0-255) separating background from stars
    #[arg(long)]
    pub threshold: Option<f32>,

    /// Number of columns scanned from each edge for a background point
    #[arg(long)]
    pub columns: Option<usize>,
}

impl SearchOptions {
    /// Resolve the effective config: `defaults`, then the config file, then flags.
    pub fn resolve(&self, defaults: SkyflatConfig) -> Result<SkyflatConfig> {
        let mut config = match self.config {
            Some(ref path) => SkyflatConfig::load(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?,
            None => defaults,
        };
        if let Some(threshold) = self.threshold {
            config.threshold = threshold;
        }
        if let Some(columns) = self.columns {
            config.num_columns = columns;
        }
        Ok(config)
    }
}

/// Wrap a core error with the message a user should act on.
pub fn with_hint(e: SkyflatError) -> anyhow::Error {
    let hint = e.user_hint();
    anyhow::Error::new(e).context(hint)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use skyflat_core::consts::{DEFAULT_SEARCH_COLUMNS, GRADIENT_SEARCH_COLUMNS};
    use skyflat_core::pipeline::config::SkyflatConfig;

    use super::SearchOptions;
    use crate::commands::points::points_defaults;

    fn options(
        config: Option<PathBuf>,
        threshold: Option<f32>,
        columns: Option<usize>,
    ) -> SearchOptions {
        SearchOptions {
            config,
            threshold,
            columns,
        }
    }

    #[test]
    fn test_points_defaults_use_wide_window() {
        let config = options(None, None, None).resolve(points_defaults()).unwrap();
        assert_eq!(config.num_columns, DEFAULT_SEARCH_COLUMNS);
        assert_eq!(config.threshold, 128.0);
    }

    #[test]
    fn test_gradient_defaults_use_narrow_window() {
        let config = options(None, None, None)
            .resolve(SkyflatConfig::default())
            .unwrap();
        assert_eq!(config.num_columns, GRADIENT_SEARCH_COLUMNS);
    }

    #[test]
    fn test_config_file_then_flags() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("skyflat.toml");
        std::fs::write(&path, "threshold = 90.0\nnum_columns = 40\n").unwrap();

        let config = options(Some(path.clone()), None, None)
            .resolve(points_defaults())
            .unwrap();
        assert_eq!(config.threshold, 90.0);
        assert_eq!(config.num_columns, 40);

        let config = options(Some(path), None, Some(5))
            .resolve(points_defaults())
            .unwrap();
        assert_eq!(config.threshold, 90.0);
        assert_eq!(config.num_columns, 5);
    }

    #[test]
    fn test_missing_config_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = options(Some(dir.path().join("missing.toml")), None, None)
            .resolve(points_defaults());
        assert!(result.is_err());
    }
}
