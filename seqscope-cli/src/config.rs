//! Configuration handling for the seqscope CLI
//!
//! Supports loading configuration from seqscope.toml files with CLI
//! argument overrides.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub align: AlignConfig,
    #[serde(default)]
    pub dotplot: DotPlotConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Default k-mer length
    #[serde(default = "default_k")]
    pub k: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlignConfig {
    /// Default match score
    #[serde(default = "default_match_score")]
    pub match_score: i32,

    /// Default mismatch penalty
    #[serde(default = "default_mismatch_penalty")]
    pub mismatch_penalty: i32,

    /// Default linear gap penalty
    #[serde(default = "default_gap_penalty")]
    pub gap_penalty: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DotPlotConfig {
    /// Default comparison window length
    #[serde(default = "default_window")]
    pub window: usize,

    /// Default matches required within a window
    #[serde(default = "default_min_matches")]
    pub min_matches: usize,
}

// Default value functions
fn default_k() -> usize {
    seqscope_core::DEFAULT_K
}
fn default_match_score() -> i32 {
    2
}
fn default_mismatch_penalty() -> i32 {
    -1
}
fn default_gap_penalty() -> i32 {
    -2
}
fn default_window() -> usize {
    1
}
fn default_min_matches() -> usize {
    1
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self { k: default_k() }
    }
}

impl Default for AlignConfig {
    fn default() -> Self {
        Self {
            match_score: default_match_score(),
            mismatch_penalty: default_mismatch_penalty(),
            gap_penalty: default_gap_penalty(),
        }
    }
}

impl Default for DotPlotConfig {
    fn default() -> Self {
        Self {
            window: default_window(),
            min_matches: default_min_matches(),
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let config = match config_path {
            Some(path) => {
                log::info!("Loading configuration from: {}", path.display());
                Self::load_from_file(path)?
            }
            None => {
                // Try to find seqscope.toml in current directory
                let default_path = PathBuf::from("seqscope.toml");
                if default_path.exists() {
                    log::info!("Loading configuration from: seqscope.toml");
                    Self::load_from_file(&default_path)?
                } else {
                    log::debug!("Using default configuration");
                    Self::default()
                }
            }
        };

        Ok(config)
    }

    /// Load configuration from a specific TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse configuration file: {}", path.display()))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.general.k, seqscope_core::DEFAULT_K);
        assert_eq!(config.align.match_score, 2);
        assert_eq!(config.align.gap_penalty, -2);
        assert_eq!(config.dotplot.window, 1);
    }

    #[test]
    fn test_partial_file_falls_back_to_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[general]\nk = 5\n\n[align]\nmatch_score = 3").unwrap();

        let config = Config::load_from_file(file.path()).unwrap();
        assert_eq!(config.general.k, 5);
        assert_eq!(config.align.match_score, 3);
        // Unspecified fields keep their defaults
        assert_eq!(config.align.mismatch_penalty, -1);
        assert_eq!(config.dotplot.min_matches, 1);
    }

    #[test]
    fn test_malformed_file_is_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not valid toml [").unwrap();
        assert!(Config::load_from_file(file.path()).is_err());
    }
}
