//! Configuration handling for the SeqView CLI
//!
//! Supports loading configuration from seqview.toml files with CLI argument overrides.

use anyhow::{Context, Result};
use seqview_core::map::{DEFAULT_FRAGMENT_HEIGHT, DEFAULT_FRAGMENT_MARGIN, DEFAULT_MAP_MARGIN, DEFAULT_TICKS};
use seqview_core::{MapStyle, SortMode};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG_FILE: &str = "seqview.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub map: MapConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub alignment: AlignmentConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    /// Number of axis intervals; the axis gets one more tick than this
    #[serde(default = "default_n_ticks")]
    pub n_ticks: u32,

    /// Height of one fragment bar in pixels
    #[serde(default = "default_fragment_height")]
    pub fragment_height: u32,

    /// Space above and below each fragment bar in pixels
    #[serde(default = "default_fragment_margin")]
    pub fragment_margin: u32,

    /// Padding inside each track outline in pixels
    #[serde(default = "default_map_margin")]
    pub map_margin: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Track ordering (none, by-name, by-leftmost-start, by-longest-feature)
    #[serde(default)]
    pub sort: SortMode,

    /// Input index of the track to keep on the first row
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pin: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlignmentConfig {
    /// Alignment columns per printed line
    #[serde(default = "default_line_length")]
    pub line_length: usize,
}

fn default_n_ticks() -> u32 {
    DEFAULT_TICKS
}
fn default_fragment_height() -> u32 {
    DEFAULT_FRAGMENT_HEIGHT
}
fn default_fragment_margin() -> u32 {
    DEFAULT_FRAGMENT_MARGIN
}
fn default_map_margin() -> u32 {
    DEFAULT_MAP_MARGIN
}
fn default_line_length() -> usize {
    seqview_core::blocks::DEFAULT_LINE_LENGTH
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            n_ticks: default_n_ticks(),
            fragment_height: default_fragment_height(),
            fragment_margin: default_fragment_margin(),
            map_margin: default_map_margin(),
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            sort: SortMode::None,
            pin: None,
        }
    }
}

impl Default for AlignmentConfig {
    fn default() -> Self {
        Self {
            line_length: default_line_length(),
        }
    }
}

impl MapConfig {
    pub fn to_map_style(&self) -> MapStyle {
        MapStyle {
            fragment_height: self.fragment_height,
            fragment_margin: self.fragment_margin,
            map_margin: self.map_margin,
            n_ticks: self.n_ticks,
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
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    log::info!("Loading configuration from: {}", DEFAULT_CONFIG_FILE);
                    Self::load_from_file(&default_path)?
                } else {
                    log::debug!("Using default configuration");
                    Self::default()
                }
            }
        };

        Ok(config)
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse configuration file: {}", path.display()))?;

        Ok(config)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write configuration file: {}", path.display()))?;

        Ok(())
    }

    /// Default configuration rendered as TOML
    pub fn example_toml() -> Result<String> {
        toml::to_string_pretty(&Self::default()).context("Failed to serialize example configuration")
    }
}
