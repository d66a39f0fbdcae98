use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::LevelTiers;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_max_radius_km")]
    pub max_radius_km: f64,
    #[serde(default = "default_club_limit")]
    pub club_limit: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            max_radius_km: default_max_radius_km(),
            club_limit: default_club_limit(),
        }
    }
}

fn default_max_radius_km() -> f64 { 100.0 }
fn default_club_limit() -> usize { 10 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub tiers: TiersConfig,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct TiersConfig {
    #[serde(default = "default_exact_score")]
    pub exact: u8,
    #[serde(default = "default_adjacent_score")]
    pub adjacent: u8,
    #[serde(default = "default_fallback_score")]
    pub fallback: u8,
}

impl Default for TiersConfig {
    fn default() -> Self {
        Self {
            exact: default_exact_score(),
            adjacent: default_adjacent_score(),
            fallback: default_fallback_score(),
        }
    }
}

fn default_exact_score() -> u8 { 100 }
fn default_adjacent_score() -> u8 { 80 }
fn default_fallback_score() -> u8 { 40 }

impl From<TiersConfig> for LevelTiers {
    fn from(config: TiersConfig) -> Self {
        Self {
            exact: config.exact,
            adjacent: config.adjacent,
            fallback: config.fallback,
        }
    }
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with PADEL__)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with PADEL__)
            // e.g., PADEL__MATCHING__MAX_RADIUS_KM -> matching.max_radius_km
            .add_source(
                Environment::with_prefix("PADEL")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("PADEL")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
