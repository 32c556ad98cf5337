use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::core::scoring::ScoringConfig;
use crate::models::{CategoryAffinity, ScoringWeights, SortKey};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_min_match")]
    pub min_match: u32,
    #[serde(default = "default_sort_by")]
    pub sort_by: String,
    #[serde(default = "default_interest_bonus")]
    pub interest_bonus: u32,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            min_match: default_min_match(),
            sort_by: default_sort_by(),
            interest_bonus: default_interest_bonus(),
        }
    }
}

fn default_min_match() -> u32 { 0 }
fn default_sort_by() -> String { "match".to_string() }
fn default_interest_bonus() -> u32 { 10 }

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringSettings {
    /// Weight profile name: "standard" or "relaxed"
    #[serde(default = "default_profile")]
    pub profile: String,
    /// Cross-category pairs that earn partial category credit
    #[serde(default)]
    pub category_affinity: Vec<CategoryAffinity>,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            profile: default_profile(),
            category_affinity: Vec::new(),
        }
    }
}

fn default_profile() -> String { "standard".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "plain".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with SCHOLAR__)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with SCHOLAR__)
            // e.g., SCHOLAR__SCORING__PROFILE -> scoring.profile
            .add_source(
                Environment::with_prefix("SCHOLAR")
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
                Environment::with_prefix("SCHOLAR")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Resolve the scoring sections into engine configuration. Unknown
    /// profile names fall back to the standard weights.
    pub fn to_scoring_config(&self) -> ScoringConfig {
        let weights = match self.scoring.profile.as_str() {
            "relaxed" => ScoringWeights::relaxed(),
            _ => ScoringWeights::standard(),
        };
        ScoringConfig {
            weights,
            category_affinity: self.scoring.category_affinity.clone(),
            interest_bonus: self.matching.interest_bonus,
        }
    }

    /// Parsed default sort key, falling back to match score order
    pub fn default_sort_key(&self) -> SortKey {
        self.matching.sort_by.parse().unwrap_or_default()
    }
}
