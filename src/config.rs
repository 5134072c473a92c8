use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::models::{ScoringWeights, TagThresholds};

/// Errors raised while loading or validating configuration
///
/// Invalid configuration is rejected here, at load time; the scoring and
/// matching calls themselves never validate per request.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] ConfigError),

    #[error("invalid scoring weights: {0}")]
    InvalidWeights(String),

    #[error("invalid tag thresholds: {0}")]
    InvalidThresholds(String),

    #[error("invalid matching settings: {0}")]
    InvalidMatching(String),
}

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
    #[serde(default)]
    pub thresholds: ThresholdsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_budget_explicit_weight")]
    pub budget_explicit: f64,
    #[serde(default = "default_budget_inferred_weight")]
    pub budget_inferred: f64,
    #[serde(default = "default_location_explicit_weight")]
    pub location_explicit: f64,
    #[serde(default = "default_location_inferred_weight")]
    pub location_inferred: f64,
    #[serde(default = "default_urgency_explicit_weight")]
    pub urgency_explicit: f64,
    #[serde(default = "default_urgency_inferred_weight")]
    pub urgency_inferred: f64,
    #[serde(default = "default_financing_weight")]
    pub financing: f64,
    #[serde(default = "default_repeat_interest_weight")]
    pub repeat_interest: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            budget_explicit: default_budget_explicit_weight(),
            budget_inferred: default_budget_inferred_weight(),
            location_explicit: default_location_explicit_weight(),
            location_inferred: default_location_inferred_weight(),
            urgency_explicit: default_urgency_explicit_weight(),
            urgency_inferred: default_urgency_inferred_weight(),
            financing: default_financing_weight(),
            repeat_interest: default_repeat_interest_weight(),
        }
    }
}

fn default_budget_explicit_weight() -> f64 { 0.30 }
fn default_budget_inferred_weight() -> f64 { 0.25 }
fn default_location_explicit_weight() -> f64 { 0.30 }
fn default_location_inferred_weight() -> f64 { 0.25 }
fn default_urgency_explicit_weight() -> f64 { 0.20 }
fn default_urgency_inferred_weight() -> f64 { 0.15 }
fn default_financing_weight() -> f64 { 0.10 }
fn default_repeat_interest_weight() -> f64 { 0.10 }

#[derive(Debug, Clone, Deserialize)]
pub struct ThresholdsConfig {
    #[serde(default = "default_hot_threshold")]
    pub hot: f64,
    #[serde(default = "default_warm_threshold")]
    pub warm: f64,
}

impl Default for ThresholdsConfig {
    fn default() -> Self {
        Self {
            hot: default_hot_threshold(),
            warm: default_warm_threshold(),
        }
    }
}

fn default_hot_threshold() -> f64 { 0.60 }
fn default_warm_threshold() -> f64 { 0.35 }

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_price_tolerance")]
    pub price_tolerance: f64,
    #[serde(default = "default_match_limit")]
    pub default_limit: u16,
    #[serde(default = "default_max_limit")]
    pub max_limit: u16,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            price_tolerance: default_price_tolerance(),
            default_limit: default_match_limit(),
            max_limit: default_max_limit(),
        }
    }
}

fn default_price_tolerance() -> f64 { 0.10 }
fn default_match_limit() -> u16 { 3 }
fn default_max_limit() -> u16 { 10 }

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
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with SERENITY__)
    pub fn load() -> Result<Self, SettingsError> {
        let raw = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(
                Environment::with_prefix("SERENITY")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Self = raw.try_deserialize().map_err(SettingsError::Load)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let raw = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("SERENITY")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Self = raw.try_deserialize().map_err(SettingsError::Load)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject invalid configuration before anything is scored with it
    pub fn validate(&self) -> Result<(), SettingsError> {
        validate_weights(&self.scoring.weights)?;
        validate_thresholds(&self.scoring.thresholds)?;

        let tolerance = self.matching.price_tolerance;
        if !tolerance.is_finite() || tolerance <= 0.0 || tolerance >= 1.0 {
            return Err(SettingsError::InvalidMatching(format!(
                "price_tolerance must be in (0, 1), got {}",
                tolerance
            )));
        }
        if self.matching.default_limit == 0 {
            return Err(SettingsError::InvalidMatching(
                "default_limit must be at least 1".to_string(),
            ));
        }
        if self.matching.default_limit > self.matching.max_limit {
            return Err(SettingsError::InvalidMatching(format!(
                "default_limit {} exceeds max_limit {}",
                self.matching.default_limit, self.matching.max_limit
            )));
        }

        Ok(())
    }

    /// Domain-side weight table for the scorer
    pub fn scoring_weights(&self) -> ScoringWeights {
        let weights = &self.scoring.weights;
        ScoringWeights {
            budget_explicit: weights.budget_explicit,
            budget_inferred: weights.budget_inferred,
            location_explicit: weights.location_explicit,
            location_inferred: weights.location_inferred,
            urgency_explicit: weights.urgency_explicit,
            urgency_inferred: weights.urgency_inferred,
            financing: weights.financing,
            repeat_interest: weights.repeat_interest,
        }
    }

    /// Domain-side threshold bands for the scorer
    pub fn tag_thresholds(&self) -> TagThresholds {
        TagThresholds {
            hot: self.scoring.thresholds.hot,
            warm: self.scoring.thresholds.warm,
        }
    }
}

fn validate_weights(weights: &WeightsConfig) -> Result<(), SettingsError> {
    let named = [
        ("budget_explicit", weights.budget_explicit),
        ("budget_inferred", weights.budget_inferred),
        ("location_explicit", weights.location_explicit),
        ("location_inferred", weights.location_inferred),
        ("urgency_explicit", weights.urgency_explicit),
        ("urgency_inferred", weights.urgency_inferred),
        ("financing", weights.financing),
        ("repeat_interest", weights.repeat_interest),
    ];
    for (name, value) in named {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(SettingsError::InvalidWeights(format!(
                "{} must be in [0, 1], got {}",
                name, value
            )));
        }
    }

    if weights.budget_inferred > weights.budget_explicit
        || weights.location_inferred > weights.location_explicit
        || weights.urgency_inferred > weights.urgency_explicit
    {
        return Err(SettingsError::InvalidWeights(
            "an inferred weight exceeds its explicit counterpart".to_string(),
        ));
    }

    let max_total = weights.budget_explicit.max(weights.budget_inferred)
        + weights.location_explicit.max(weights.location_inferred)
        + weights.urgency_explicit.max(weights.urgency_inferred)
        + weights.financing
        + weights.repeat_interest;
    if max_total > 1.0 + 1e-9 {
        return Err(SettingsError::InvalidWeights(format!(
            "attainable weight sum {} exceeds the 0-1 scale",
            max_total
        )));
    }

    Ok(())
}

fn validate_thresholds(thresholds: &ThresholdsConfig) -> Result<(), SettingsError> {
    let hot = thresholds.hot;
    let warm = thresholds.warm;
    if !hot.is_finite() || !warm.is_finite() {
        return Err(SettingsError::InvalidThresholds(
            "thresholds must be finite".to_string(),
        ));
    }
    if !(0.0..=1.0).contains(&hot) || !(0.0..=1.0).contains(&warm) {
        return Err(SettingsError::InvalidThresholds(format!(
            "thresholds must be in [0, 1], got hot={} warm={}",
            hot, warm
        )));
    }
    // Overlapping bands would make the tag ambiguous
    if warm >= hot {
        return Err(SettingsError::InvalidThresholds(format!(
            "warm threshold {} must be below hot threshold {}",
            warm, hot
        )));
    }
    Ok(())
}
