//! Gate configuration file format and operations.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

use umbral_core::db_to_linear;
use umbral_effects::{
    DEFAULT_FALL_TIME, DEFAULT_FLOOR, DEFAULT_LOOKAHEAD, DEFAULT_RISE_TIME, DEFAULT_THRESHOLD,
    GateParams, LookaheadGate, OutputMode,
};

use crate::error::ConfigError;
use crate::validation::{ValidationResult, validate_config};

/// What a configured gate emits, as written in TOML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputSetting {
    /// The gain envelope
    #[default]
    Envelope,
    /// Delayed input times the envelope
    Gated,
}

impl From<OutputSetting> for OutputMode {
    fn from(setting: OutputSetting) -> Self {
        match setting {
            OutputSetting::Envelope => OutputMode::Envelope,
            OutputSetting::Gated => OutputMode::Gated,
        }
    }
}

impl From<OutputMode> for OutputSetting {
    fn from(mode: OutputMode) -> Self {
        match mode {
            OutputMode::Envelope => OutputSetting::Envelope,
            OutputMode::Gated => OutputSetting::Gated,
        }
    }
}

/// Gate configuration file.
///
/// Times are in seconds. `floor` and `threshold` are linear; `floor_db` and
/// `threshold_db` are accepted instead, and the linear field wins when both
/// are present. Missing fields take the gate defaults.
///
/// # TOML Format
///
/// ```toml
/// name = "Vocal"
/// description = "Tight gate for close-miked vocals"
/// sample_rate = 48000
/// lookahead = 0.005
/// risetime = 0.002
/// falltime = 0.08
/// floor_db = -40.0
/// threshold = 0.05
/// output = "gated"
/// coerce_lookahead = false
/// ```
///
/// # Lookahead coercion
///
/// With `coerce_lookahead` on (the default), a lookahead shorter than the
/// rise or fall time is raised to the longer of the two when parameters are
/// built, and a warning is logged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GateConfig {
    /// Name of the configuration.
    pub name: String,

    /// Optional description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Sample rate hint (defaults to 48000).
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,

    /// Look-ahead in seconds.
    #[serde(default = "default_lookahead")]
    pub lookahead: f64,

    /// Rise time in seconds.
    #[serde(default = "default_risetime")]
    pub risetime: f64,

    /// Fall time in seconds.
    #[serde(default = "default_falltime")]
    pub falltime: f64,

    /// Floor as linear gain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor: Option<f64>,

    /// Floor in dB, used when `floor` is absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor_db: Option<f64>,

    /// Threshold as linear amplitude.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,

    /// Threshold in dB, used when `threshold` is absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold_db: Option<f64>,

    /// Output mode.
    #[serde(default)]
    pub output: OutputSetting,

    /// Raise a too-short lookahead to the rise/fall time.
    #[serde(default = "default_true")]
    pub coerce_lookahead: bool,
}

fn default_sample_rate() -> u32 {
    48000
}

fn default_lookahead() -> f64 {
    DEFAULT_LOOKAHEAD
}

fn default_risetime() -> f64 {
    DEFAULT_RISE_TIME
}

fn default_falltime() -> f64 {
    DEFAULT_FALL_TIME
}

fn default_true() -> bool {
    true
}

fn resolve_level(linear: Option<f64>, db: Option<f64>, default: f64) -> f64 {
    match (linear, db) {
        (Some(v), _) => v,
        (None, Some(db)) => f64::from(db_to_linear(db as f32)),
        (None, None) => default,
    }
}

impl GateConfig {
    /// Create a configuration with default gate settings.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            sample_rate: default_sample_rate(),
            lookahead: DEFAULT_LOOKAHEAD,
            risetime: DEFAULT_RISE_TIME,
            falltime: DEFAULT_FALL_TIME,
            floor: None,
            floor_db: None,
            threshold: None,
            threshold_db: None,
            output: OutputSetting::default(),
            coerce_lookahead: true,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the sample rate hint.
    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Set the output mode.
    pub fn with_output(mut self, output: impl Into<OutputSetting>) -> Self {
        self.output = output.into();
        self
    }

    /// Load a configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        let config = Self::from_toml(&content)?;
        debug!(path = %path.display(), name = %config.name, "gate_config: loaded");
        Ok(config)
    }

    /// Load a configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Save the configuration to a TOML file, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }

        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))?;
        debug!(path = %path.display(), name = %self.name, "gate_config: saved");
        Ok(())
    }

    /// Convert the configuration to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Linear floor after resolving `floor` / `floor_db`.
    pub fn resolved_floor(&self) -> f64 {
        if self.floor.is_some() && self.floor_db.is_some() {
            debug!(name = %self.name, "gate_config: both floor and floor_db set, using floor");
        }
        resolve_level(self.floor, self.floor_db, DEFAULT_FLOOR)
    }

    /// Linear threshold after resolving `threshold` / `threshold_db`.
    pub fn resolved_threshold(&self) -> f64 {
        if self.threshold.is_some() && self.threshold_db.is_some() {
            debug!(name = %self.name, "gate_config: both threshold and threshold_db set, using threshold");
        }
        resolve_level(self.threshold, self.threshold_db, DEFAULT_THRESHOLD)
    }

    /// Lookahead the gate will actually run with.
    ///
    /// Equal to `lookahead` unless coercion is on and the rise or fall time
    /// is longer, in which case the longer time is used.
    pub fn effective_lookahead(&self) -> f64 {
        let mut lookahead = self.lookahead;
        if !self.coerce_lookahead {
            return lookahead;
        }
        if lookahead < self.risetime {
            warn!(
                lookahead,
                risetime = self.risetime,
                "gate_config: lookahead shorter than risetime, raising to risetime"
            );
            lookahead = self.risetime;
        }
        if lookahead < self.falltime {
            warn!(
                lookahead,
                falltime = self.falltime,
                "gate_config: lookahead shorter than falltime, raising to falltime"
            );
            lookahead = self.falltime;
        }
        lookahead
    }

    /// Check every field against the gate's parameter ranges.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_config(self)
    }

    /// Build gate parameters for `sample_rate`.
    pub fn to_params(&self, sample_rate: f64) -> Result<GateParams, ConfigError> {
        Ok(GateParams::new(
            sample_rate,
            self.risetime,
            self.falltime,
            self.resolved_floor(),
            self.resolved_threshold(),
            self.effective_lookahead(),
        )?)
    }

    /// Build gate parameters at the configured sample rate.
    pub fn params(&self) -> Result<GateParams, ConfigError> {
        self.to_params(f64::from(self.sample_rate))
    }

    /// Validate, then build a ready-to-run gate for `sample_rate`.
    pub fn build(&self, sample_rate: f64) -> Result<LookaheadGate, ConfigError> {
        self.validate()?;
        let params = self.to_params(sample_rate)?;
        Ok(LookaheadGate::with_mode(params, self.output.into()))
    }
}

impl Default for GateConfig {
    fn default() -> Self {
        Self::new("Untitled")
    }
}
