//! Configuration and preset management for the umbral look-ahead gate.
//!
//! # Features
//!
//! - **Config files**: Load and save gate settings as TOML
//! - **Validation**: Check values against the gate's parameter ranges
//! - **Lookahead coercion**: Raise a lookahead shorter than the rise or fall
//!   time, with a logged warning
//! - **Factory Presets**: Built-in settings for common material
//!
//! # Example
//!
//! ```rust,no_run
//! use umbral_config::{GateConfig, OutputSetting};
//!
//! let config = GateConfig::load("vocal_gate.toml").unwrap();
//! let gate = config.build(48000.0).unwrap();
//! assert_eq!(gate.params().sample_rate(), 48000.0);
//!
//! let custom = GateConfig::new("Hum killer")
//!     .with_description("Closes on mains hum between takes")
//!     .with_output(OutputSetting::Gated);
//! custom.save("presets/hum_killer.toml").unwrap();
//! ```

mod config;
mod error;

/// Gate configuration validation.
pub mod validation;

/// Factory presets bundled with the library.
pub mod factory_presets;

pub use config::{GateConfig, OutputSetting};
pub use error::ConfigError;
pub use factory_presets::{
    FACTORY_PRESET_NAMES, factory_presets, get_factory_preset, is_factory_preset,
    load_factory_preset,
};
pub use validation::{PARAM_KEYS, ValidationError, ValidationResult, validate_config, validate_param};
