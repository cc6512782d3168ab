//! Gate configuration validation.
//!
//! Checks each configured value against the gate's parameter descriptors
//! ([`GATE_PARAMS`]) and collects every failure instead of stopping at the
//! first.
//!
//! # Example
//!
//! ```rust
//! use umbral_config::{validate_config, GateConfig, ValidationError};
//!
//! let mut config = GateConfig::default();
//! assert!(validate_config(&config).is_ok());
//!
//! config.threshold = Some(-0.5);
//! assert!(matches!(
//!     validate_config(&config),
//!     Err(ValidationError::OutOfRange { .. })
//! ));
//! ```

use thiserror::Error;
use umbral_effects::GATE_PARAMS;

use crate::config::GateConfig;

/// Validation error types.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// Sample rate of zero.
    #[error("sample rate must be positive")]
    ZeroSampleRate,

    /// NaN or infinite value.
    #[error("parameter '{param}' must be finite, got {value}")]
    NotFinite {
        /// Name of the parameter.
        param: String,
        /// The offending value.
        value: f64,
    },

    /// Parameter value out of range.
    #[error("parameter '{param}' value {value} out of range [{min}, {max}]")]
    OutOfRange {
        /// Name of the parameter.
        param: String,
        /// The value that was out of range.
        value: f64,
        /// Minimum allowed value.
        min: f64,
        /// Maximum allowed value.
        max: f64,
    },

    /// Multiple validation errors.
    #[error("multiple validation errors: {}", .0.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("; "))]
    Multiple(Vec<ValidationError>),
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Config keys in [`GATE_PARAMS`] order.
pub const PARAM_KEYS: [&str; 5] = ["lookahead", "risetime", "falltime", "floor", "threshold"];

/// Check one value against the descriptor at `index` in [`GATE_PARAMS`].
///
/// Indices past the end are accepted; there is nothing to check them
/// against.
pub fn validate_param(index: usize, value: f64) -> ValidationResult<()> {
    let Some(desc) = GATE_PARAMS.get(index) else {
        return Ok(());
    };
    let param = PARAM_KEYS[index].to_string();
    if !value.is_finite() {
        return Err(ValidationError::NotFinite { param, value });
    }
    let (min, max) = (f64::from(desc.min), f64::from(desc.max));
    if value < min || value > max {
        return Err(ValidationError::OutOfRange {
            param,
            value,
            min,
            max,
        });
    }
    Ok(())
}

/// Validate every field of `config`, as written (before lookahead coercion).
pub fn validate_config(config: &GateConfig) -> ValidationResult<()> {
    let mut errors = Vec::new();

    if config.sample_rate == 0 {
        errors.push(ValidationError::ZeroSampleRate);
    }

    let values = [
        config.lookahead,
        config.risetime,
        config.falltime,
        config.resolved_floor(),
        config.resolved_threshold(),
    ];
    for (index, &value) in values.iter().enumerate() {
        if let Err(e) = validate_param(index, value) {
            errors.push(e);
        }
    }

    match errors.len() {
        0 => Ok(()),
        1 => Err(errors.remove(0)),
        _ => Err(ValidationError::Multiple(errors)),
    }
}
