//! Gate parameter precomputation.
//!
//! Converts user-facing times (seconds) and levels into the sample-domain
//! counts and per-sample factors the envelope runs on. This happens once, at
//! construction; the envelope never recomputes a factor mid-stream, so every
//! sample of a rise or fall is multiplied by the same constant.
//!
//! # Derivation
//!
//! A full fall goes from 1.0 to `floor` in `fall_time_samples` multiplications:
//!
//! ```text
//! fall_factor ^ fall_time_samples == floor
//!   => fall_factor = exp(ln(floor) / fall_time_samples)
//!
//! rise_factor ^ rise_time_samples == 1 / floor
//!   => rise_factor = exp(-ln(floor) / rise_time_samples)
//! ```

use core::fmt;

use libm::{exp, log};
use umbral_core::seconds_to_samples;

/// Default look-ahead in seconds.
pub const DEFAULT_LOOKAHEAD: f64 = 0.01;
/// Default rise time in seconds.
pub const DEFAULT_RISE_TIME: f64 = 0.01;
/// Default fall time in seconds.
pub const DEFAULT_FALL_TIME: f64 = 0.1;
/// Default floor (linear gain, -40 dB).
pub const DEFAULT_FLOOR: f64 = 0.01;
/// Default threshold (linear amplitude, -40 dB).
pub const DEFAULT_THRESHOLD: f64 = 0.01;

/// Longest rise or fall, in samples (about 265 days at 48 kHz).
///
/// Keeps every time marker sum the envelope forms far from `i64` overflow.
pub const MAX_TIME_SAMPLES: i64 = 1 << 40;

/// Longest look-ahead, in samples (about 350 s at 48 kHz). The delay line
/// allocates one `f32` per sample.
pub const MAX_DELAY_SAMPLES: i64 = 1 << 24;

/// Configuration error raised while building [`GateParams`].
///
/// All variants are construction-time and fatal: no gate is built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GateError {
    /// Sample rate is zero, negative, or not finite.
    InvalidSampleRate(f64),
    /// Floor lies outside the open interval (0, 1).
    FloorOutOfRange(f64),
    /// A time parameter is negative.
    NegativeTime {
        /// Parameter name (`"risetime"`, `"falltime"`, `"lookahead"`).
        param: &'static str,
        /// Offending value in seconds.
        value: f64,
    },
    /// Threshold is negative.
    NegativeThreshold(f64),
    /// A parameter is NaN or infinite.
    NonFinite {
        /// Parameter name.
        param: &'static str,
    },
    /// A time converts to more samples than the gate supports.
    TimeTooLong {
        /// Parameter name.
        param: &'static str,
        /// Rounded sample count.
        samples: i64,
        /// Largest accepted sample count.
        max: i64,
    },
}

impl fmt::Display for GateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSampleRate(sr) => write!(f, "sample rate must be positive, got {sr}"),
            Self::FloorOutOfRange(v) => write!(f, "floor must lie in (0, 1), got {v}"),
            Self::NegativeTime { param, value } => {
                write!(f, "{param} must not be negative, got {value} s")
            }
            Self::NegativeThreshold(v) => write!(f, "threshold must not be negative, got {v}"),
            Self::NonFinite { param } => write!(f, "{param} must be finite"),
            Self::TimeTooLong {
                param,
                samples,
                max,
            } => write!(f, "{param} is {samples} samples, longer than the {max} supported"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GateError {}

/// Immutable, sample-domain gate parameters.
///
/// # Example
///
/// ```rust
/// use umbral_effects::GateParams;
///
/// let p = GateParams::new(48000.0, 0.01, 0.1, 0.01, 0.05, 0.005).unwrap();
/// assert_eq!(p.rise_time_samples(), 480);
/// assert_eq!(p.fall_time_samples(), 4800);
/// assert_eq!(p.delay_len(), 240);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GateParams {
    sample_rate: f64,
    rise_seconds: f64,
    fall_seconds: f64,
    lookahead_seconds: f64,
    /// Linear amplitude compared against the raw future sample
    threshold: f64,
    /// Linear floor gain
    floor: f64,
    /// `ln(floor)`, always negative
    log_floor: f64,
    rise_time_samples: i64,
    fall_time_samples: i64,
    rise_factor: f64,
    fall_factor: f64,
    delay_len: usize,
}

impl GateParams {
    /// Precompute gate parameters.
    ///
    /// # Arguments
    /// * `sample_rate` - Stream sample rate in Hz
    /// * `rise_seconds` - Full rise time, floor to unity (≥ 0)
    /// * `fall_seconds` - Full fall time, unity to floor (≥ 0)
    /// * `floor` - Minimum linear gain, strictly between 0 and 1
    /// * `threshold` - Linear amplitude that opens the gate (≥ 0)
    /// * `lookahead_seconds` - Output lag behind the input (≥ 0)
    ///
    /// Rise and fall times that round to zero samples are clamped to one
    /// sample. A look-ahead that rounds to zero samples is clamped to one.
    pub fn new(
        sample_rate: f64,
        rise_seconds: f64,
        fall_seconds: f64,
        floor: f64,
        threshold: f64,
        lookahead_seconds: f64,
    ) -> Result<Self, GateError> {
        if !sample_rate.is_finite() || sample_rate <= 0.0 {
            return Err(GateError::InvalidSampleRate(sample_rate));
        }
        for (param, value) in [
            ("risetime", rise_seconds),
            ("falltime", fall_seconds),
            ("floor", floor),
            ("threshold", threshold),
            ("lookahead", lookahead_seconds),
        ] {
            if !value.is_finite() {
                return Err(GateError::NonFinite { param });
            }
        }
        if floor <= 0.0 || floor >= 1.0 {
            return Err(GateError::FloorOutOfRange(floor));
        }
        for (param, value) in [
            ("risetime", rise_seconds),
            ("falltime", fall_seconds),
            ("lookahead", lookahead_seconds),
        ] {
            if value < 0.0 {
                return Err(GateError::NegativeTime { param, value });
            }
        }
        if threshold < 0.0 {
            return Err(GateError::NegativeThreshold(threshold));
        }

        let rise_time_samples =
            sample_count("risetime", rise_seconds, sample_rate, MAX_TIME_SAMPLES)?;
        let fall_time_samples =
            sample_count("falltime", fall_seconds, sample_rate, MAX_TIME_SAMPLES)?;
        let delay_len =
            sample_count("lookahead", lookahead_seconds, sample_rate, MAX_DELAY_SAMPLES)?;

        let log_floor = log(floor);
        let rise_factor = exp(-log_floor / rise_time_samples as f64);
        let fall_factor = exp(log_floor / fall_time_samples as f64);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            sample_rate,
            rise_time_samples,
            fall_time_samples,
            delay_len,
            rise_factor,
            fall_factor,
            "gate_params: precomputed"
        );

        Ok(Self {
            sample_rate,
            rise_seconds,
            fall_seconds,
            lookahead_seconds,
            threshold,
            floor,
            log_floor,
            rise_time_samples,
            fall_time_samples,
            rise_factor,
            fall_factor,
            delay_len: delay_len as usize,
        })
    }

    /// Recompute for a new sample rate, keeping the user-facing values.
    pub fn with_sample_rate(&self, sample_rate: f64) -> Result<Self, GateError> {
        Self::new(
            sample_rate,
            self.rise_seconds,
            self.fall_seconds,
            self.floor,
            self.threshold,
            self.lookahead_seconds,
        )
    }

    /// Defaults: 10 ms look-ahead and rise, 100 ms fall, -40 dB floor and
    /// threshold.
    pub fn with_defaults(sample_rate: f64) -> Result<Self, GateError> {
        Self::new(
            sample_rate,
            DEFAULT_RISE_TIME,
            DEFAULT_FALL_TIME,
            DEFAULT_FLOOR,
            DEFAULT_THRESHOLD,
            DEFAULT_LOOKAHEAD,
        )
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Rise time as given, in seconds.
    pub fn rise_seconds(&self) -> f64 {
        self.rise_seconds
    }

    /// Fall time as given, in seconds.
    pub fn fall_seconds(&self) -> f64 {
        self.fall_seconds
    }

    /// Look-ahead as given, in seconds.
    pub fn lookahead_seconds(&self) -> f64 {
        self.lookahead_seconds
    }

    /// Linear threshold amplitude.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Linear floor gain.
    pub fn floor(&self) -> f64 {
        self.floor
    }

    /// Natural log of the floor (negative).
    pub fn log_floor(&self) -> f64 {
        self.log_floor
    }

    /// Samples for a full rise (≥ 1).
    pub fn rise_time_samples(&self) -> i64 {
        self.rise_time_samples
    }

    /// Samples for a full fall (≥ 1).
    pub fn fall_time_samples(&self) -> i64 {
        self.fall_time_samples
    }

    /// Per-sample growth factor during a rise (> 1).
    pub fn rise_factor(&self) -> f64 {
        self.rise_factor
    }

    /// Per-sample decay factor during a fall (< 1).
    pub fn fall_factor(&self) -> f64 {
        self.fall_factor
    }

    /// Look-ahead length in samples (≥ 1).
    pub fn delay_len(&self) -> usize {
        self.delay_len
    }
}

/// Round `seconds` to samples, raising anything shorter to one sample.
/// Counts above `max` are an error.
fn sample_count(
    param: &'static str,
    seconds: f64,
    sample_rate: f64,
    max: i64,
) -> Result<i64, GateError> {
    let samples = clamp_count(param, seconds_to_samples(seconds, sample_rate));
    if samples > max {
        return Err(GateError::TimeTooLong {
            param,
            samples,
            max,
        });
    }
    Ok(samples)
}

/// Clamp a rounded sample count to the one-sample minimum.
#[inline]
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn clamp_count(param: &'static str, samples: i64) -> i64 {
    if samples < 1 {
        #[cfg(feature = "tracing")]
        tracing::debug!(param, samples, "gate_params: clamped to 1 sample");
        1
    } else {
        samples
    }
}
