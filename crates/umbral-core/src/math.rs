//! Mathematical utility functions for DSP.
//!
//! All functions are allocation-free and suitable for `no_std`.
//!
//! # Level Conversions
//!
//! - [`db_to_linear`] - Convert dB to linear gain
//!
//! # Time Conversions
//!
//! - [`seconds_to_samples`] - Seconds to a rounded sample count

use libm::{expf, floor};

/// Convert decibels to linear gain.
///
/// # Example
/// ```rust
/// use umbral_core::db_to_linear;
///
/// assert!((db_to_linear(0.0) - 1.0).abs() < 0.001);
/// assert!((db_to_linear(-40.0) - 0.01).abs() < 1e-4);
/// ```
#[inline]
pub fn db_to_linear(db: f32) -> f32 {
    // 10^(dB/20) = e^(dB * ln(10)/20)
    const FACTOR: f32 = core::f32::consts::LN_10 / 20.0;
    expf(db * FACTOR)
}

/// Convert a duration in seconds to a sample count, rounding half up.
///
/// `floor(seconds * sample_rate + 0.5)`. Callers clamp the result to their
/// own minimum.
///
/// # Example
/// ```rust
/// use umbral_core::seconds_to_samples;
///
/// assert_eq!(seconds_to_samples(0.01, 48000.0), 480);
/// assert_eq!(seconds_to_samples(0.0, 48000.0), 0);
/// assert_eq!(seconds_to_samples(0.5, 48000.0), 24000);
/// ```
#[inline]
pub fn seconds_to_samples(seconds: f64, sample_rate: f64) -> i64 {
    floor(seconds * sample_rate + 0.5) as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_to_linear_at_floor_levels() {
        let cases = [
            (-80.0_f32, 1e-4_f32),
            (-60.0, 1e-3),
            (-40.0, 0.01),
            (-20.0, 0.1),
            (0.0, 1.0),
        ];
        for (db, linear) in cases {
            let got = db_to_linear(db);
            assert!((got - linear).abs() <= linear * 1e-4, "{db} dB gave {got}");
        }
    }

    #[test]
    fn test_seconds_to_samples_rounding() {
        assert_eq!(seconds_to_samples(0.4 / 44100.0, 44100.0), 0);
        assert_eq!(seconds_to_samples(0.6 / 44100.0, 44100.0), 1);
        assert_eq!(seconds_to_samples(1.0, 44100.0), 44100);
    }
}
