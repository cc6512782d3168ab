//! Start-of-rise timing.
//!
//! When the detector sees a threshold crossing, the envelope knows the
//! sample (`on_count`) at which it must be fully open. It must then decide
//! when the rise begins. If the current fall began only recently, a full
//! rise would start before the fall did, so the rise is truncated by similar
//! triangles:
//!
//! ```text
//!   truncated rise time      truncated fall time
//!   -------------------  ==  -------------------
//!     full rise time           full fall time
//! ```
//!
//! The formula applied is
//!
//! ```text
//! total = rise + fall
//! if on_count - start_fall < total:
//!     start_rise = on_count - (rise * on_count - start_fall) / total
//! else:
//!     start_rise = on_count - rise
//! ```
//!
//! Note the numerator is `rise * on_count - start_fall`, not
//! `rise * (on_count - start_fall)`. The two agree only when `start_fall`
//! is zero. The first form is the established behavior and is kept bit for
//! bit; the envelope clamps the gain so an early rise cannot overshoot.

/// Sample time at which a rise toward `on_count` must begin.
///
/// The truncated branch divides in floating point and truncates the final
/// start time toward zero. The result may lie in the past; the envelope then
/// starts rising on the next sample it checks.
///
/// # Example
///
/// ```rust
/// use umbral_effects::compute_start_rise;
///
/// // on_count - start_fall = 30 < 150: truncated rise
/// assert_eq!(compute_start_rise(100, 50, 30, 0), 10);
/// // on_count - start_fall = 100 >= 20: full rise
/// assert_eq!(compute_start_rise(10, 10, 100, 0), 90);
/// ```
#[inline]
pub fn compute_start_rise(
    rise_time_samples: i64,
    fall_time_samples: i64,
    on_count: i64,
    start_fall: i64,
) -> i64 {
    let total = rise_time_samples + fall_time_samples;
    if on_count - start_fall < total {
        let numerator = rise_time_samples as f64 * on_count as f64 - start_fall as f64;
        (on_count as f64 - numerator / total as f64) as i64
    } else {
        on_count - rise_time_samples
    }
}
