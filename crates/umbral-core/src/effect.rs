//! Core Effect trait.
//!
//! The [`Effect`] trait is the seam between a DSP unit and whatever host
//! drives it. All umbral effects implement it, providing a consistent
//! interface for single-sample and block-based processing.
//!
//! ## Design Decisions
//!
//! - **Mono processing**: Single `f32` input/output. Channel linking is a host
//!   concern.
//!
//! - **Object-safe**: `dyn Effect` works for runtime effect lists, while
//!   generic/static dispatch remains the fast path.
//!
//! - **Latency and tail**: Look-ahead effects delay their output. They report
//!   the delay through [`Effect::latency_samples`] and the number of extra
//!   ticks needed to flush it through [`Effect::tail_samples`].

/// Core trait for all audio effects.
///
/// Effects process audio samples, either one at a time or in blocks.
///
/// # Example
///
/// ```rust
/// use umbral_core::Effect;
///
/// struct Gain {
///     gain: f32,
/// }
///
/// impl Effect for Gain {
///     fn process(&mut self, input: f32) -> f32 {
///         input * self.gain
///     }
///
///     fn set_sample_rate(&mut self, _sample_rate: f32) {
///         // Gain doesn't depend on sample rate
///     }
///
///     fn reset(&mut self) {
///         // Gain has no internal state to reset
///     }
/// }
///
/// let mut g = Gain { gain: 0.5 };
/// assert_eq!(g.process(1.0), 0.5);
/// ```
pub trait Effect {
    /// Process a single sample.
    ///
    /// For effects with internal state this advances the state by one sample.
    fn process(&mut self, input: f32) -> f32;

    /// Process a block of samples.
    ///
    /// Default implementation calls `process()` for each sample.
    ///
    /// # Panics
    /// Debug builds panic if `input.len() != output.len()`
    fn process_block(&mut self, input: &[f32], output: &mut [f32]) {
        debug_assert_eq!(
            input.len(),
            output.len(),
            "Input and output buffers must have same length"
        );
        for (inp, out) in input.iter().zip(output.iter_mut()) {
            *out = self.process(*inp);
        }
    }

    /// Process a block of samples in-place.
    fn process_block_inplace(&mut self, buffer: &mut [f32]) {
        for sample in buffer.iter_mut() {
            *sample = self.process(*sample);
        }
    }

    /// Update the sample rate.
    ///
    /// Effects should recalculate any sample-rate-dependent values (sample
    /// counts, per-sample factors, buffer lengths).
    fn set_sample_rate(&mut self, sample_rate: f32);

    /// Reset internal state without changing parameters.
    fn reset(&mut self);

    /// Report processing latency in samples.
    ///
    /// Default returns 0 (no latency).
    fn latency_samples(&self) -> usize {
        0
    }

    /// Number of extra samples the host must run after the input ends to
    /// flush all buffered audio.
    ///
    /// Default returns 0.
    fn tail_samples(&self) -> usize {
        0
    }
}
