//! Stream adapters around [`LookaheadGate`].
//!
//! The gate's output lags its input by `delay_len` samples, so a finite
//! input of `n` samples produces `n + delay_len` output samples: the input
//! itself, then `delay_len` ticks of silence that drain the look-ahead.

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std as alloc;

use alloc::vec::Vec;
use core::iter::FusedIterator;

use umbral_core::Effect;

use crate::gate::{LookaheadGate, OutputMode};
use crate::params::GateParams;

/// Iterator yielding the gated stream for an input sample iterator.
///
/// # Example
///
/// ```rust
/// use umbral_effects::{GateParams, GateStream, OutputMode};
///
/// let params = GateParams::new(1000.0, 0.005, 0.02, 0.01, 0.5, 0.01).unwrap();
/// let input = vec![0.0_f32; 100];
/// let out: Vec<f32> = GateStream::new(input, params, OutputMode::Envelope).collect();
/// assert_eq!(out.len(), 110);
/// ```
#[derive(Debug, Clone)]
pub struct GateStream<I> {
    /// `None` once the input is exhausted
    input: Option<I>,
    gate: LookaheadGate,
    tail_remaining: usize,
}

impl<I: Iterator<Item = f32>> GateStream<I> {
    /// Gate `signal` with freshly built runtime state.
    pub fn new(signal: impl IntoIterator<IntoIter = I>, params: GateParams, mode: OutputMode) -> Self {
        Self::from_gate(signal, LookaheadGate::with_mode(params, mode))
    }

    /// Drive an existing gate. Its runtime state carries on from wherever it
    /// was left.
    pub fn from_gate(signal: impl IntoIterator<IntoIter = I>, gate: LookaheadGate) -> Self {
        let tail_remaining = gate.tail_samples();
        Self {
            input: Some(signal.into_iter()),
            gate,
            tail_remaining,
        }
    }

    /// The gate driving this stream.
    pub fn gate(&self) -> &LookaheadGate {
        &self.gate
    }

    /// Consume the stream, returning the gate.
    pub fn into_gate(self) -> LookaheadGate {
        self.gate
    }
}

impl<I: Iterator<Item = f32>> Iterator for GateStream<I> {
    type Item = f32;

    #[inline]
    fn next(&mut self) -> Option<f32> {
        if let Some(input) = self.input.as_mut() {
            match input.next() {
                Some(sample) => return Some(self.gate.process(sample)),
                None => {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(
                        now = self.gate.envelope().now(),
                        tail = self.tail_remaining,
                        "gate_stream: input ended, draining"
                    );
                    self.input = None;
                }
            }
        }
        if self.tail_remaining == 0 {
            return None;
        }
        self.tail_remaining -= 1;
        Some(self.gate.process(0.0))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.input {
            Some(input) => {
                let (lo, hi) = input.size_hint();
                (
                    lo.saturating_add(self.tail_remaining),
                    hi.and_then(|h| h.checked_add(self.tail_remaining)),
                )
            }
            None => (self.tail_remaining, Some(self.tail_remaining)),
        }
    }
}

impl<I: ExactSizeIterator<Item = f32>> ExactSizeIterator for GateStream<I> {}

impl<I: Iterator<Item = f32>> FusedIterator for GateStream<I> {}

/// Extension trait for gating any `f32` sample iterator.
pub trait GateIteratorExt: Iterator<Item = f32> + Sized {
    /// Gate this stream with `params`, emitting according to `mode`.
    ///
    /// ```rust
    /// use umbral_effects::{GateIteratorExt, GateParams, OutputMode};
    ///
    /// let params = GateParams::new(1000.0, 0.005, 0.02, 0.01, 0.5, 0.01).unwrap();
    /// let n = core::iter::repeat(0.0_f32).take(50).lookahead_gate(params, OutputMode::Gated).count();
    /// assert_eq!(n, 60);
    /// ```
    fn lookahead_gate(self, params: GateParams, mode: OutputMode) -> GateStream<Self> {
        GateStream::new(self, params, mode)
    }
}

impl<I: Iterator<Item = f32>> GateIteratorExt for I {}

/// Gate a whole buffer at once, returning `input.len() + delay_len` samples.
///
/// ```rust
/// use umbral_effects::{process_buffer, GateParams, OutputMode};
///
/// let params = GateParams::new(1000.0, 0.005, 0.02, 0.01, 0.5, 0.01).unwrap();
/// let out = process_buffer(params, OutputMode::Envelope, &[0.0; 20]);
/// assert_eq!(out, vec![0.01; 30]);
/// ```
pub fn process_buffer(params: GateParams, mode: OutputMode, input: &[f32]) -> Vec<f32> {
    let mut output = Vec::with_capacity(input.len() + params.delay_len());
    output.extend(GateStream::new(input.iter().copied(), params, mode));
    output
}
