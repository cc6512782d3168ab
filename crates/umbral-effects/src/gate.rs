//! Look-ahead noise gate effect.
//!
//! Opens (unity gain) when the signal reaches a threshold and decays toward
//! a floor when it stays below. The output lags the input by the look-ahead,
//! so the rise can complete exactly when the crossing reaches the output
//! instead of lagging behind it.
//!
//! # Signal Flow
//!
//! ```text
//!   input ──┬─────────────────▶ GateEnvelope ──▶ gain ─┐
//!           │                  (future sample)          │
//!           └──▶ LookaheadBuffer ──▶ delayed ──────────(×)──▶ output
//! ```
//!
//! # Parameters
//!
//! | Index | Name | Range | Default |
//! |-------|------|-------|---------|
//! | 0 | Lookahead | 0.0–1.0 s | 0.01 |
//! | 1 | Rise Time | 0.0–10.0 s | 0.01 |
//! | 2 | Fall Time | 0.0–10.0 s | 0.1 |
//! | 3 | Floor | 0.000001–0.999 | 0.01 |
//! | 4 | Threshold | 0.0–16.0 | 0.01 |
//!
//! Parameters are fixed at construction. [`ParameterInfo`] is read-only.

use umbral_core::{Effect, LookaheadBuffer, ParamDescriptor, ParamId, ParameterInfo};

use crate::envelope::{GateEnvelope, GateState};
use crate::params::{
    DEFAULT_FALL_TIME, DEFAULT_FLOOR, DEFAULT_LOOKAHEAD, DEFAULT_RISE_TIME, DEFAULT_THRESHOLD,
    GateParams,
};

/// What the gate emits per sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// The gain envelope itself, in `[floor, 1.0]`
    #[default]
    Envelope,
    /// Delayed input multiplied by the gain envelope
    Gated,
}

/// Descriptors for the gate's parameters, indexed as in the module table.
pub const GATE_PARAMS: [ParamDescriptor; 5] = [
    ParamDescriptor::time_seconds("Lookahead", "Look", 0.0, 1.0, DEFAULT_LOOKAHEAD as f32)
        .with_id(ParamId(100), "gate_lookahead"),
    ParamDescriptor::time_seconds("Rise Time", "Rise", 0.0, 10.0, DEFAULT_RISE_TIME as f32)
        .with_id(ParamId(101), "gate_rise"),
    ParamDescriptor::time_seconds("Fall Time", "Fall", 0.0, 10.0, DEFAULT_FALL_TIME as f32)
        .with_id(ParamId(102), "gate_fall"),
    ParamDescriptor::linear_gain("Floor", "Floor", 0.000001, 0.999, DEFAULT_FLOOR as f32)
        .with_id(ParamId(103), "gate_floor"),
    ParamDescriptor::linear_gain("Threshold", "Thresh", 0.0, 16.0, DEFAULT_THRESHOLD as f32)
        .with_id(ParamId(104), "gate_threshold"),
];

/// Look-ahead noise gate.
///
/// ## Parameter Indices (`ParameterInfo`)
///
/// | Index | Name | Unit |
/// |-------|------|------|
/// | 0 | Lookahead | s |
/// | 1 | Rise Time | s |
/// | 2 | Fall Time | s |
/// | 3 | Floor | linear |
/// | 4 | Threshold | linear |
///
/// # Example
///
/// ```rust
/// use umbral_core::Effect;
/// use umbral_effects::{GateParams, LookaheadGate, OutputMode};
///
/// let params = GateParams::new(48000.0, 0.005, 0.1, 0.01, 0.05, 0.005).unwrap();
/// let mut gate = LookaheadGate::with_mode(params, OutputMode::Gated);
/// assert_eq!(gate.latency_samples(), 240);
///
/// let mut block = [0.2_f32; 512];
/// gate.process_block_inplace(&mut block);
///
/// // Flush the delayed tail once the input is exhausted.
/// let mut tail = [0.0_f32; 240];
/// assert_eq!(gate.process_tail(&mut tail), 240);
/// ```
#[derive(Debug, Clone)]
pub struct LookaheadGate {
    envelope: GateEnvelope,
    buffer: LookaheadBuffer,
    mode: OutputMode,
}

impl LookaheadGate {
    /// Create a gate that emits its gain envelope.
    pub fn new(params: GateParams) -> Self {
        Self::with_mode(params, OutputMode::Envelope)
    }

    /// Create a gate with an explicit output mode.
    pub fn with_mode(params: GateParams, mode: OutputMode) -> Self {
        Self {
            envelope: GateEnvelope::new(params),
            buffer: LookaheadBuffer::new(params.delay_len()),
            mode,
        }
    }

    /// Parameters the gate was built with.
    pub fn params(&self) -> &GateParams {
        self.envelope.params()
    }

    /// Output mode.
    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Current envelope state.
    pub fn state(&self) -> GateState {
        self.envelope.state()
    }

    /// Gain applied to the most recent output sample.
    pub fn gain(&self) -> f64 {
        self.envelope.value()
    }

    /// The underlying envelope, for inspecting its time markers.
    pub fn envelope(&self) -> &GateEnvelope {
        &self.envelope
    }

    /// Run silent ticks to flush the look-ahead after the input has ended.
    ///
    /// Fills at most `tail_samples()` leading samples of `output` and
    /// returns how many were written.
    pub fn process_tail(&mut self, output: &mut [f32]) -> usize {
        let n = output.len().min(self.tail_samples());
        for out in &mut output[..n] {
            *out = self.process(0.0);
        }
        n
    }
}

impl Effect for LookaheadGate {
    #[inline]
    fn process(&mut self, input: f32) -> f32 {
        let gain = self.envelope.tick(input) as f32;
        let delayed = self.buffer.push(input);
        match self.mode {
            OutputMode::Envelope => gain,
            OutputMode::Gated => delayed * gain,
        }
    }

    /// Rebuild the sample-domain parameters for `sample_rate` and reset.
    ///
    /// An invalid rate leaves the current parameters in place.
    fn set_sample_rate(&mut self, sample_rate: f32) {
        match self.params().with_sample_rate(f64::from(sample_rate)) {
            Ok(params) => {
                self.envelope = GateEnvelope::new(params);
                self.buffer = LookaheadBuffer::new(params.delay_len());
            }
            #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(error = %e, "lookahead_gate: sample rate rejected");
                self.reset();
            }
        }
    }

    fn reset(&mut self) {
        self.envelope.reset();
        self.buffer.clear();
    }

    fn latency_samples(&self) -> usize {
        self.params().delay_len()
    }

    fn tail_samples(&self) -> usize {
        self.params().delay_len()
    }
}

impl ParameterInfo for LookaheadGate {
    fn param_count(&self) -> usize {
        GATE_PARAMS.len()
    }

    fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
        GATE_PARAMS.get(index).copied()
    }

    fn get_param(&self, index: usize) -> f32 {
        let p = self.params();
        let value = match index {
            0 => p.lookahead_seconds(),
            1 => p.rise_seconds(),
            2 => p.fall_seconds(),
            3 => p.floor(),
            4 => p.threshold(),
            _ => 0.0,
        };
        value as f32
    }
}
