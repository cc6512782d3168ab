//! Umbral Effects - Look-ahead noise gate
//!
//! This crate provides a noise gate that opens *before* the signal crosses
//! its threshold, built on umbral-core:
//!
//! - [`GateParams`] - Validated parameters, converted to sample counts and
//!   per-sample multiplication factors
//! - [`GateEnvelope`] - The six-state gain state machine
//! - [`LookaheadGate`] - Envelope plus delay line, as an [`umbral_core::Effect`]
//! - [`GateStream`] / [`process_buffer`] - Finite-stream drivers that append
//!   the look-ahead tail
//!
//! ## Example
//!
//! ```rust
//! use umbral_effects::{process_buffer, GateParams, OutputMode};
//!
//! let params = GateParams::new(1000.0, 0.01, 0.02, 0.01, 0.5, 0.01).unwrap();
//! let mut input = vec![0.0_f32; 100];
//! input.extend(vec![1.0_f32; 100]);
//!
//! let env = process_buffer(params, OutputMode::Envelope, &input);
//! assert_eq!(env.len(), 210);
//! // Fully open by the time the step reaches the output
//! assert_eq!(env[110], 1.0);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod envelope;
pub mod gate;
pub mod params;
pub mod stream;
pub mod timing;

// Re-export main types at crate root
pub use envelope::{GateEnvelope, GateState};
pub use gate::{GATE_PARAMS, LookaheadGate, OutputMode};
pub use params::{
    DEFAULT_FALL_TIME, DEFAULT_FLOOR, DEFAULT_LOOKAHEAD, DEFAULT_RISE_TIME, DEFAULT_THRESHOLD,
    GateError, GateParams, MAX_DELAY_SAMPLES, MAX_TIME_SAMPLES,
};
pub use stream::{GateIteratorExt, GateStream, process_buffer};
pub use timing::compute_start_rise;
