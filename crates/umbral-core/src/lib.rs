//! Umbral Core - DSP primitives for look-ahead dynamics
//!
//! This crate provides the building blocks the umbral effects are made of,
//! designed for real-time audio processing with zero allocation in the audio
//! path.
//!
//! # Core Abstractions
//!
//! - [`Effect`] - Object-safe trait for all audio effects
//! - [`LookaheadBuffer`] - Fixed-length sample delay that splits a stream into
//!   a "future" view (the incoming sample) and a delayed "now" view
//!
//! ## Parameter Introspection
//!
//! - [`ParameterInfo`] - Read-only, index-based parameter discovery
//! - [`ParamDescriptor`] - Name, unit, and range metadata for one parameter
//!
//! ## Utilities
//!
//! - Time conversions: [`seconds_to_samples`]
//! - Level conversions: [`db_to_linear`]
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible for embedded audio applications.
//! Disable the default `std` feature in your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! umbral-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Design Principles
//!
//! - **Real-time safe**: No allocations in audio processing paths
//! - **No dependencies on std**: Pure `no_std` with `libm` for math
//! - **Object-safe traits**: Dynamic dispatch when needed

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod delay;
pub mod effect;
pub mod math;
pub mod param_info;

// Re-export main types at crate root
pub use delay::LookaheadBuffer;
pub use effect::Effect;
pub use math::{db_to_linear, seconds_to_samples};
pub use param_info::{ParamDescriptor, ParamId, ParamUnit, ParameterInfo};
