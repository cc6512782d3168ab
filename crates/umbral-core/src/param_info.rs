//! Parameter introspection for discoverable effect parameters.
//!
//! [`ParameterInfo`] gives hosts, config validators, and UIs a uniform way to
//! list an effect's parameters, read their values, and learn their ranges.
//!
//! # Design
//!
//! Access is index-based. Each parameter is described by a
//! [`ParamDescriptor`] carrying display names, a [`ParamUnit`], a
//! `[min, max]` range, and a stable [`ParamId`] plus string ID for
//! serialization.
//!
//! The trait is read-only: umbral effects take their parameters once, at
//! construction. Changing a parameter means building a new effect.
//!
//! # Example
//!
//! ```rust
//! use umbral_core::{ParameterInfo, ParamDescriptor, ParamId};
//!
//! struct Trim {
//!     gain: f32,
//! }
//!
//! impl ParameterInfo for Trim {
//!     fn param_count(&self) -> usize { 1 }
//!
//!     fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
//!         match index {
//!             0 => Some(ParamDescriptor::linear_gain("Gain", "Gain", 0.0, 1.0, 1.0)
//!                 .with_id(ParamId(100), "trim_gain")),
//!             _ => None,
//!         }
//!     }
//!
//!     fn get_param(&self, index: usize) -> f32 {
//!         match index {
//!             0 => self.gain,
//!             _ => 0.0,
//!         }
//!     }
//! }
//!
//! let t = Trim { gain: 0.5 };
//! assert_eq!(t.find_param_by_name("gain"), Some(0));
//! ```

/// Stable parameter identifier that survives reordering.
///
/// Once assigned, a `ParamId` must never change for a given parameter.
///
/// # Convention
///
/// Each effect gets a base ID; params are sequential from there
/// (the look-ahead gate uses 100..=104).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParamId(pub u32);

/// Unit type for parameter values, used for display and validation messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParamUnit {
    /// Unitless linear gain or amplitude (e.g. 0.01, 1.0)
    #[default]
    Linear,
    /// Seconds (s)
    Seconds,
}

impl ParamUnit {
    /// Short suffix for display (`""` for unitless values).
    pub fn suffix(self) -> &'static str {
        match self {
            ParamUnit::Linear => "",
            ParamUnit::Seconds => " s",
        }
    }
}

/// Metadata describing one effect parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamDescriptor {
    /// Full parameter name for display (e.g., "Rise Time").
    pub name: &'static str,

    /// Short name for hardware displays, max 8 characters (e.g., "Rise").
    pub short_name: &'static str,

    /// Unit type for formatting the parameter value.
    pub unit: ParamUnit,

    /// Minimum allowed value for this parameter.
    pub min: f32,

    /// Maximum allowed value for this parameter.
    pub max: f32,

    /// Default value when the effect is built from defaults.
    pub default: f32,

    /// Recommended step increment for encoder-based control.
    pub step: f32,

    /// Stable numeric ID. Default: `ParamId(0)` (unassigned).
    pub id: ParamId,

    /// Human-readable stable ID for presets and serialization.
    ///
    /// Convention: `"effect_param"` (e.g., `"gate_rise"`).
    pub string_id: &'static str,
}

impl ParamDescriptor {
    /// Time parameter with custom name and range (seconds).
    pub const fn time_seconds(
        name: &'static str,
        short_name: &'static str,
        min: f32,
        max: f32,
        default: f32,
    ) -> Self {
        Self {
            name,
            short_name,
            unit: ParamUnit::Seconds,
            min,
            max,
            default,
            step: 0.001,
            id: ParamId(0),
            string_id: "",
        }
    }

    /// Linear gain or amplitude parameter with custom name and range.
    pub const fn linear_gain(
        name: &'static str,
        short_name: &'static str,
        min: f32,
        max: f32,
        default: f32,
    ) -> Self {
        Self {
            name,
            short_name,
            unit: ParamUnit::Linear,
            min,
            max,
            default,
            step: 0.001,
            id: ParamId(0),
            string_id: "",
        }
    }

    /// Sets the stable parameter ID and string ID.
    ///
    /// ```rust
    /// use umbral_core::{ParamDescriptor, ParamId};
    ///
    /// let desc = ParamDescriptor::time_seconds("Rise Time", "Rise", 0.0, 1.0, 0.01)
    ///     .with_id(ParamId(101), "gate_rise");
    /// assert_eq!(desc.id, ParamId(101));
    /// assert_eq!(desc.string_id, "gate_rise");
    /// ```
    pub const fn with_id(mut self, id: ParamId, string_id: &'static str) -> Self {
        self.id = id;
        self.string_id = string_id;
        self
    }

    /// True when `value` lies inside `[min, max]` (NaN is never in range).
    #[inline]
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Read-only, index-based parameter introspection.
pub trait ParameterInfo {
    /// Number of parameters the effect exposes.
    fn param_count(&self) -> usize;

    /// Descriptor for the parameter at `index`, or `None` past the end.
    fn param_info(&self, index: usize) -> Option<ParamDescriptor>;

    /// Current value of the parameter at `index` (0.0 past the end).
    fn get_param(&self, index: usize) -> f32;

    /// Find a parameter by full or short name (ASCII case-insensitive).
    fn find_param_by_name(&self, name: &str) -> Option<usize> {
        (0..self.param_count()).find(|&i| {
            self.param_info(i).is_some_and(|desc| {
                desc.name.eq_ignore_ascii_case(name)
                    || desc.short_name.eq_ignore_ascii_case(name)
                    || desc.string_id.eq_ignore_ascii_case(name)
            })
        })
    }

    /// Stable ID of the parameter at `index`.
    fn param_id(&self, index: usize) -> Option<ParamId> {
        self.param_info(index).map(|d| d.id)
    }

    /// Index of the parameter with stable ID `id`.
    fn param_index_by_id(&self, id: ParamId) -> Option<usize> {
        (0..self.param_count()).find(|&i| self.param_info(i).is_some_and(|d| d.id == id))
    }
}
