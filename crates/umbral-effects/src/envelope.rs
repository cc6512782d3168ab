//! Gate envelope state machine.
//!
//! The envelope does two things on every sample at once: it shapes the
//! current segment of the gain curve with a fixed multiplicative factor, and
//! it tests the incoming (future) sample against the threshold so that the
//! next transition's target time is known before the delayed output reaches
//! it.
//!
//! # States
//!
//! | State | Gain | Leaves when |
//! |-------|------|-------------|
//! | `Hold` | 1.0 | `now >= off_count` → `Fall` |
//! | `Fall` | × fall factor | crossing → `FallUntil`; `now >= stop_count` → `Off` |
//! | `FallUntil` | × fall factor | `now >= start_rise` → `Rise`; `now >= stop_count` → `OffUntil` |
//! | `Off` | floor | crossing → `OffUntil` |
//! | `OffUntil` | floor | `now >= start_rise` → `Rise` |
//! | `Rise` | × rise factor | `now >= on_count` → `Hold` |
//!
//! A crossing seen in any state pushes `off_count` to `now + delay_len`, so a
//! signal that keeps re-crossing keeps postponing the next fall. Only `Fall`
//! and `Off` schedule a new rise; the `*Until` states let a fall (or the
//! floor) continue while a rise is already booked.
//!
//! All time markers are absolute sample counts on the output clock `now`.

use crate::params::GateParams;
use crate::timing::compute_start_rise;

/// Envelope state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GateState {
    /// Fully open, holding at unity until `off_count`
    Hold,
    /// Decaying toward the floor, watching for a crossing
    Fall,
    /// Decaying while a rise is scheduled at `start_rise`
    FallUntil,
    /// Closed at the floor, watching for a crossing
    #[default]
    Off,
    /// Closed at the floor while a rise is scheduled at `start_rise`
    OffUntil,
    /// Rising toward unity at `on_count`
    Rise,
}

/// Per-stream gate runtime: current state, gain, and time markers.
///
/// One instance belongs to exactly one stream. Call [`tick`](Self::tick)
/// once per output sample with the raw, undelayed input sample.
///
/// # Example
///
/// ```rust
/// use umbral_effects::{GateEnvelope, GateParams, GateState};
///
/// let params = GateParams::new(1000.0, 0.01, 0.01, 0.1, 0.5, 0.01).unwrap();
/// let mut env = GateEnvelope::new(params);
/// assert_eq!(env.tick(0.0), 0.1);
/// assert_eq!(env.state(), GateState::Off);
/// env.tick(0.9);
/// assert_eq!(env.state(), GateState::OffUntil);
/// assert_eq!(env.on_count(), 11);
/// ```
#[derive(Debug, Clone)]
pub struct GateEnvelope {
    params: GateParams,
    state: GateState,
    /// Current gain, always in `[floor, 1.0]`
    value: f64,
    /// Output sample index of the next tick
    now: i64,
    /// Time the current rise must reach unity
    on_count: i64,
    /// Time the hold ends and a fall begins
    off_count: i64,
    /// Time a full fall reaches the floor
    stop_count: i64,
    /// Time the current fall began
    start_fall: i64,
    /// Time the scheduled rise begins
    start_rise: i64,
}

impl GateEnvelope {
    /// Create an envelope in the `Off` state at the floor, all markers zero.
    pub fn new(params: GateParams) -> Self {
        Self {
            state: GateState::Off,
            value: params.floor(),
            now: 0,
            on_count: 0,
            off_count: 0,
            stop_count: 0,
            start_fall: 0,
            start_rise: 0,
            params,
        }
    }

    /// Advance one output sample.
    ///
    /// `future` is the raw input sample `delay_len` samples ahead of the
    /// output. It is tested as `future >= threshold` (signed, not rectified).
    /// Returns the gain for the current output sample.
    #[inline]
    pub fn tick(&mut self, future: f32) -> f64 {
        let now = self.now;
        let above = f64::from(future) >= self.params.threshold();
        let delay_len = self.params.delay_len() as i64;

        match self.state {
            GateState::Hold => {
                if above {
                    self.off_count = now + delay_len;
                } else if now >= self.off_count {
                    self.transition(GateState::Fall);
                    self.stop_count = now + self.params.fall_time_samples();
                    self.start_fall = now;
                }
            }
            GateState::Fall => {
                self.decay();
                if above {
                    self.schedule_rise(now + delay_len);
                    self.transition(GateState::FallUntil);
                } else if now >= self.stop_count {
                    self.transition(GateState::Off);
                    self.value = self.params.floor();
                }
            }
            GateState::FallUntil => {
                self.decay();
                if above {
                    self.off_count = now + delay_len;
                }
                if now >= self.start_rise {
                    self.transition(GateState::Rise);
                } else if now >= self.stop_count {
                    self.transition(GateState::OffUntil);
                    self.value = self.params.floor();
                }
            }
            GateState::Off => {
                if above {
                    self.schedule_rise(now + delay_len);
                    self.transition(GateState::OffUntil);
                }
            }
            GateState::OffUntil => {
                if above {
                    self.off_count = now + delay_len;
                }
                if now >= self.start_rise {
                    self.transition(GateState::Rise);
                }
            }
            GateState::Rise => {
                self.value = (self.value * self.params.rise_factor()).min(1.0);
                if above {
                    self.off_count = now + delay_len;
                }
                if now >= self.on_count {
                    self.value = 1.0;
                    self.transition(GateState::Hold);
                }
            }
        }

        self.now += 1;
        self.value
    }

    /// Book a rise that completes at `on_count`; the fall is postponed to
    /// the same time.
    #[inline]
    fn schedule_rise(&mut self, on_count: i64) {
        self.on_count = on_count;
        self.off_count = on_count;
        self.start_rise = compute_start_rise(
            self.params.rise_time_samples(),
            self.params.fall_time_samples(),
            on_count,
            self.start_fall,
        );
    }

    #[inline]
    fn decay(&mut self) {
        self.value = (self.value * self.params.fall_factor()).max(self.params.floor());
    }

    #[inline]
    fn transition(&mut self, next: GateState) {
        #[cfg(feature = "tracing")]
        tracing::trace!(now = self.now, from = ?self.state, to = ?next, "gate_envelope: transition");
        self.state = next;
    }

    /// Return to the initial state: `Off`, floor gain, all markers zero.
    pub fn reset(&mut self) {
        *self = Self::new(self.params);
    }

    /// Parameters this envelope runs on.
    pub fn params(&self) -> &GateParams {
        &self.params
    }

    /// Current state.
    pub fn state(&self) -> GateState {
        self.state
    }

    /// Gain produced by the most recent tick (floor before the first).
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Output index the next tick will process.
    pub fn now(&self) -> i64 {
        self.now
    }

    /// Time the current or last scheduled rise reaches unity.
    pub fn on_count(&self) -> i64 {
        self.on_count
    }

    /// Time the current hold gives way to a fall.
    pub fn off_count(&self) -> i64 {
        self.off_count
    }

    /// Time the current or last fall reaches the floor.
    pub fn stop_count(&self) -> i64 {
        self.stop_count
    }

    /// Time the current or last fall began.
    pub fn start_fall(&self) -> i64 {
        self.start_fall
    }

    /// Time the current or last scheduled rise begins.
    pub fn start_rise(&self) -> i64 {
        self.start_rise
    }
}
