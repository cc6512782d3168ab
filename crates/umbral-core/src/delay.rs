//! Fixed-length look-ahead delay.
//!
//! A look-ahead effect never predicts the future. It delays its *output*
//! instead, so the sample it has just received is "future" relative to the
//! sample it is emitting. [`LookaheadBuffer`] holds exactly that lag.
//!
//! ```text
//!   input ──┬──────────────────────────▶ future (detector side)
//!           │
//!           └──▶ [ len samples ] ──────▶ delayed "now" (audio side)
//! ```
//!
//! The buffer emits one delayed sample per pushed sample. After the input
//! ends, the host pushes `len` more samples (silence) to drain it.

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std as alloc;

use alloc::vec;
use alloc::vec::Vec;

/// Circular buffer delaying a sample stream by a fixed number of samples.
///
/// The buffer is heap-allocated during construction and never reallocates.
/// No allocations occur during audio processing.
///
/// # Example
///
/// ```rust
/// use umbral_core::LookaheadBuffer;
///
/// let mut buf = LookaheadBuffer::new(2);
/// assert_eq!(buf.push(1.0), 0.0);
/// assert_eq!(buf.push(2.0), 0.0);
/// assert_eq!(buf.push(3.0), 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct LookaheadBuffer {
    /// Circular storage, one slot per sample of delay
    buffer: Vec<f32>,
    /// Slot holding the oldest sample (next to be emitted)
    pos: usize,
}

impl LookaheadBuffer {
    /// Creates a buffer delaying by `len` samples.
    ///
    /// A zero length is clamped to one sample: a look-ahead reader always
    /// needs at least one sample between "future" and "now".
    pub fn new(len: usize) -> Self {
        #[cfg(feature = "tracing")]
        if len == 0 {
            tracing::debug!("lookahead_buffer: zero length clamped to 1");
        }
        let len = len.max(1);
        Self {
            buffer: vec![0.0; len],
            pos: 0,
        }
    }

    /// Writes `sample` and returns the sample pushed exactly `len()` calls
    /// earlier, or 0.0 while the buffer is still filling.
    #[inline]
    pub fn push(&mut self, sample: f32) -> f32 {
        let out = self.buffer[self.pos];
        self.buffer[self.pos] = sample;
        self.pos += 1;
        if self.pos == self.buffer.len() {
            self.pos = 0;
        }
        out
    }

    /// Delay length in samples (always at least 1).
    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Always false; kept for API symmetry with collections.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Clears the buffer (sets all samples to 0).
    pub fn clear(&mut self) {
        self.buffer.fill(0.0);
        self.pos = 0;
    }
}
