//! Captured Pointer Module
//!
//! Handles captured mouse input with delta accumulation for first-person
//! look control. Raw pointer deltas accumulate between frames and are
//! consumed atomically once per frame.
//!
//! Deltas arriving while the pointer is not captured are silently dropped:
//! there is no buffering or queuing, matching the semantics of a
//! pointer-capture gesture where uncaptured motion belongs to the desktop.

/// Capture-gated pointer state with delta accumulation.
///
/// Designed for first-person control where the cursor is captured/hidden and
/// raw motion drives the look controller:
///
/// - **Capture gating**: deltas only accumulate while captured
/// - **Delta accumulation**: motion samples sum until consumed
/// - **Atomic consumption**: `consume_delta()` returns the total and resets it
///
/// # Example
///
/// ```rust,ignore
/// use liminal_engine::input::CapturedPointer;
///
/// let mut pointer = CapturedPointer::new();
/// pointer.set_captured(true);
///
/// // In the event loop: accumulate raw motion
/// pointer.accumulate_delta(10.0, -5.0);
/// pointer.accumulate_delta(3.0, 2.0);
///
/// // Once per frame: consume and feed the look controller
/// let (dx, dy) = pointer.consume_delta();
/// look.apply_look_delta(dx, dy);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CapturedPointer {
    /// Accumulated horizontal delta since last consume.
    delta_x: f32,
    /// Accumulated vertical delta since last consume.
    delta_y: f32,
    /// Whether the cursor is currently captured (hidden and confined).
    captured: bool,
}

impl CapturedPointer {
    /// Create a pointer state with zero deltas and capture inactive.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate a raw pointer-motion sample.
    ///
    /// Call this from the event loop whenever raw motion is received. While
    /// capture is inactive the sample is discarded - lost input is acceptable
    /// and intentional.
    #[inline]
    pub fn accumulate_delta(&mut self, dx: f32, dy: f32) {
        if !self.captured {
            return;
        }
        self.delta_x += dx;
        self.delta_y += dy;
    }

    /// Consume the accumulated delta, returning it and resetting to zero.
    ///
    /// Call once per frame to get all motion since the last frame.
    #[inline]
    pub fn consume_delta(&mut self) -> (f32, f32) {
        let delta = (self.delta_x, self.delta_y);
        self.delta_x = 0.0;
        self.delta_y = 0.0;
        delta
    }

    /// Set whether the cursor is captured.
    ///
    /// Releasing capture clears any pending delta so the view does not jump
    /// when capture is next acquired.
    #[inline]
    pub fn set_captured(&mut self, captured: bool) {
        self.captured = captured;
        if !captured {
            self.delta_x = 0.0;
            self.delta_y = 0.0;
        }
    }

    /// Check if the cursor is currently captured.
    #[inline]
    pub fn is_captured(&self) -> bool {
        self.captured
    }

    /// Current accumulated delta without consuming it.
    #[inline]
    pub fn peek_delta(&self) -> (f32, f32) {
        (self.delta_x, self.delta_y)
    }

    /// Reset all state to defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
