//! Input Module
//!
//! Provides platform-agnostic input handling for the keyboard movement keys
//! and the captured pointer. This module is decoupled from any specific
//! windowing system (like winit) to allow for flexible integration.
//!
//! # Example
//!
//! ```rust,ignore
//! use liminal_engine::input::{InputState, KeyCode};
//!
//! let mut input = InputState::new();
//!
//! // Handle keyboard input
//! input.keyboard.handle_key(KeyCode::W, true); // W pressed
//! if input.keyboard.forward {
//!     // Move forward
//! }
//!
//! // Handle captured pointer motion
//! input.pointer.set_captured(true);
//! input.pointer.accumulate_delta(4.0, -1.5);
//! let (dx, dy) = input.pointer.consume_delta();
//! ```

pub mod keyboard;
pub mod pointer;

// Re-export commonly used types at module level
pub use keyboard::{KeyCode, MovementKeys};
pub use pointer::CapturedPointer;

/// Combined input state for the keyboard and the captured pointer.
///
/// This provides a convenient way to track all input state in a single struct.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub keyboard: MovementKeys,
    pub pointer: CapturedPointer,
}

impl InputState {
    /// Create a new input state with all inputs in their default state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all input state to defaults.
    pub fn reset(&mut self) {
        self.keyboard.reset();
        self.pointer.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_state_default() {
        let input = InputState::new();
        assert!(!input.keyboard.any_pressed());
        assert!(!input.pointer.is_captured());
    }

    #[test]
    fn test_input_state_reset() {
        let mut input = InputState::new();
        input.keyboard.handle_key(KeyCode::W, true);
        input.pointer.set_captured(true);

        input.reset();
        assert!(!input.keyboard.any_pressed());
        assert!(!input.pointer.is_captured());
    }
}
