//! Camera Module
//!
//! Provides mouse-look orientation state for the first-person view.
//! This module is window-system agnostic - it only deals with look
//! angles and the direction math derived from them.

pub mod look_controller;

pub use look_controller::{LOOK_SENSITIVITY, LookController, Orientation, PITCH_LIMIT, PITCH_MARGIN};
