//! Player Module
//!
//! Per-frame movement resolution for the first-person player. The resolver is
//! a pure function over the movement intent, the current yaw, and the static
//! obstacle set; the session owns the position it advances.

pub mod movement;

pub use movement::{
    MOVE_SPEED, PLAYER_EYE_HEIGHT, PLAYER_HEIGHT, PLAYER_RADIUS, forward_vector, player_bounds,
    resolve_step, right_vector,
};
