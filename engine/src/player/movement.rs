//! Player Movement Module
//!
//! Resolves one frame of keyboard-driven planar movement against the static
//! obstacle set. Movement is horizontal only: the basis comes from yaw alone,
//! so looking up or down never changes ground speed. Each step is validated
//! as a whole - if the moved player box would touch any wall volume, the
//! entire step is rejected and the player stays put. No sliding along walls,
//! no per-axis resolution.

use glam::Vec3;

use crate::collision::{Aabb, VolumeQuery};
use crate::input::MovementKeys;

/// Distance moved per frame while a movement key is held.
pub const MOVE_SPEED: f32 = 0.04;

/// Horizontal half-extent of the player's collision box.
pub const PLAYER_RADIUS: f32 = 0.3;

/// Full height of the player's collision box.
pub const PLAYER_HEIGHT: f32 = 1.7;

/// Height of the eye point above the floor the player stands on.
pub const PLAYER_EYE_HEIGHT: f32 = 1.7;

/// Horizontal forward direction for a given yaw: the yaw-rotated `(0, 0, -1)`.
#[inline]
pub fn forward_vector(yaw: f32) -> Vec3 {
    Vec3::new(-yaw.sin(), 0.0, -yaw.cos())
}

/// Horizontal right direction for a given yaw: the yaw-rotated `(1, 0, 0)`.
#[inline]
pub fn right_vector(yaw: f32) -> Vec3 {
    Vec3::new(yaw.cos(), 0.0, -yaw.sin())
}

/// The player's collision box centered on the eye position.
#[inline]
pub fn player_bounds(eye: Vec3) -> Aabb {
    Aabb::from_center_half_extents(
        eye,
        Vec3::new(PLAYER_RADIUS, PLAYER_HEIGHT * 0.5, PLAYER_RADIUS),
    )
}

/// Resolve one movement step.
///
/// Combines the held movement keys into a horizontal direction relative to
/// `yaw` (opposing keys cancel by summation), normalizes it, and advances by
/// [`MOVE_SPEED`]. The candidate position is accepted only if the player box
/// centered there overlaps no collision volume; otherwise the original
/// `position` is returned unchanged.
///
/// Total function: no keys held, or a blocked step, simply returns
/// `position`.
pub fn resolve_step(
    keys: &MovementKeys,
    yaw: f32,
    position: Vec3,
    volumes: &dyn VolumeQuery,
) -> Vec3 {
    let raw = forward_vector(yaw) * keys.forward_axis() as f32
        + right_vector(yaw) * keys.right_axis() as f32;
    if raw.length_squared() < 1e-12 {
        return position;
    }

    let candidate = position + raw.normalize() * MOVE_SPEED;
    let player = player_bounds(candidate);

    // Broad phase may over-report; the exact interval test decides.
    for volume in volumes.candidates(&player) {
        if volume.aabb().intersects(&player) {
            return position;
        }
    }
    candidate
}
