//! Mouse-Look Controller Module
//!
//! Converts raw pointer-motion deltas into clamped yaw/pitch state for a
//! first-person view. Mouse movement maps directly to rotation with no
//! smoothing or interpolation.
//!
//! Key behavior:
//! - Natural mouse-look convention: pointer right turns the view right,
//!   pointer up looks up
//! - Fixed sensitivity (0.002 rad per count)
//! - Pitch clamped short of the poles by a 0.1 rad margin to prevent
//!   gimbal flip
//! - Non-finite deltas are discarded so yaw/pitch can never become NaN

use glam::Vec3;

/// Look sensitivity in radians per pointer count.
pub const LOOK_SENSITIVITY: f32 = 0.002;

/// Margin kept between the pitch limit and the vertical poles, in radians.
pub const PITCH_MARGIN: f32 = 0.1;

/// Maximum absolute pitch in radians.
pub const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - PITCH_MARGIN;

/// Immutable yaw/pitch snapshot for one frame.
///
/// Yaw is unbounded (it wraps implicitly through the trigonometric
/// functions); pitch always satisfies `|pitch| <= PITCH_LIMIT`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Orientation {
    /// Horizontal look angle in radians. Zero faces -Z; decreases as the
    /// pointer moves right.
    pub yaw: f32,
    /// Vertical look angle in radians, positive up.
    pub pitch: f32,
}

/// First-person look controller.
///
/// Owns the yaw/pitch state mutated by pointer deltas and read every frame
/// by the movement resolver and the render camera.
///
/// ## Usage
/// ```rust,ignore
/// let mut look = LookController::new();
///
/// // In your input loop, pass raw pointer deltas (in counts)
/// look.apply_look_delta(dx, dy);
///
/// // Each frame, take a snapshot for movement and camera placement
/// let orientation = look.orientation();
/// let view = look.view_forward();
/// ```
#[derive(Debug, Clone, Default)]
pub struct LookController {
    yaw: f32,
    pitch: f32,
}

impl LookController {
    /// Create a controller looking straight ahead toward -Z.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a controller with an initial yaw (radians).
    pub fn with_yaw(yaw: f32) -> Self {
        Self { yaw, pitch: 0.0 }
    }

    /// Apply one pointer-motion sample.
    ///
    /// Yaw decreases with positive horizontal delta and pitch decreases with
    /// positive vertical delta, which is the natural mouse-look convention
    /// (pointer right turns right, pointer up looks up). After the update,
    /// pitch is clamped into `[-PITCH_LIMIT, PITCH_LIMIT]`.
    ///
    /// Non-finite deltas (NaN or infinite) are discarded with a logged
    /// diagnostic; propagating them would corrupt the angles irrecoverably.
    pub fn apply_look_delta(&mut self, dx: f32, dy: f32) {
        if !dx.is_finite() || !dy.is_finite() {
            log::warn!("[LookController] discarding non-finite look delta ({dx}, {dy})");
            return;
        }
        self.yaw -= dx * LOOK_SENSITIVITY;
        self.pitch = (self.pitch - dy * LOOK_SENSITIVITY).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Current orientation snapshot for the frame.
    #[inline]
    pub fn orientation(&self) -> Orientation {
        Orientation {
            yaw: self.yaw,
            pitch: self.pitch,
        }
    }

    /// Current yaw in radians.
    #[inline]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Current pitch in radians.
    #[inline]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Set yaw directly (radians). Used when spawning with a facing direction.
    pub fn set_yaw(&mut self, yaw: f32) {
        self.yaw = yaw;
    }

    /// The pitched look direction, for camera placement.
    ///
    /// With yaw = 0 and pitch = 0 this is -Z. Movement does not use this
    /// vector; the movement resolver builds its own horizontal basis from
    /// yaw alone.
    pub fn view_forward(&self) -> Vec3 {
        Vec3::new(
            -self.yaw.sin() * self.pitch.cos(),
            self.pitch.sin(),
            -self.yaw.cos() * self.pitch.cos(),
        )
        .normalize()
    }

    /// Reset orientation to the default (looking toward -Z).
    pub fn reset(&mut self) {
        self.yaw = 0.0;
        self.pitch = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_orientation() {
        let look = LookController::new();
        assert_eq!(look.yaw(), 0.0);
        assert_eq!(look.pitch(), 0.0);
    }

    #[test]
    fn test_yaw_decreases_with_positive_dx() {
        let mut look = LookController::new();
        look.apply_look_delta(100.0, 0.0);

        // Yaw changes by exactly -dx * sensitivity
        assert!((look.yaw() - (-0.2)).abs() < 1e-6);
        assert_eq!(look.pitch(), 0.0);
    }

    #[test]
    fn test_pitch_decreases_with_positive_dy() {
        let mut look = LookController::new();
        look.apply_look_delta(0.0, 100.0);

        assert!((look.pitch() - (-0.2)).abs() < 1e-6);
        assert_eq!(look.yaw(), 0.0);
    }

    #[test]
    fn test_zero_delta_is_idempotent() {
        let mut look = LookController::new();
        look.apply_look_delta(37.0, -12.0);
        let before = look.orientation();
        look.apply_look_delta(0.0, 0.0);
        assert_eq!(look.orientation(), before);
    }

    #[test]
    fn test_pitch_clamped_looking_up() {
        let mut look = LookController::new();
        look.apply_look_delta(0.0, -1.0e6); // pointer far up

        assert!((look.pitch() - PITCH_LIMIT).abs() < 1e-6);
    }

    #[test]
    fn test_pitch_clamped_looking_down() {
        let mut look = LookController::new();
        look.apply_look_delta(0.0, 1.0e6);

        assert!((look.pitch() - (-PITCH_LIMIT)).abs() < 1e-6);
    }

    #[test]
    fn test_pitch_invariant_over_random_walk() {
        let mut look = LookController::new();
        // Deterministic pseudo-random delta sequence
        let mut x: u32 = 0x9e3779b9;
        for _ in 0..1000 {
            x = x.wrapping_mul(1664525).wrapping_add(1013904223);
            let dx = ((x >> 16) as f32 / 655.36) - 50.0;
            let dy = ((x & 0xffff) as f32 / 655.36) - 50.0;
            look.apply_look_delta(dx, dy);
            assert!(look.pitch() >= -PITCH_LIMIT && look.pitch() <= PITCH_LIMIT);
        }
    }

    #[test]
    fn test_non_finite_deltas_rejected() {
        let mut look = LookController::new();
        look.apply_look_delta(10.0, 5.0);
        let before = look.orientation();

        look.apply_look_delta(f32::NAN, 0.0);
        look.apply_look_delta(0.0, f32::INFINITY);
        look.apply_look_delta(f32::NEG_INFINITY, f32::NAN);

        assert_eq!(look.orientation(), before);
        assert!(look.yaw().is_finite());
        assert!(look.pitch().is_finite());
    }

    #[test]
    fn test_view_forward_at_rest() {
        let look = LookController::new();
        let v = look.view_forward();
        assert!(v.x.abs() < 1e-6);
        assert!(v.y.abs() < 1e-6);
        assert!((v.z - (-1.0)).abs() < 1e-6);
    }

    #[test]
    fn test_view_forward_normalized() {
        let mut look = LookController::new();
        look.apply_look_delta(123.0, 45.0);
        assert!((look.view_forward().length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_pointer_right_turns_right() {
        let mut look = LookController::new();
        look.apply_look_delta(200.0, 0.0); // pointer right

        // Facing -Z, "right" is +X; the view should swing toward +X
        let v = look.view_forward();
        assert!(v.x > 0.0);
        assert!(v.z < 0.0);
    }

    #[test]
    fn test_reset() {
        let mut look = LookController::new();
        look.apply_look_delta(500.0, 200.0);
        look.reset();
        assert_eq!(look.yaw(), 0.0);
        assert_eq!(look.pitch(), 0.0);
    }
}
