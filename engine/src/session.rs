//! Walk Session Module
//!
//! The per-process navigation session: one player, one orientation, one map.
//! `WalkSession` owns the player's eye position, the look controller, and the
//! map load state machine, and exposes the per-frame operations the frame
//! driver calls. Everything here is single-threaded and synchronous; the only
//! async boundary (background map loading) stays outside in `MapLoader`.
//!
//! Load lifecycle: `Unloaded -> Loading -> Ready | Failed`. While the map is
//! not `Ready` the obstacle set is empty and movement is unobstructed - an
//! unavailable map degrades navigation, it never stops the session.

use glam::Vec3;

use crate::camera::{LookController, Orientation};
use crate::collision::{CollisionVolume, LinearScan, extract_wall_volumes};
use crate::input::MovementKeys;
use crate::player::{PLAYER_EYE_HEIGHT, resolve_step};
use crate::scene::{MapLoadError, MapScene};

/// Map load state machine.
#[derive(Debug)]
pub enum MapState {
    /// No map has been requested.
    Unloaded,
    /// A load is in flight; movement is unobstructed until it lands.
    Loading,
    /// Map decoded and collision volumes extracted and frozen.
    Ready { volumes: LinearScan },
    /// The load failed; the session keeps running without obstacles.
    Failed(MapLoadError),
}

impl MapState {
    pub fn is_ready(&self) -> bool {
        matches!(self, MapState::Ready { .. })
    }
}

/// A first-person navigation session.
///
/// Created once, fed input every frame, queried for the resulting player
/// pose. The player exists from the start at a default position; when a map
/// becomes ready the player is re-positioned once at the map's spawn point.
pub struct WalkSession {
    look: LookController,
    position: Vec3,
    state: MapState,
}

impl Default for WalkSession {
    fn default() -> Self {
        Self::new()
    }
}

impl WalkSession {
    /// Create a session with no map, standing at the origin.
    pub fn new() -> Self {
        Self {
            look: LookController::new(),
            position: Vec3::new(0.0, PLAYER_EYE_HEIGHT, 0.0),
            state: MapState::Unloaded,
        }
    }

    /// Mark a map load as in flight.
    pub fn begin_loading(&mut self) {
        log::info!("[Session] map loading");
        self.state = MapState::Loading;
    }

    /// Install a decoded map: extract its collision volumes and move the
    /// player to the spawn point.
    ///
    /// Spawn is derived from the map's bounding box: centered on x/z, eye
    /// height above the box floor. A map with no geometry leaves the player
    /// where they are.
    pub fn complete_loading(&mut self, scene: &MapScene) {
        let volumes = extract_wall_volumes(scene);
        log::info!(
            "[Session] map ready: {} primitives, {} wall volumes",
            scene.primitive_count(),
            volumes.len()
        );

        if let Some(bounds) = scene.bounds() {
            let center = bounds.center();
            self.position = Vec3::new(center.x, bounds.min.y + PLAYER_EYE_HEIGHT, center.z);
        }
        self.state = MapState::Ready {
            volumes: LinearScan::new(volumes),
        };
    }

    /// Record a failed map load. Movement continues unobstructed.
    pub fn fail_loading(&mut self, error: MapLoadError) {
        log::error!("[Session] map load failed: {}", error);
        self.state = MapState::Failed(error);
    }

    /// Apply one pointer-motion sample to the look controller.
    pub fn apply_look(&mut self, dx: f32, dy: f32) {
        self.look.apply_look_delta(dx, dy);
    }

    /// Advance one frame of movement from the held keys.
    pub fn frame(&mut self, keys: &MovementKeys) {
        let yaw = self.look.yaw();
        self.position = match &self.state {
            MapState::Ready { volumes } => resolve_step(keys, yaw, self.position, volumes),
            // Vec::new() does not allocate; an empty scan blocks nothing
            _ => resolve_step(keys, yaw, self.position, &LinearScan::default()),
        };
    }

    /// Current eye position.
    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Current orientation snapshot.
    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.look.orientation()
    }

    /// The pitched look direction, for camera placement.
    #[inline]
    pub fn view_forward(&self) -> Vec3 {
        self.look.view_forward()
    }

    /// The frozen obstacle set, empty unless the map is ready.
    pub fn volumes(&self) -> &[CollisionVolume] {
        match &self.state {
            MapState::Ready { volumes } => volumes.volumes(),
            _ => &[],
        }
    }

    /// Current map load state.
    #[inline]
    pub fn state(&self) -> &MapState {
        &self.state
    }
}
