//! Wall Volume Extraction Module
//!
//! Derives the static obstacle set from map geometry. Rather than colliding
//! against raw triangle meshes, the extractor reduces each mesh primitive to
//! its world-space AABB and keeps only the ones shaped like walls: tall and
//! thin on at least one horizontal axis. Floors, props, and decorative
//! clutter fall out of the predicate and stay walkable.
//!
//! Extraction is a pure function of the scene. It runs once when a map
//! becomes ready and the resulting set is frozen for the map's lifetime.

use glam::Vec3;

use crate::collision::CollisionVolume;
use crate::scene::MapScene;

/// Minimum world-space height (y extent) for a box to count as a wall.
pub const WALL_MIN_HEIGHT: f32 = 2.0;

/// Maximum thickness on x or z for a tall box to count as a wall.
pub const WALL_MAX_THICKNESS: f32 = 1.0;

/// Whether a world-space extent is wall-shaped: tall, and thin on at least
/// one horizontal axis. Strict comparisons, so a degenerate (zero-size) box
/// fails the height test.
#[inline]
pub fn is_wall_sized(size: Vec3) -> bool {
    size.y > WALL_MIN_HEIGHT && (size.x < WALL_MAX_THICKNESS || size.z < WALL_MAX_THICKNESS)
}

/// Extract wall collision volumes from a map scene.
///
/// Visits every mesh primitive once with its accumulated world transform,
/// computes the world-space AABB of the primitive's local bounding box, and
/// emits a [`CollisionVolume`] for each box that passes [`is_wall_sized`].
/// Deterministic: the same scene always yields the same volumes in tree
/// order.
pub fn extract_wall_volumes(scene: &MapScene) -> Vec<CollisionVolume> {
    let mut volumes = Vec::new();
    let mut visited = 0usize;

    scene.visit_primitives(|primitive, world| {
        visited += 1;
        let bounds = primitive.world_bounds(&world);
        if is_wall_sized(bounds.size()) {
            volumes.push(CollisionVolume::new(bounds.center(), bounds.size() * 0.5));
        }
    });

    log::debug!(
        "[Collision] extracted {} wall volumes from {} primitives",
        volumes.len(),
        visited
    );
    volumes
}
