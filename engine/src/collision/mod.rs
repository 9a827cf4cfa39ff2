//! Collision Module
//!
//! The static obstacle layer: AABB math, extraction of wall-shaped collision
//! volumes from map geometry, and the broad-phase query the movement resolver
//! runs against. Volumes are world-space and frozen once extracted; the map
//! is static, so nothing here ever updates per frame.

pub mod extract;
pub mod query;
pub mod volume;

// Re-export commonly used types at module level
pub use extract::{WALL_MAX_THICKNESS, WALL_MIN_HEIGHT, extract_wall_volumes, is_wall_sized};
pub use query::{LinearScan, VolumeQuery};
pub use volume::{Aabb, CollisionVolume};
