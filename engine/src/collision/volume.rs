//! Collision Volume Types
//!
//! Axis-aligned boxes used for broad-phase obstacle testing. Two
//! representations cover the two uses: `Aabb` (min/max corners) for overlap
//! math, and `CollisionVolume` (center/half-extents) as the frozen obstacle
//! record derived from map geometry.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box defined by its minimum and maximum corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Create an AABB from minimum and maximum corners.
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Create an AABB from its center and half-extents.
    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Smallest AABB containing a set of points.
    ///
    /// Returns `None` for an empty set.
    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut aabb = Self::new(first, first);
        for p in iter {
            aabb.min = aabb.min.min(p);
            aabb.max = aabb.max.max(p);
        }
        Some(aabb)
    }

    /// Center point of the box.
    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Full extents (max - min) of the box.
    #[inline]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Grow this box in place to contain another.
    pub fn expand_to_contain(&mut self, other: &Aabb) {
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
    }

    /// Interval-overlap test on all three axes.
    ///
    /// Boxes that merely touch on a face count as intersecting. There is no
    /// separating axis iff the x, y, and z intervals all overlap.
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        !(self.max.x < other.min.x
            || self.min.x > other.max.x
            || self.max.y < other.min.y
            || self.min.y > other.max.y
            || self.max.z < other.min.z
            || self.min.z > other.max.z)
    }
}

/// One static obstacle derived from map geometry.
///
/// World-space, axis-aligned, immutable after extraction: the volume set is
/// built once per map and never follows geometry afterwards (the map is
/// static). Serializable so the set can be dumped as JSON for debugging in
/// place of in-scene wireframe proxies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CollisionVolume {
    /// World-space center of the box.
    pub center: Vec3,
    /// Half of the full extents on each axis.
    pub half_extents: Vec3,
}

impl CollisionVolume {
    /// Create a volume from its center and half-extents.
    pub fn new(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            center,
            half_extents,
        }
    }

    /// The volume as a min/max box for overlap testing.
    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::from_center_half_extents(self.center, self.half_extents)
    }
}
