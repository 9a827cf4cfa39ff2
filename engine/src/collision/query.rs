//! Volume Query Module
//!
//! Broad-phase lookup over the static obstacle set. The movement resolver
//! asks a [`VolumeQuery`] for volumes that might overlap the player's box and
//! then runs the exact test itself, so the query implementation is free to be
//! conservative.
//!
//! The shipped implementation is a linear scan. Wall counts for a single map
//! stay small and the set never changes after extraction, so anything fancier
//! (grids, BVHs) would be structure without payoff. The trait seam is where
//! such a structure would slot in if a map ever warranted it.

use crate::collision::{Aabb, CollisionVolume};

/// Broad-phase query over a set of collision volumes.
///
/// `candidates` returns every volume that may overlap `bounds`; it may
/// over-report (conservative) but must never miss a true overlap.
pub trait VolumeQuery {
    fn candidates(&self, bounds: &Aabb) -> Vec<&CollisionVolume>;
}

/// Linear-scan broad phase: checks every volume against the query bounds.
#[derive(Debug, Clone, Default)]
pub struct LinearScan {
    volumes: Vec<CollisionVolume>,
}

impl LinearScan {
    /// Build a scan over an extracted volume set.
    pub fn new(volumes: Vec<CollisionVolume>) -> Self {
        Self { volumes }
    }

    /// The full volume set, in extraction order.
    pub fn volumes(&self) -> &[CollisionVolume] {
        &self.volumes
    }

    pub fn len(&self) -> usize {
        self.volumes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.volumes.is_empty()
    }
}

impl VolumeQuery for LinearScan {
    fn candidates(&self, bounds: &Aabb) -> Vec<&CollisionVolume> {
        self.volumes
            .iter()
            .filter(|volume| volume.aabb().intersects(bounds))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn scan_with_walls() -> LinearScan {
        LinearScan::new(vec![
            CollisionVolume::new(Vec3::new(0.0, 1.5, -5.0), Vec3::new(2.0, 1.5, 0.2)),
            CollisionVolume::new(Vec3::new(5.0, 1.5, 0.0), Vec3::new(0.2, 1.5, 2.0)),
        ])
    }

    #[test]
    fn test_empty_scan_returns_nothing() {
        let scan = LinearScan::default();
        let probe = Aabb::from_center_half_extents(Vec3::ZERO, Vec3::splat(100.0));
        assert!(scan.is_empty());
        assert!(scan.candidates(&probe).is_empty());
    }

    #[test]
    fn test_candidates_filters_by_overlap() {
        let scan = scan_with_walls();

        // Near the first wall only
        let probe = Aabb::from_center_half_extents(Vec3::new(0.0, 1.5, -4.9), Vec3::splat(0.3));
        let hits = scan.candidates(&probe);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].center, Vec3::new(0.0, 1.5, -5.0));

        // Far from both walls
        let probe = Aabb::from_center_half_extents(Vec3::new(-20.0, 1.5, 20.0), Vec3::splat(0.3));
        assert!(scan.candidates(&probe).is_empty());
    }

    #[test]
    fn test_candidates_can_return_multiple() {
        let scan = scan_with_walls();
        let probe = Aabb::from_center_half_extents(Vec3::new(2.5, 1.5, -2.5), Vec3::splat(3.0));
        assert_eq!(scan.candidates(&probe).len(), 2);
    }
}
