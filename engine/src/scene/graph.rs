//! Map Scene Graph Module
//!
//! A minimal world-space scene description for static maps: a tree of
//! transform nodes whose leaves carry mesh primitives, each primitive
//! described only by its local-space bounding box. That is all the collision
//! extractor needs; vertex data, materials, and rendering stay with whatever
//! external system displays the map.
//!
//! The whole graph round-trips through serde, which is also the demo map
//! file format (JSON).

use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::collision::Aabb;

fn identity_rotation() -> Quat {
    Quat::IDENTITY
}

fn unit_scale() -> Vec3 {
    Vec3::ONE
}

/// One mesh primitive, reduced to its local-space bounding box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshPrimitive {
    /// Optional label carried through from the map file, for diagnostics.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Bounding box of the primitive's geometry in node-local space.
    pub bounds: Aabb,
}

impl MeshPrimitive {
    /// World-space AABB of this primitive under the given world transform.
    ///
    /// Transforms all 8 corners of the local box and re-wraps them, so the
    /// result stays axis-aligned (and conservative) under rotation.
    pub fn world_bounds(&self, world: &Mat4) -> Aabb {
        let Aabb { min, max } = self.bounds;
        let corners = [
            Vec3::new(min.x, min.y, min.z),
            Vec3::new(max.x, min.y, min.z),
            Vec3::new(min.x, max.y, min.z),
            Vec3::new(max.x, max.y, min.z),
            Vec3::new(min.x, min.y, max.z),
            Vec3::new(max.x, min.y, max.z),
            Vec3::new(min.x, max.y, max.z),
            Vec3::new(max.x, max.y, max.z),
        ];
        // from_points on 8 corners never yields None
        Aabb::from_points(corners.iter().map(|c| world.transform_point3(*c)))
            .unwrap_or(self.bounds)
    }
}

/// One node in the map scene tree: a local transform, the primitives
/// attached at this level, and child nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Local translation relative to the parent node.
    #[serde(default)]
    pub translation: Vec3,
    /// Local rotation relative to the parent node.
    #[serde(default = "identity_rotation")]
    pub rotation: Quat,
    /// Local scale relative to the parent node.
    #[serde(default = "unit_scale")]
    pub scale: Vec3,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub primitives: Vec<MeshPrimitive>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MapNode>,
}

impl Default for MapNode {
    fn default() -> Self {
        Self {
            name: None,
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
            primitives: Vec::new(),
            children: Vec::new(),
        }
    }
}

impl MapNode {
    /// The node's local transform matrix (scale, then rotation, then
    /// translation).
    pub fn local_transform(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }

    fn visit<F: FnMut(&MeshPrimitive, Mat4)>(&self, parent: Mat4, f: &mut F) {
        let world = parent * self.local_transform();
        for primitive in &self.primitives {
            f(primitive, world);
        }
        for child in &self.children {
            child.visit(world, f);
        }
    }
}

/// A complete static map: the root nodes of the scene tree.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MapScene {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub nodes: Vec<MapNode>,
}

impl MapScene {
    /// Visit every mesh primitive exactly once with its accumulated world
    /// transform, in depth-first tree order.
    pub fn visit_primitives<F: FnMut(&MeshPrimitive, Mat4)>(&self, mut f: F) {
        for node in &self.nodes {
            node.visit(Mat4::IDENTITY, &mut f);
        }
    }

    /// World-space bounding box of all primitives, or `None` for a map with
    /// no geometry. Used to derive the spawn position.
    pub fn bounds(&self) -> Option<Aabb> {
        let mut total: Option<Aabb> = None;
        self.visit_primitives(|primitive, world| {
            let world_bounds = primitive.world_bounds(&world);
            match &mut total {
                Some(aabb) => aabb.expand_to_contain(&world_bounds),
                None => total = Some(world_bounds),
            }
        });
        total
    }

    /// Total primitive count across the tree, for load diagnostics.
    pub fn primitive_count(&self) -> usize {
        let mut count = 0;
        self.visit_primitives(|_, _| count += 1);
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn box_primitive(min: Vec3, max: Vec3) -> MeshPrimitive {
        MeshPrimitive {
            name: None,
            bounds: Aabb::new(min, max),
        }
    }

    #[test]
    fn test_world_bounds_with_translation() {
        let prim = box_primitive(Vec3::splat(-1.0), Vec3::splat(1.0));
        let world = Mat4::from_translation(Vec3::new(5.0, 0.0, -3.0));

        let bounds = prim.world_bounds(&world);
        assert_eq!(bounds.min, Vec3::new(4.0, -1.0, -4.0));
        assert_eq!(bounds.max, Vec3::new(6.0, 1.0, -2.0));
    }

    #[test]
    fn test_world_bounds_with_rotation_stays_axis_aligned() {
        // A thin slab rotated 90 degrees about Y swaps its x/z extents
        let prim = box_primitive(Vec3::new(-2.0, 0.0, -0.1), Vec3::new(2.0, 3.0, 0.1));
        let world = Mat4::from_rotation_y(std::f32::consts::FRAC_PI_2);

        let bounds = prim.world_bounds(&world);
        let size = bounds.size();
        assert!((size.x - 0.2).abs() < 1e-5);
        assert!((size.y - 3.0).abs() < 1e-5);
        assert!((size.z - 4.0).abs() < 1e-5);
    }

    #[test]
    fn test_transforms_accumulate_down_the_tree() {
        let scene = MapScene {
            name: None,
            nodes: vec![MapNode {
                translation: Vec3::new(10.0, 0.0, 0.0),
                children: vec![MapNode {
                    translation: Vec3::new(0.0, 2.0, 0.0),
                    primitives: vec![box_primitive(Vec3::ZERO, Vec3::ONE)],
                    ..Default::default()
                }],
                ..Default::default()
            }],
        };

        let mut visited = Vec::new();
        scene.visit_primitives(|prim, world| {
            visited.push(prim.world_bounds(&world));
        });

        assert_eq!(visited.len(), 1);
        assert_eq!(visited[0].min, Vec3::new(10.0, 2.0, 0.0));
        assert_eq!(visited[0].max, Vec3::new(11.0, 3.0, 1.0));
    }

    #[test]
    fn test_scene_bounds_cover_all_primitives() {
        let scene = MapScene {
            name: None,
            nodes: vec![
                MapNode {
                    primitives: vec![box_primitive(Vec3::splat(-4.0), Vec3::splat(-2.0))],
                    ..Default::default()
                },
                MapNode {
                    primitives: vec![box_primitive(Vec3::splat(1.0), Vec3::splat(3.0))],
                    ..Default::default()
                },
            ],
        };

        let bounds = scene.bounds().unwrap();
        assert_eq!(bounds.min, Vec3::splat(-4.0));
        assert_eq!(bounds.max, Vec3::splat(3.0));
    }

    #[test]
    fn test_empty_scene_has_no_bounds() {
        let scene = MapScene::default();
        assert!(scene.bounds().is_none());
        assert_eq!(scene.primitive_count(), 0);
    }

    #[test]
    fn test_map_json_round_trip() {
        let json = r#"{
            "name": "demo",
            "nodes": [
                {
                    "name": "wall",
                    "translation": [0.0, 1.0, -0.6],
                    "primitives": [
                        { "bounds": { "min": [-2.0, -1.5, -0.2], "max": [2.0, 1.5, 0.2] } }
                    ]
                }
            ]
        }"#;

        let scene: MapScene = serde_json::from_str(json).unwrap();
        assert_eq!(scene.name.as_deref(), Some("demo"));
        assert_eq!(scene.primitive_count(), 1);
        assert_eq!(scene.nodes[0].rotation, Quat::IDENTITY);
        assert_eq!(scene.nodes[0].scale, Vec3::ONE);

        let back: MapScene = serde_json::from_str(&serde_json::to_string(&scene).unwrap()).unwrap();
        assert_eq!(back, scene);
    }
}
