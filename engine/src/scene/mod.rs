//! Scene Module
//!
//! The static map as the engine sees it: a serde-backed scene graph of
//! transform nodes and bounding-box primitives, plus the background loader
//! that reads map files off the frame loop. Rendering-facing mesh data never
//! enters this module; the collision extractor only needs transforms and
//! boxes.

pub mod graph;
pub mod load;

// Re-export commonly used types at module level
pub use graph::{MapNode, MapScene, MeshPrimitive};
pub use load::{MapLoadError, MapLoader, load_map_file};
