//! Liminal Engine Library
//!
//! A first-person navigation and collision layer for static 3D maps.
//! The engine owns mouse-look orientation, keyboard-driven planar movement,
//! and the derivation of simplified axis-aligned collision volumes from
//! arbitrary map geometry. It deliberately does NOT own rendering, asset
//! decoding, or window management - those are external collaborators that
//! feed it input and consume the resulting player pose.
//!
//! # Modules
//!
//! - [`camera`] - Mouse-look orientation with pitch clamping
//! - [`input`] - Platform-agnostic keyboard and captured-pointer state
//! - [`collision`] - Collision volumes, wall extraction, broad-phase queries
//! - [`scene`] - Static map scene graph and background map loading
//! - [`player`] - Per-frame movement resolution against collision volumes
//! - [`session`] - The per-process session tying the above together
//!
//! # Example
//!
//! ```ignore
//! use liminal_engine::input::MovementKeys;
//! use liminal_engine::scene::MapScene;
//! use liminal_engine::session::WalkSession;
//!
//! let mut session = WalkSession::new();
//! let scene: MapScene = serde_json::from_str(map_json)?;
//! session.complete_loading(&scene);
//!
//! // Each frame:
//! session.apply_look(mouse_dx, mouse_dy);
//! session.frame(&movement_keys);
//! let eye = session.position();
//! ```

pub mod camera;
pub mod collision;
pub mod input;
pub mod player;
pub mod scene;
pub mod session;

// Re-export commonly used types at crate level for convenience
pub use camera::{LookController, Orientation};
pub use collision::{Aabb, CollisionVolume, LinearScan, VolumeQuery, extract_wall_volumes};
pub use input::{CapturedPointer, InputState, KeyCode, MovementKeys};
pub use player::resolve_step;
pub use scene::{MapLoadError, MapLoader, MapNode, MapScene, MeshPrimitive};
pub use session::{MapState, WalkSession};
