//! # Gallery Engine
//!
//! The simulation core of a 3D shooting gallery: geometry ingestion and
//! projectile collision, with rendering left to an external collaborator.
//!
//! ## Features
//!
//! - **Tolerant OBJ/MTL ingestion**: malformed lines warn and fall back,
//!   only an unreadable file fails a load
//! - **Renderer-ready meshes**: deduplicated, fan-triangulated vertex and
//!   index buffers in an interleaved layout
//! - **Continuous collision**: projectile steps are swept segments, so
//!   fast shots cannot tunnel through thin targets
//! - **Scene placement**: a line-oriented document places shared meshes
//!   with per-object transforms, eliminability, and textures
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gallery_engine::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (mut scene, report) = SceneLoader::load_scene("scenes/range.txt")?;
//!     println!("{} objects ready", report.loaded);
//!
//!     let mut projectiles = ProjectileSystem::new();
//!     projectiles.launch(
//!         Vec3::new(0.0, 1.5, 8.0),
//!         Vec3::new(0.0, 0.0, -1.0),
//!         30.0,
//!         3.0,
//!     )?;
//!
//!     for impact in projectiles.update(1.0 / 60.0, &mut scene) {
//!         println!("hit {}", impact.object);
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod assets;
pub mod config;
pub mod foundation;
pub mod physics;
pub mod render;
pub mod scene;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        assets::{AssetError, MeshHandle, MeshRegistry, ObjLoader, TextureCache},
        config::{Config, ConfigError},
        foundation::{
            math::{Transform, Vec3},
            time::Timer,
        },
        physics::{ImpactEvent, ImpactKind, Projectile, ProjectileError, ProjectileSystem},
        render::{MaterialDescriptor, Mesh, Vertex},
        scene::{Scene, SceneError, SceneLoader, SceneObject},
    };
}
