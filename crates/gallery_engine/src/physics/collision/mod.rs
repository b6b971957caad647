//! Collision detection for projectile queries
//!
//! Intersection math is done in a single consistent coordinate space:
//! mesh geometry stays in model space and queries are transformed into it,
//! with hit data transformed back out.
//!
//! # Module Organization
//!
//! - [`primitives`] - Rays, triangles, and the reflection helper
//! - [`aabb`] - Axis-aligned bounding boxes and the slab ray test
//! - [`sweep`] - Swept-segment queries against whole meshes

pub mod aabb;
pub mod primitives;
pub mod sweep;

// Re-export commonly used types
pub use aabb::{Aabb, AabbHit, BoxFace};
pub use primitives::{reflect, Ray, Triangle};
pub use sweep::{sweep_segment_mesh, SweepHit};
