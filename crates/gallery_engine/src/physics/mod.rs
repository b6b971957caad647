//! Physics module for projectile collision detection and response
//!
//! Collision queries are continuous: a projectile's step is swept as a
//! segment so fast movers cannot skip thin geometry. Response follows the
//! reflection law for solid objects and removal for eliminable ones.

pub mod collision;
pub mod projectile;
pub mod projectile_system;

pub use collision::{
    reflect, sweep_segment_mesh, Aabb, AabbHit, BoxFace, Ray, SweepHit, Triangle,
};
pub use projectile::{Projectile, ProjectileError, ProjectileState};
pub use projectile_system::{ImpactEvent, ImpactKind, ProjectileSystem};
