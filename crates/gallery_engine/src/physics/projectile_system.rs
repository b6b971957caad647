//! Projectile flight and collision resolution
//!
//! Each simulation step sweeps every active projectile's path segment
//! against the visible scene objects in scene order, first match wins.
//! A hit on an eliminable object removes the object and finishes the
//! projectile; any other hit reflects the flight direction and nudges
//! the projectile off the surface so the next step starts clear of it.
//! Removals on both sides are deferred until the pass is over, so
//! neither collection is mutated while it is being walked.

use crate::foundation::math::Vec3;
use crate::scene::Scene;

use super::collision::sweep_segment_mesh;
use super::projectile::{Projectile, ProjectileError};

/// Default distance a reflected projectile is pushed off the struck surface
const SURFACE_OFFSET: f32 = 1e-3;

/// How an impact was resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImpactKind {
    /// The object was eliminable and has been removed
    Eliminated,
    /// The projectile bounced off
    Reflected,
}

/// Record of one projectile-object impact
#[derive(Debug, Clone)]
pub struct ImpactEvent {
    /// Name of the struck object
    pub object: String,
    /// World-space impact point
    pub point: Vec3,
    /// World-space surface normal at the impact, facing the projectile
    pub normal: Vec3,
    /// How the impact was resolved
    pub kind: ImpactKind,
}

/// Owns in-flight projectiles and resolves them against a scene
pub struct ProjectileSystem {
    projectiles: Vec<Projectile>,
    surface_offset: f32,
}

impl Default for ProjectileSystem {
    fn default() -> Self {
        Self {
            projectiles: Vec::new(),
            surface_offset: SURFACE_OFFSET,
        }
    }
}

impl ProjectileSystem {
    /// Create a system with no projectiles in flight
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the distance reflected projectiles are pushed off a surface
    #[must_use]
    pub fn with_surface_offset(mut self, offset: f32) -> Self {
        self.surface_offset = offset;
        self
    }

    /// Take an already-built projectile into flight
    pub fn spawn(&mut self, projectile: Projectile) {
        self.projectiles.push(projectile);
    }

    /// Build and launch a projectile in one call
    pub fn launch(
        &mut self,
        position: Vec3,
        direction: Vec3,
        speed: f32,
        max_lifetime: f32,
    ) -> Result<(), ProjectileError> {
        self.projectiles
            .push(Projectile::new(position, direction, speed, max_lifetime)?);
        Ok(())
    }

    /// Projectiles currently in flight
    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    /// Number of projectiles in flight
    pub fn len(&self) -> usize {
        self.projectiles.len()
    }

    /// Whether no projectiles are in flight
    pub fn is_empty(&self) -> bool {
        self.projectiles.is_empty()
    }

    /// Advance every projectile by `dt` seconds and resolve hits
    ///
    /// Expired projectiles and eliminated objects are culled before this
    /// returns.
    ///
    /// # Returns
    /// One [`ImpactEvent`] per resolved hit, in resolution order.
    pub fn update(&mut self, dt: f32, scene: &mut Scene) -> Vec<ImpactEvent> {
        let mut events = Vec::new();
        let (objects, registry) = scene.objects_and_meshes();

        for projectile in &mut self.projectiles {
            projectile.age(dt);
            if !projectile.is_active() {
                continue;
            }

            let end = projectile.next_position(dt);
            let mut resolved = false;

            for object in objects.iter_mut() {
                if object.doomed || !object.visible {
                    continue;
                }
                let mesh = match registry.get(object.mesh) {
                    Some(mesh) => mesh,
                    None => continue,
                };
                let hit = match sweep_segment_mesh(
                    projectile.position,
                    end,
                    mesh,
                    &object.transform,
                ) {
                    Some(hit) => hit,
                    None => continue,
                };

                if object.eliminable {
                    object.doomed = true;
                    projectile.position = hit.point;
                    projectile.expire();
                    log::debug!(
                        "projectile eliminated '{}' after {:.2}s of flight",
                        object.name,
                        projectile.lifetime(),
                    );
                    events.push(ImpactEvent {
                        object: object.name.clone(),
                        point: hit.point,
                        normal: hit.normal,
                        kind: ImpactKind::Eliminated,
                    });
                } else {
                    projectile.deflect(hit.normal);
                    projectile.position = hit.point + hit.normal * self.surface_offset;
                    log::trace!("projectile reflected off '{}'", object.name);
                    events.push(ImpactEvent {
                        object: object.name.clone(),
                        point: hit.point,
                        normal: hit.normal,
                        kind: ImpactKind::Reflected,
                    });
                }
                resolved = true;
                break;
            }

            if !resolved {
                projectile.position = end;
            }
        }

        self.projectiles.retain(Projectile::is_active);
        scene.remove_doomed();
        events
    }
}
