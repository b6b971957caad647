//! Projectile state and motion
//!
//! A projectile is a point mass with a unit flight direction, a scalar
//! speed, and a bounded lifetime. Direction is normalized at construction
//! and after every deflection, so motion math can assume unit length.

use thiserror::Error;

use crate::foundation::math::Vec3;

use super::collision::reflect;

/// Projectile construction errors
#[derive(Debug, Error)]
pub enum ProjectileError {
    /// A projectile with no direction has no flight path
    #[error("projectile direction must be non-zero")]
    ZeroDirection,
}

/// Lifecycle state of a projectile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectileState {
    /// In flight and colliding
    Active,
    /// Finished; culled at the end of the update pass
    Expired,
}

/// A point projectile in flight
#[derive(Debug, Clone)]
pub struct Projectile {
    /// Current position in world space
    pub position: Vec3,
    /// Speed in world units per second
    pub speed: f32,
    /// Flight time bound in seconds
    pub max_lifetime: f32,
    direction: Vec3,
    lifetime: f32,
    state: ProjectileState,
}

impl Projectile {
    /// Launch a projectile
    ///
    /// # Arguments
    /// * `position` - Launch point in world space
    /// * `direction` - Flight direction; normalized internally
    /// * `speed` - World units per second
    /// * `max_lifetime` - Seconds of flight before expiry
    ///
    /// # Returns
    /// The active projectile, or [`ProjectileError::ZeroDirection`] when
    /// `direction` has zero length.
    pub fn new(
        position: Vec3,
        direction: Vec3,
        speed: f32,
        max_lifetime: f32,
    ) -> Result<Self, ProjectileError> {
        if direction.norm() == 0.0 {
            return Err(ProjectileError::ZeroDirection);
        }
        Ok(Self {
            position,
            speed,
            max_lifetime,
            direction: direction.normalize(),
            lifetime: 0.0,
            state: ProjectileState::Active,
        })
    }

    /// Unit flight direction
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Seconds since launch
    pub fn lifetime(&self) -> f32 {
        self.lifetime
    }

    /// Current lifecycle state
    pub fn state(&self) -> ProjectileState {
        self.state
    }

    /// Whether the projectile is still in flight
    pub fn is_active(&self) -> bool {
        self.state == ProjectileState::Active
    }

    /// Where the projectile lands after `dt` seconds with no obstruction
    pub fn next_position(&self, dt: f32) -> Vec3 {
        self.position + self.direction * self.speed * dt
    }

    /// Accumulate flight time, expiring once the bound is reached
    pub fn age(&mut self, dt: f32) {
        self.lifetime += dt;
        if self.lifetime >= self.max_lifetime {
            self.state = ProjectileState::Expired;
        }
    }

    /// Mark the projectile finished
    pub fn expire(&mut self) {
        self.state = ProjectileState::Expired;
    }

    /// Bounce the flight direction off a surface with the given unit normal
    pub fn deflect(&mut self, normal: Vec3) {
        self.direction = reflect(self.direction, normal).normalize();
    }
}
