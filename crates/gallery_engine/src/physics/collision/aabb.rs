//! Axis-aligned bounding boxes
//!
//! The coarse collision volume derived for every mesh at assembly time and
//! the first (cheap) phase of every swept projectile test.

use crate::foundation::math::Vec3;

/// Face of an axis-aligned box, identifying the slab a ray entered through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxFace {
    /// The x = min.x face
    NegX,
    /// The x = max.x face
    PosX,
    /// The y = min.y face
    NegY,
    /// The y = max.y face
    PosY,
    /// The z = min.z face
    NegZ,
    /// The z = max.z face
    PosZ,
}

impl BoxFace {
    /// Outward unit normal of this face
    pub fn normal(self) -> Vec3 {
        match self {
            Self::NegX => Vec3::new(-1.0, 0.0, 0.0),
            Self::PosX => Vec3::new(1.0, 0.0, 0.0),
            Self::NegY => Vec3::new(0.0, -1.0, 0.0),
            Self::PosY => Vec3::new(0.0, 1.0, 0.0),
            Self::NegZ => Vec3::new(0.0, 0.0, -1.0),
            Self::PosZ => Vec3::new(0.0, 0.0, 1.0),
        }
    }
}

/// Result of a ray vs. box intersection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AabbHit {
    /// Parametric distance along the ray to the entry point (clamped to 0
    /// for rays starting inside the box)
    pub distance: f32,
    /// The face the ray entered through, for deriving a reflection normal
    /// when no finer per-triangle data is available
    pub face: BoxFace,
}

/// Axis-aligned bounding box
///
/// A freshly created box is empty: min at +∞ and max at −∞, so that the
/// first merged point becomes both corners. Invariant once populated:
/// min ≤ max component-wise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner
    pub min: Vec3,
    /// Maximum corner
    pub max: Vec3,
}

impl Default for Aabb {
    fn default() -> Self {
        Self::empty()
    }
}

impl Aabb {
    /// Create an empty box (the +∞/−∞ sentinel state)
    pub fn empty() -> Self {
        Self {
            min: Vec3::new(f32::INFINITY, f32::INFINITY, f32::INFINITY),
            max: Vec3::new(f32::NEG_INFINITY, f32::NEG_INFINITY, f32::NEG_INFINITY),
        }
    }

    /// Create a box from explicit corners
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Whether no point has been merged yet
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x
    }

    /// Grow the box to contain a point
    pub fn merge_point(&mut self, point: Vec3) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.min.z = self.min.z.min(point.z);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
        self.max.z = self.max.z.max(point.z);
    }

    /// Grow the box to contain another box
    pub fn merge(&mut self, other: &Aabb) {
        if !other.is_empty() {
            self.merge_point(other.min);
            self.merge_point(other.max);
        }
    }

    /// Center point of the box
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Size along each axis
    pub fn extents(&self) -> Vec3 {
        self.max - self.min
    }

    /// Whether a point lies inside or on the box
    pub fn contains_point(&self, point: Vec3) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }

    /// Whether two boxes overlap
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }

    /// Slab-method ray intersection
    ///
    /// Computes per-axis entry/exit parametric distances via the inverse
    /// direction and intersects the three intervals. A hit requires the
    /// intersected near distance to not exceed the far distance and the far
    /// distance to be non-negative (box not entirely behind the origin).
    ///
    /// # Arguments
    /// * `origin` - Ray origin
    /// * `direction` - Ray direction, need not be normalized
    ///
    /// # Returns
    /// The entry distance (in units of `direction`'s length) and entry
    /// face, or `None` on a miss. Rays starting inside report distance 0.
    pub fn intersect_ray(&self, origin: Vec3, direction: Vec3) -> Option<AabbHit> {
        if self.is_empty() {
            return None;
        }

        let mut t_near = f32::NEG_INFINITY;
        let mut t_far = f32::INFINITY;
        let mut entry_axis = 0;

        for axis in 0..3 {
            let inv = if direction[axis] != 0.0 {
                1.0 / direction[axis]
            } else {
                f32::INFINITY
            };
            let mut t1 = (self.min[axis] - origin[axis]) * inv;
            let mut t2 = (self.max[axis] - origin[axis]) * inv;
            if t1 > t2 {
                std::mem::swap(&mut t1, &mut t2);
            }
            if t1 > t_near {
                t_near = t1;
                entry_axis = axis;
            }
            t_far = t_far.min(t2);
            if t_near > t_far {
                return None;
            }
        }

        if t_far < 0.0 {
            return None;
        }

        let face = match entry_axis {
            0 if direction.x > 0.0 => BoxFace::NegX,
            0 => BoxFace::PosX,
            1 if direction.y > 0.0 => BoxFace::NegY,
            1 => BoxFace::PosY,
            _ if direction.z > 0.0 => BoxFace::NegZ,
            _ => BoxFace::PosZ,
        };

        Some(AabbHit {
            distance: t_near.max(0.0),
            face,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_box() -> Aabb {
        Aabb::new(Vec3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, 1.0, 1.0))
    }

    #[test]
    fn test_empty_sentinel_until_first_merge() {
        let mut aabb = Aabb::empty();
        assert!(aabb.is_empty());

        aabb.merge_point(Vec3::new(2.0, -3.0, 0.5));
        assert!(!aabb.is_empty());
        assert_eq!(aabb.min, Vec3::new(2.0, -3.0, 0.5));
        assert_eq!(aabb.max, Vec3::new(2.0, -3.0, 0.5));
    }

    #[test]
    fn test_merge_point_grows_both_corners() {
        let mut aabb = Aabb::empty();
        aabb.merge_point(Vec3::new(1.0, 1.0, 1.0));
        aabb.merge_point(Vec3::new(-2.0, 0.0, 3.0));

        assert_eq!(aabb.min, Vec3::new(-2.0, 0.0, 1.0));
        assert_eq!(aabb.max, Vec3::new(1.0, 1.0, 3.0));
    }

    #[test]
    fn test_merge_ignores_empty_box() {
        let mut aabb = unit_box();
        aabb.merge(&Aabb::empty());
        assert_eq!(aabb, unit_box());
    }

    #[test]
    fn test_contains_point() {
        let aabb = unit_box();
        assert!(aabb.contains_point(Vec3::zeros()));
        assert!(aabb.contains_point(Vec3::new(1.0, -1.0, 1.0)));
        assert!(!aabb.contains_point(Vec3::new(1.001, 0.0, 0.0)));
    }

    #[test]
    fn test_ray_hits_at_analytic_distance() {
        let aabb = unit_box();
        let hit = aabb
            .intersect_ray(Vec3::new(5.0, 0.0, 0.0), Vec3::new(-1.0, 0.0, 0.0))
            .unwrap();

        assert_relative_eq!(hit.distance, 4.0, epsilon = 1e-6);
        assert_eq!(hit.face, BoxFace::PosX);
        assert_eq!(hit.face.normal(), Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_ray_entry_face_per_axis() {
        let aabb = unit_box();

        let from_below = aabb
            .intersect_ray(Vec3::new(0.0, -5.0, 0.0), Vec3::new(0.0, 1.0, 0.0))
            .unwrap();
        assert_eq!(from_below.face, BoxFace::NegY);

        let from_front = aabb
            .intersect_ray(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0))
            .unwrap();
        assert_eq!(from_front.face, BoxFace::PosZ);
    }

    #[test]
    fn test_ray_misses_behind_origin() {
        let aabb = unit_box();
        assert!(aabb
            .intersect_ray(Vec3::new(5.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0))
            .is_none());
    }

    #[test]
    fn test_ray_parallel_outside_slab_misses() {
        let aabb = unit_box();
        assert!(aabb
            .intersect_ray(Vec3::new(0.0, 2.0, -5.0), Vec3::new(0.0, 0.0, 1.0))
            .is_none());
    }

    #[test]
    fn test_ray_inside_box_clamps_to_zero() {
        let aabb = unit_box();
        let hit = aabb
            .intersect_ray(Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0))
            .unwrap();
        assert_relative_eq!(hit.distance, 0.0);
    }

    #[test]
    fn test_empty_box_never_hit() {
        assert!(Aabb::empty()
            .intersect_ray(Vec3::new(5.0, 0.0, 0.0), Vec3::new(-1.0, 0.0, 0.0))
            .is_none());
    }

    #[test]
    fn test_diagonal_ray_distance() {
        let aabb = unit_box();
        let direction = Vec3::new(-1.0, -1.0, 0.0).normalize();
        let hit = aabb.intersect_ray(Vec3::new(3.0, 3.0, 0.0), direction).unwrap();

        // Entry at the corner (1, 1, 0): distance = |(3,3) - (1,1)| = 2√2
        assert_relative_eq!(hit.distance, 2.0 * std::f32::consts::SQRT_2, epsilon = 1e-5);
    }
}
