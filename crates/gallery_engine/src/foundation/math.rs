//! Math utilities and types
//!
//! Provides the fundamental math types for mesh assembly and collision
//! queries, built on nalgebra.

pub use nalgebra::{
    Vector2, Vector3, Vector4,
    Matrix3, Matrix4,
    Quaternion,
    Unit,
};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type
pub type Vec4 = Vector4<f32>;

/// 3x3 matrix type
pub type Mat3 = Matrix3<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// 3D point type
pub type Point3 = nalgebra::Point3<f32>;

/// Quaternion type for rotations
pub type Quat = Unit<Quaternion<f32>>;

/// Transform representing position, rotation, and scale
///
/// Composes into a single matrix with scale applied first, then rotation,
/// then translation, so a unit-cube mesh scaled by 2 and placed at x=5
/// occupies x ∈ [3, 7].
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    /// Position in 3D space
    pub position: Vec3,

    /// Rotation quaternion
    pub rotation: Quat,

    /// Scale factors
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            rotation: Quat::identity(),
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }
}

impl Transform {
    /// Create a new identity transform
    pub fn identity() -> Self {
        Self::default()
    }

    /// Create a transform with only position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Create a transform from position, Euler rotation in degrees (x, y, z),
    /// and scale, the field layout used by scene placement documents
    pub fn from_placement(position: Vec3, rotation_degrees: Vec3, scale: Vec3) -> Self {
        Self {
            position,
            rotation: Quat::from_euler_angles(
                utils::deg_to_rad(rotation_degrees.x),
                utils::deg_to_rad(rotation_degrees.y),
                utils::deg_to_rad(rotation_degrees.z),
            ),
            scale,
        }
    }

    /// Convert to a transformation matrix (translation * rotation * scale)
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::new_translation(&self.position)
            * self.rotation.to_homogeneous()
            * Mat4::new_nonuniform_scaling(&self.scale)
    }

    /// Inverse of the transformation matrix, for moving world-space
    /// rays/segments into this transform's local space
    ///
    /// Returns `None` when the matrix is singular (a zero scale component).
    pub fn inverse_matrix(&self) -> Option<Mat4> {
        self.to_matrix().try_inverse()
    }

    /// Normal matrix (inverse-transpose of the upper 3x3), for carrying
    /// surface normals from local space back to world space under
    /// non-uniform scale
    pub fn normal_matrix(&self) -> Option<Mat3> {
        let linear = self.to_matrix().fixed_view::<3, 3>(0, 0).into_owned();
        linear.try_inverse().map(|inv| inv.transpose())
    }

    /// Apply this transform to a point
    pub fn transform_point(&self, point: Point3) -> Point3 {
        let matrix = self.to_matrix();
        matrix.transform_point(&point)
    }

    /// Apply this transform to a vector
    pub fn transform_vector(&self, vector: Vec3) -> Vec3 {
        let matrix = self.to_matrix();
        matrix.transform_vector(&vector)
    }
}

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;

    /// Radians to degrees conversion factor
    pub const RAD_TO_DEG: f32 = 180.0 / PI;
}

/// Math utility functions
pub mod utils {
    use super::constants;

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }

    /// Convert radians to degrees
    pub fn rad_to_deg(radians: f32) -> f32 {
        radians * constants::RAD_TO_DEG
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_transform_scale_before_translation() {
        let transform = Transform {
            position: Vec3::new(5.0, 0.0, 0.0),
            rotation: Quat::identity(),
            scale: Vec3::new(2.0, 2.0, 2.0),
        };

        let p = transform.transform_point(Point3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(p.x, 7.0, epsilon = 1e-5);
    }

    #[test]
    fn test_transform_rotation_applied_after_scale() {
        // 90 degrees about y sends +x to -z; scale of 3 on x stretches first
        let transform = Transform::from_placement(
            Vec3::zeros(),
            Vec3::new(0.0, 90.0, 0.0),
            Vec3::new(3.0, 1.0, 1.0),
        );

        let p = transform.transform_point(Point3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(p.z, -3.0, epsilon = 1e-5);
    }

    #[test]
    fn test_inverse_matrix_round_trip() {
        let transform = Transform::from_placement(
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(10.0, 45.0, -30.0),
            Vec3::new(2.0, 0.5, 1.5),
        );

        let world = transform.transform_point(Point3::new(0.3, -0.7, 1.1));
        let inverse = transform.inverse_matrix().unwrap();
        let local = inverse.transform_point(&world);

        assert_relative_eq!(local.x, 0.3, epsilon = 1e-4);
        assert_relative_eq!(local.y, -0.7, epsilon = 1e-4);
        assert_relative_eq!(local.z, 1.1, epsilon = 1e-4);
    }

    #[test]
    fn test_inverse_matrix_singular_scale() {
        let transform = Transform {
            scale: Vec3::new(0.0, 1.0, 1.0),
            ..Transform::identity()
        };
        assert!(transform.inverse_matrix().is_none());
    }

    #[test]
    fn test_normal_matrix_nonuniform_scale() {
        // A plane tilted by non-uniform scale: its normal must not simply
        // scale with the geometry. For scale (2, 1, 1), a local normal
        // (1, 0, 0) stays axis-aligned but shrinks; renormalizing must give
        // back the unit x axis.
        let transform = Transform {
            scale: Vec3::new(2.0, 1.0, 1.0),
            ..Transform::identity()
        };

        let n = (transform.normal_matrix().unwrap() * Vec3::new(1.0, 0.0, 0.0)).normalize();
        assert_relative_eq!(n.x, 1.0, epsilon = 1e-5);
        assert_relative_eq!(n.y, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_deg_to_rad() {
        assert_relative_eq!(utils::deg_to_rad(180.0), constants::PI, epsilon = 1e-6);
        assert_relative_eq!(utils::rad_to_deg(constants::PI), 180.0, epsilon = 1e-4);
    }
}
