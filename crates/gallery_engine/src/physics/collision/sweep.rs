//! Swept-segment queries against transformed meshes
//!
//! A projectile step is a segment from its current to its next position.
//! Testing the whole segment instead of the endpoint keeps fast movers
//! from tunneling through thin geometry in a single step.
//!
//! All intersection math runs in the object's local space: the segment is
//! pulled through the inverse transform, tested against the mesh, and the
//! resulting point and normal are pushed back to world space (the normal
//! via the inverse-transpose).

use crate::foundation::math::{Mat4, Point3, Transform, Vec3};
use crate::render::Mesh;

use super::primitives::{Ray, Triangle};

/// Nearest intersection found along a swept segment
#[derive(Debug, Clone, Copy)]
pub struct SweepHit {
    /// Intersection point in world space
    pub point: Vec3,
    /// World-space distance from the segment start
    pub distance: f32,
    /// Unit surface normal in world space, facing the incoming segment
    pub normal: Vec3,
}

/// Test the segment `start -> end` against a transformed mesh
///
/// The mesh bounds serve as a cheap first rejection; surviving segments
/// are tested per triangle and the nearest hit within the segment wins.
/// Meshes with no triangle data resolve against the struck bounds face
/// instead.
///
/// # Returns
/// The nearest hit, or `None` when the segment misses, stops short, or
/// the object's transform cannot be inverted.
pub fn sweep_segment_mesh(
    start: Vec3,
    end: Vec3,
    mesh: &Mesh,
    transform: &Transform,
) -> Option<SweepHit> {
    let inverse = transform.inverse_matrix()?;
    let local_start = transform_point(&inverse, start);
    let local_end = transform_point(&inverse, end);
    let local_delta = local_end - local_start;
    let local_length = local_delta.norm();
    if local_length == 0.0 {
        return None;
    }

    let ray = Ray::new(local_start, local_delta);
    let box_hit = mesh.bounds.intersect_ray(ray.origin, ray.direction)?;
    if box_hit.distance > local_length {
        return None;
    }

    let (local_point, local_normal) = if mesh.has_triangles() {
        let mut nearest: Option<(f32, Vec3)> = None;
        for [v0, v1, v2] in mesh.triangle_positions() {
            let triangle = Triangle::new(v0, v1, v2);
            if let Some((t, _, _)) = triangle.intersect_ray(&ray) {
                if t <= local_length && nearest.map_or(true, |(best, _)| t < best) {
                    nearest = Some((t, triangle.normal()));
                }
            }
        }
        let (t, normal) = nearest?;
        (ray.point_at(t), normal)
    } else {
        (ray.point_at(box_hit.distance), box_hit.face.normal())
    };

    let normal_matrix = transform.normal_matrix()?;
    let mut world_normal = (normal_matrix * local_normal).normalize();
    if world_normal.dot(&(end - start)) > 0.0 {
        world_normal = -world_normal;
    }

    let world_point = transform_point(&transform.to_matrix(), local_point);

    Some(SweepHit {
        point: world_point,
        distance: (world_point - start).norm(),
        normal: world_normal,
    })
}

fn transform_point(matrix: &Mat4, point: Vec3) -> Vec3 {
    matrix.transform_point(&Point3::from(point)).coords
}
