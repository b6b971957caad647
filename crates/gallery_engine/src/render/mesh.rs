//! Mesh representation for loaded 3D models
//!
//! The data model that geometry documents are assembled into: raw vertex
//! pools, face records grouped by material, and per-group GPU-ready
//! vertex/index buffers. A finalized [`Mesh`] is read-only and may be
//! shared by handle across any number of scene objects.

use crate::foundation::math::{Vec2, Vec3};
use crate::physics::collision::Aabb;
use crate::render::material::MaterialDescriptor;

/// 3D vertex data structure for the renderer handoff
///
/// Interleaved position(3)/texcoord(2)/normal(3) floats, 32 bytes total.
/// `#[repr(C)]` guarantees that layout so the buffers returned by
/// [`MeshGroup::vertex_floats`] can be uploaded as-is.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    /// Position in 3D space
    pub position: [f32; 3],

    /// Texture coordinates
    pub tex_coord: [f32; 2],

    /// Normal vector
    pub normal: [f32; 3],
}

// Safe to implement Pod and Zeroable: the struct is repr(C) and contains
// only f32 arrays with no padding
unsafe impl bytemuck::Pod for Vertex {}
unsafe impl bytemuck::Zeroable for Vertex {}

impl Vertex {
    /// Creates a vertex from expanded attribute values
    pub fn new(position: Vec3, tex_coord: Vec2, normal: Vec3) -> Self {
        Self {
            position: position.into(),
            tex_coord: tex_coord.into(),
            normal: normal.into(),
        }
    }

    /// Position as a vector
    pub fn position(&self) -> Vec3 {
        Vec3::from(self.position)
    }
}

/// Raw attribute pools populated in document order
///
/// Indices into these are 0-based; the 1-based indices of the source format
/// are normalized during parsing.
#[derive(Debug, Clone, Default)]
pub struct VertexPools {
    /// Position pool (`v` directives)
    pub positions: Vec<Vec3>,
    /// Texture coordinate pool (`vt` directives)
    pub texcoords: Vec<Vec2>,
    /// Normal pool (`vn` directives)
    pub normals: Vec<Vec3>,
}

/// One corner of a face: indices into the vertex pools
///
/// Texcoord and normal slots are genuinely optional in the source format;
/// they are modeled as options rather than sentinel indices so downstream
/// handling stays exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FaceVertex {
    /// Index into the position pool
    pub position: usize,
    /// Index into the texcoord pool, when the corner specified one
    pub texcoord: Option<usize>,
    /// Index into the normal pool, when the corner specified one
    pub normal: Option<usize>,
}

impl FaceVertex {
    /// Creates a corner with all three attribute indices
    pub fn new(position: usize, texcoord: Option<usize>, normal: Option<usize>) -> Self {
        Self {
            position,
            texcoord,
            normal,
        }
    }

    /// Creates a corner with only a position index
    pub fn position_only(position: usize) -> Self {
        Self {
            position,
            texcoord: None,
            normal: None,
        }
    }
}

/// An ordered list of face corners, arity ≥ 3
///
/// Faces of arity > 3 must be fan-triangulated before assembly; a face with
/// fewer than 3 corners is degenerate and dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaceRecord {
    /// The corners in declaration order
    pub corners: Vec<FaceVertex>,
}

impl FaceRecord {
    /// Creates a face from its corners
    pub fn new(corners: Vec<FaceVertex>) -> Self {
        Self { corners }
    }

    /// Number of corners
    pub fn arity(&self) -> usize {
        self.corners.len()
    }

    /// Whether this face needs no triangulation
    pub fn is_triangle(&self) -> bool {
        self.corners.len() == 3
    }
}

/// A material group within a mesh
///
/// Owns its triangulated faces and, once assembled, its own deduplicated
/// vertex buffer and triangle index buffer.
#[derive(Debug, Clone)]
pub struct MeshGroup {
    /// Group name (`g`/`o` directive, or the implicit default)
    pub name: String,
    /// Resolved material; a default descriptor when the referenced material
    /// was never declared
    pub material: MaterialDescriptor,
    /// Triangulated face records in declaration order
    pub faces: Vec<FaceRecord>,
    /// Deduplicated vertex buffer
    pub vertices: Vec<Vertex>,
    /// Triangle index buffer, three entries per face, winding preserved
    pub indices: Vec<u32>,
}

impl MeshGroup {
    /// The vertex buffer as a flat float slice
    /// (interleaved position/texcoord/normal) for GPU upload
    pub fn vertex_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// The vertex buffer as raw bytes for GPU upload
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// The index buffer
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Number of triangles in this group
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// A finalized mesh: pools, material groups, and derived bounds
///
/// Created by the asset pipeline (parse → triangulate → assemble) once at
/// load time; immutable afterwards except for explicit reload.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    /// The raw attribute pools the groups index into
    pub pools: VertexPools,
    /// Material groups in declaration order
    pub groups: Vec<MeshGroup>,
    /// Axis-aligned bounds over every assembled vertex position
    pub bounds: Aabb,
}

impl Mesh {
    /// Total assembled vertex count across groups
    pub fn vertex_count(&self) -> usize {
        self.groups.iter().map(|g| g.vertices.len()).sum()
    }

    /// Total triangle count across groups
    pub fn triangle_count(&self) -> usize {
        self.groups.iter().map(MeshGroup::triangle_count).sum()
    }

    /// Whether any group carries triangle data
    pub fn has_triangles(&self) -> bool {
        self.groups.iter().any(|g| !g.indices.is_empty())
    }

    /// Iterate the positions of every assembled triangle
    ///
    /// Yields `[v0, v1, v2]` per triangle across all groups, in group and
    /// declaration order. This is the geometry the spatial queries run
    /// against.
    pub fn triangle_positions(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        self.groups.iter().flat_map(|group| {
            group.indices.chunks_exact(3).map(move |tri| {
                [
                    group.vertices[tri[0] as usize].position(),
                    group.vertices[tri[1] as usize].position(),
                    group.vertices[tri[2] as usize].position(),
                ]
            })
        })
    }
}
