//! Fan triangulation and mesh assembly
//!
//! Turns a parsed [`ObjDocument`] into a finalized [`Mesh`]: every face is
//! fan-triangulated, every group's corners are deduplicated on their
//! (position, texcoord, normal) index triple into a compact vertex buffer,
//! and the mesh bounds are merged over the vertices actually emitted.
//!
//! Deduplication is keyed on index triples rather than expanded float
//! values: two corners share a vertex-buffer slot exactly when they
//! reference the same pool entries.

use std::collections::HashMap;

use crate::foundation::math::{Vec2, Vec3};
use crate::physics::collision::Aabb;
use crate::render::{
    FaceRecord, FaceVertex, MaterialDescriptor, Mesh, MeshGroup, Vertex, VertexPools,
};

use super::obj_parser::ObjDocument;
use super::ParseWarning;

/// Fan-triangulate a face record anchored at corner 0
///
/// A face of arity n yields n − 2 triangles; triangle i is
/// (corner 0, corner i, corner i+1), carrying each corner's texcoord/normal
/// indices positionally. Arity below 3 yields nothing (degenerate).
pub fn fan_triangulate(face: &FaceRecord) -> Vec<FaceRecord> {
    if face.arity() < 3 {
        return Vec::new();
    }

    let anchor = face.corners[0];
    (1..face.arity() - 1)
        .map(|i| FaceRecord::new(vec![anchor, face.corners[i], face.corners[i + 1]]))
        .collect()
}

/// Mesh assembler
pub struct MeshBuilder;

impl MeshBuilder {
    /// Assemble a parsed document into a finalized mesh
    ///
    /// Groups are triangulated and given their own deduplicated
    /// vertex/index buffers; material names resolve against `materials`,
    /// falling back to a default descriptor (with a warning) when a
    /// referenced material was never declared. The returned warnings are
    /// the document's parse warnings plus any added during assembly.
    pub fn build(
        doc: ObjDocument,
        materials: &HashMap<String, MaterialDescriptor>,
    ) -> (Mesh, Vec<ParseWarning>) {
        let ObjDocument {
            pools,
            groups,
            material_library: _,
            stats: _,
            warnings: mut all_warnings,
        } = doc;

        let mut bounds = Aabb::empty();
        let mut mesh_groups = Vec::with_capacity(groups.len());

        for group in groups {
            let material = resolve_material(group.material, materials, &mut all_warnings);

            let mut faces = Vec::new();
            for face in &group.faces {
                faces.extend(fan_triangulate(face));
            }

            let (vertices, indices) = assemble(&pools, &faces, &mut bounds, &mut all_warnings);

            mesh_groups.push(MeshGroup {
                name: group.name,
                material,
                faces,
                vertices,
                indices,
            });
        }

        (
            Mesh {
                pools,
                groups: mesh_groups,
                bounds,
            },
            all_warnings,
        )
    }
}

fn resolve_material(
    reference: Option<String>,
    materials: &HashMap<String, MaterialDescriptor>,
    warnings: &mut Vec<ParseWarning>,
) -> MaterialDescriptor {
    match reference {
        None => MaterialDescriptor::default(),
        Some(name) => match materials.get(&name) {
            Some(material) => material.clone(),
            None => {
                warnings.push(ParseWarning::UnresolvedMaterial { name: name.clone() });
                MaterialDescriptor::named(&name)
            }
        },
    }
}

/// Build one group's vertex/index buffers, merging emitted positions into
/// the running mesh bounds
fn assemble(
    pools: &VertexPools,
    faces: &[FaceRecord],
    bounds: &mut Aabb,
    warnings: &mut Vec<ParseWarning>,
) -> (Vec<Vertex>, Vec<u32>) {
    let mut dedup: HashMap<FaceVertex, u32> = HashMap::new();
    let mut vertices = Vec::new();
    let mut indices = Vec::with_capacity(faces.len() * 3);

    for face in faces {
        debug_assert!(face.is_triangle(), "assembler requires triangulated faces");

        for corner in &face.corners {
            let slot = match dedup.get(corner) {
                Some(&slot) => slot,
                None => {
                    let vertex = expand(pools, corner, warnings);
                    bounds.merge_point(vertex.position());
                    let slot = vertices.len() as u32;
                    vertices.push(vertex);
                    dedup.insert(*corner, slot);
                    slot
                }
            };
            indices.push(slot);
        }
    }

    (vertices, indices)
}

/// Expand an index triple to literal attribute values
///
/// Missing texcoord resolves to (0,0) and missing normal to the (0,1,0)
/// "up" default. An out-of-range index resolves to a zero vector with a
/// warning, and the mesh still loads.
fn expand(pools: &VertexPools, corner: &FaceVertex, warnings: &mut Vec<ParseWarning>) -> Vertex {
    let position = match pools.positions.get(corner.position) {
        Some(&position) => position,
        None => {
            warnings.push(ParseWarning::IndexOutOfRange {
                pool: "position",
                index: corner.position,
                len: pools.positions.len(),
            });
            Vec3::zeros()
        }
    };

    let tex_coord = match corner.texcoord {
        None => Vec2::zeros(),
        Some(index) => match pools.texcoords.get(index) {
            Some(&texcoord) => texcoord,
            None => {
                warnings.push(ParseWarning::IndexOutOfRange {
                    pool: "texcoord",
                    index,
                    len: pools.texcoords.len(),
                });
                Vec2::zeros()
            }
        },
    };

    let normal = match corner.normal {
        None => Vec3::y(),
        Some(index) => match pools.normals.get(index) {
            Some(&normal) => normal,
            None => {
                warnings.push(ParseWarning::IndexOutOfRange {
                    pool: "normal",
                    index,
                    len: pools.normals.len(),
                });
                Vec3::zeros()
            }
        },
    };

    Vertex::new(position, tex_coord, normal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::obj_parser::ObjParser;

    fn corner(position: usize) -> FaceVertex {
        FaceVertex::position_only(position)
    }

    #[test]
    fn test_fan_triangulation_counts() {
        for arity in 3..=8 {
            let face = FaceRecord::new((0..arity).map(corner).collect());
            let triangles = fan_triangulate(&face);

            assert_eq!(triangles.len(), arity - 2, "arity {arity}");
            for triangle in &triangles {
                assert!(triangle.is_triangle());
                assert!(triangle.corners.contains(&corner(0)), "anchor missing");
            }
        }
    }

    #[test]
    fn test_fan_triangulation_pattern() {
        let quad = FaceRecord::new(vec![
            FaceVertex::new(0, Some(10), None),
            FaceVertex::new(1, Some(11), None),
            FaceVertex::new(2, Some(12), None),
            FaceVertex::new(3, Some(13), None),
        ]);

        let triangles = fan_triangulate(&quad);
        assert_eq!(triangles.len(), 2);
        assert_eq!(
            triangles[0].corners,
            vec![quad.corners[0], quad.corners[1], quad.corners[2]]
        );
        assert_eq!(
            triangles[1].corners,
            vec![quad.corners[0], quad.corners[2], quad.corners[3]]
        );
        // Attribute indices ride along positionally
        assert_eq!(triangles[1].corners[2].texcoord, Some(13));
    }

    #[test]
    fn test_fan_triangulation_degenerate() {
        let line = FaceRecord::new(vec![corner(0), corner(1)]);
        assert!(fan_triangulate(&line).is_empty());
    }

    #[test]
    fn test_dedup_shared_edge() {
        // Two triangles sharing an edge: 6 corners, 4 unique triples
        let source = "v 0 0 0\nv 1 0 0\nv 0 1 0\nv 1 1 0\nf 1 2 3\nf 3 2 4\n";
        let (mesh, warnings) = MeshBuilder::build(ObjParser::parse(source), &HashMap::new());

        assert!(warnings.is_empty());
        assert_eq!(mesh.groups.len(), 1);
        assert_eq!(mesh.groups[0].vertices.len(), 4);
        assert_eq!(mesh.groups[0].indices.len(), 6);
    }

    #[test]
    fn test_distinct_triples_never_collapse() {
        // Same position indices but different normals must stay separate
        let source = "\
v 0 0 0\nv 1 0 0\nv 0 1 0\n\
vn 0 0 1\nvn 0 0 -1\n\
f 1//1 2//1 3//1\nf 1//2 2//2 3//2\n";
        let (mesh, _) = MeshBuilder::build(ObjParser::parse(source), &HashMap::new());

        assert_eq!(mesh.groups[0].vertices.len(), 6);
        assert_eq!(mesh.groups[0].indices.len(), 6);
    }

    #[test]
    fn test_winding_order_preserved() {
        let source = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n";
        let (mesh, _) = MeshBuilder::build(ObjParser::parse(source), &HashMap::new());

        assert_eq!(mesh.groups[0].indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_missing_attribute_defaults() {
        let source = "v 1 2 3\nv 4 5 6\nv 7 8 9\nf 1 2 3\n";
        let (mesh, _) = MeshBuilder::build(ObjParser::parse(source), &HashMap::new());

        let vertex = &mesh.groups[0].vertices[0];
        assert_eq!(vertex.tex_coord, [0.0, 0.0]);
        assert_eq!(vertex.normal, [0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_out_of_range_index_resolves_to_zero() {
        // Face references position 9 with only 3 populated
        let source = "v 1 1 1\nv 2 2 2\nv 3 3 3\nf 1 2 9\n";
        let (mesh, warnings) = MeshBuilder::build(ObjParser::parse(source), &HashMap::new());

        assert_eq!(mesh.groups[0].vertices.len(), 3);
        assert_eq!(mesh.groups[0].vertices[2].position, [0.0, 0.0, 0.0]);
        assert!(warnings.iter().any(|w| matches!(
            w,
            ParseWarning::IndexOutOfRange {
                pool: "position",
                index: 8,
                ..
            }
        )));
    }

    #[test]
    fn test_bounds_contain_every_emitted_vertex() {
        let source = "\
v -3 0 2\nv 5 1 -1\nv 0 7 0\nv 2 2 2\n\
f 1 2 3\nf 2 3 4\n";
        let (mesh, _) = MeshBuilder::build(ObjParser::parse(source), &HashMap::new());

        assert!(!mesh.bounds.is_empty());
        for group in &mesh.groups {
            for vertex in &group.vertices {
                assert!(mesh.bounds.contains_point(vertex.position()));
            }
        }
        assert_eq!(mesh.bounds.min, Vec3::new(-3.0, 0.0, -1.0));
        assert_eq!(mesh.bounds.max, Vec3::new(5.0, 7.0, 2.0));
    }

    #[test]
    fn test_bounds_cover_emitted_not_whole_pool() {
        // Position 4 (at y=100) is never referenced by a face and must not
        // stretch the bounds
        let source = "v 0 0 0\nv 1 0 0\nv 0 1 0\nv 0 100 0\nf 1 2 3\n";
        let (mesh, _) = MeshBuilder::build(ObjParser::parse(source), &HashMap::new());

        assert_eq!(mesh.bounds.max.y, 1.0);
    }

    #[test]
    fn test_material_resolution() {
        let source = "v 0 0 0\nv 1 0 0\nv 0 1 0\nusemtl declared\nf 1 2 3\n";
        let mut materials = HashMap::new();
        let mut steel = MaterialDescriptor::named("declared");
        steel.shininess = 96.0;
        materials.insert("declared".to_string(), steel);

        let (mesh, warnings) = MeshBuilder::build(ObjParser::parse(source), &materials);
        assert!(warnings.is_empty());
        assert_eq!(mesh.groups[0].material.shininess, 96.0);
    }

    #[test]
    fn test_undeclared_material_warns_and_defaults() {
        let source = "v 0 0 0\nv 1 0 0\nv 0 1 0\nusemtl ghost\nf 1 2 3\n";
        let (mesh, warnings) = MeshBuilder::build(ObjParser::parse(source), &HashMap::new());

        assert_eq!(mesh.groups[0].material.name, "ghost");
        assert_eq!(
            mesh.groups[0].material.diffuse,
            MaterialDescriptor::default().diffuse
        );
        assert!(warnings
            .iter()
            .any(|w| matches!(w, ParseWarning::UnresolvedMaterial { name } if name == "ghost")));
    }

    #[test]
    fn test_dedup_scope_is_per_group() {
        let source = "\
v 0 0 0\nv 1 0 0\nv 0 1 0\n\
g first\nf 1 2 3\n\
g second\nf 1 2 3\n";
        let (mesh, _) = MeshBuilder::build(ObjParser::parse(source), &HashMap::new());

        assert_eq!(mesh.groups.len(), 2);
        assert_eq!(mesh.groups[0].vertices.len(), 3);
        assert_eq!(mesh.groups[1].vertices.len(), 3);
    }

    #[test]
    fn test_quad_document_end_to_end() {
        let source = "\
v -1 -1 0\nv 1 -1 0\nv 1 1 0\nv -1 1 0\n\
f 1 2 3 4\n";
        let (mesh, warnings) = MeshBuilder::build(ObjParser::parse(source), &HashMap::new());

        assert!(warnings.is_empty());
        assert_eq!(mesh.groups.len(), 1);
        assert_eq!(mesh.groups[0].triangle_count(), 2);
        assert_eq!(mesh.groups[0].vertices.len(), 4);
        assert_eq!(mesh.groups[0].material, MaterialDescriptor::default());
        assert_eq!(mesh.groups[0].faces.len(), 2);
    }
}
