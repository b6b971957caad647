//! File-level geometry loading
//!
//! Opens a geometry document, runs the parse → triangulate → assemble
//! pipeline, and resolves its `mtllib` reference against the geometry
//! file's directory. Only the geometry file being unreadable is an error;
//! a missing material library degrades to default materials with a
//! warning, per the tolerant-parsing policy.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::render::Mesh;

use super::mesh_builder::MeshBuilder;
use super::mtl_parser::MtlParser;
use super::obj_parser::ObjParser;
use super::{AssetError, ParseStats, ParseWarning};

/// A mesh fresh off the pipeline, with its diagnostics
#[derive(Debug, Clone)]
pub struct LoadedMesh {
    /// The finalized mesh
    pub mesh: Mesh,
    /// Parser counts
    pub stats: ParseStats,
    /// Everything recovered along the way
    pub warnings: Vec<ParseWarning>,
}

/// Geometry file loader
pub struct ObjLoader;

impl ObjLoader {
    /// Load a geometry file and return the finalized mesh
    ///
    /// # Arguments
    /// * `path` - Path to the geometry document; a `mtllib` reference
    ///   inside it resolves relative to this file's directory
    ///
    /// # Returns
    /// The assembled mesh plus parse diagnostics, or an [`AssetError`] when
    /// the geometry file itself cannot be read.
    pub fn load_obj<P: AsRef<Path>>(path: P) -> Result<LoadedMesh, AssetError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(AssetError::NotFound(path.display().to_string()));
        }

        let source = fs::read_to_string(path)?;
        let doc = ObjParser::parse(&source);
        let stats = doc.stats;

        let mut materials = HashMap::new();
        let mut library_warnings = Vec::new();
        if let Some(library) = &doc.material_library {
            let library_path = sibling_path(path, library);
            match fs::read_to_string(&library_path) {
                Ok(contents) => {
                    let mtl_doc = MtlParser::parse(&contents);
                    materials = mtl_doc.materials;
                    library_warnings = mtl_doc.warnings;
                }
                Err(err) => {
                    library_warnings.push(ParseWarning::MissingMaterialLibrary {
                        path: library.clone(),
                        reason: err.to_string(),
                    });
                }
            }
        }

        let (mesh, mut warnings) = MeshBuilder::build(doc, &materials);
        warnings.extend(library_warnings);

        log::debug!(
            "{}: {} positions, {} texcoords, {} normals, {} faces in {} groups",
            path.display(),
            stats.positions,
            stats.texcoords,
            stats.normals,
            stats.faces,
            stats.groups,
        );
        log::debug!(
            "{}: assembled {} vertices, {} triangles",
            path.display(),
            mesh.vertex_count(),
            mesh.triangle_count(),
        );
        for warning in &warnings {
            log::warn!("{}: {}", path.display(), warning);
        }

        Ok(LoadedMesh {
            mesh,
            stats,
            warnings,
        })
    }
}

/// Resolve a document-relative reference against the referencing file's
/// directory
pub(crate) fn sibling_path(document: &Path, reference: &str) -> PathBuf {
    match document.parent() {
        Some(dir) => dir.join(reference),
        None => PathBuf::from(reference),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec3;
    use crate::render::MaterialDescriptor;

    #[test]
    fn test_load_resolves_material_library_beside_geometry() {
        let dir = tempfile::tempdir().unwrap();
        let obj_path = dir.path().join("target.obj");
        std::fs::write(
            &obj_path,
            "mtllib target.mtl\nv 0 0 0\nv 1 0 0\nv 0 1 0\nusemtl painted\nf 1 2 3\n",
        )
        .unwrap();
        std::fs::write(
            dir.path().join("target.mtl"),
            "newmtl painted\nKd 1.0 0.5 0.25\n",
        )
        .unwrap();

        let loaded = ObjLoader::load_obj(&obj_path).unwrap();
        assert!(loaded.warnings.is_empty());
        assert_eq!(
            loaded.mesh.groups[0].material.diffuse,
            Vec3::new(1.0, 0.5, 0.25)
        );
    }

    #[test]
    fn test_missing_library_degrades_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let obj_path = dir.path().join("orphan.obj");
        std::fs::write(
            &obj_path,
            "mtllib nowhere.mtl\nv 0 0 0\nv 1 0 0\nv 0 1 0\nusemtl lost\nf 1 2 3\n",
        )
        .unwrap();

        let loaded = ObjLoader::load_obj(&obj_path).unwrap();
        assert_eq!(loaded.mesh.groups[0].material.name, "lost");
        assert_eq!(
            loaded.mesh.groups[0].material.diffuse,
            MaterialDescriptor::default().diffuse
        );
        assert!(loaded.warnings.iter().any(|w| matches!(
            w,
            ParseWarning::MissingMaterialLibrary { path, .. } if path == "nowhere.mtl"
        )));
    }

    #[test]
    fn test_unreadable_geometry_is_an_error() {
        let result = ObjLoader::load_obj("/definitely/not/here.obj");
        assert!(matches!(result, Err(AssetError::NotFound(_))));
    }

    #[test]
    fn test_quad_file_yields_default_material_group() {
        let dir = tempfile::tempdir().unwrap();
        let obj_path = dir.path().join("quad.obj");
        std::fs::write(&obj_path, "v -1 -1 0\nv 1 -1 0\nv 1 1 0\nv -1 1 0\nf 1 2 3 4\n")
            .unwrap();

        let loaded = ObjLoader::load_obj(&obj_path).unwrap();
        assert_eq!(loaded.mesh.groups.len(), 1);
        assert_eq!(loaded.mesh.groups[0].triangle_count(), 2);
        assert_eq!(loaded.mesh.groups[0].vertices.len(), 4);
        assert_eq!(loaded.mesh.groups[0].material, MaterialDescriptor::default());
        assert_eq!(loaded.stats.faces, 1);
    }
}
