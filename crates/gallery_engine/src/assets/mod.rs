//! Asset loading pipeline
//!
//! Geometry and material document parsing, mesh assembly, and the caches
//! that back a scene load:
//!
//! - [`obj_parser`] - streaming geometry-document parser
//! - [`mtl_parser`] - material-document parser
//! - [`mesh_builder`] - fan triangulation and vertex-deduplicating assembly
//! - [`obj_loader`] - file-level orchestration of the above
//! - [`mesh_registry`] - handle-addressed arena of finalized meshes
//! - [`texture_cache`] - decoded image cache for the renderer handoff

pub mod mesh_builder;
pub mod mesh_registry;
pub mod mtl_parser;
pub mod obj_loader;
pub mod obj_parser;
pub mod texture_cache;

pub use mesh_builder::MeshBuilder;
pub use mesh_registry::{MeshHandle, MeshRegistry};
pub use mtl_parser::MtlParser;
pub use obj_loader::{LoadedMesh, ObjLoader};
pub use obj_parser::{ObjDocument, ObjGroup, ObjParser};
pub use texture_cache::{ImageData, TextureCache};

use thiserror::Error;

/// Asset loading errors
///
/// Fatal to the one asset being loaded, never to the whole scene; the scene
/// loader logs these and continues with the next object.
#[derive(Error, Debug)]
pub enum AssetError {
    /// Asset file does not exist
    #[error("Asset not found: {0}")]
    NotFound(String),

    /// Invalid asset data
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// IO error during asset loading
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// A recovered parsing problem
///
/// Warnings never abort a load: the offending input falls back to a default
/// and parsing continues. They are accumulated alongside the result and
/// logged at `warn` level by the loader.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseWarning {
    /// A directive line that could not be parsed; the line was skipped
    #[error("line {line}: skipped malformed line `{text}`")]
    MalformedLine {
        /// 1-based line number in the source document
        line: usize,
        /// The offending line text
        text: String,
    },

    /// A face corner referencing a pool slot that was never populated;
    /// the corner's attribute resolved to a zero vector
    #[error("face index {index} out of range for {pool} pool of {len} entries")]
    IndexOutOfRange {
        /// Which pool was indexed ("position", "texcoord", or "normal")
        pool: &'static str,
        /// The 0-based index the face asked for
        index: usize,
        /// The pool's populated length
        len: usize,
    },

    /// A `usemtl` naming a material no loaded library declares; the group
    /// resolved to a default descriptor
    #[error("material `{name}` is not declared by any loaded library")]
    UnresolvedMaterial {
        /// The referenced material name
        name: String,
    },

    /// A referenced material library that could not be read; all its
    /// materials resolved to defaults
    #[error("material library `{path}` could not be read: {reason}")]
    MissingMaterialLibrary {
        /// The library path as referenced by the geometry document
        path: String,
        /// The underlying failure
        reason: String,
    },

    /// A referenced texture image that could not be read or decoded;
    /// the texture was skipped
    #[error("texture `{path}` could not be loaded: {reason}")]
    MissingTexture {
        /// The texture path as referenced
        path: String,
        /// The underlying failure
        reason: String,
    },
}

/// Counts accumulated by the geometry parser for diagnostics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseStats {
    /// Positions appended to the pool
    pub positions: usize,
    /// Texture coordinates appended to the pool
    pub texcoords: usize,
    /// Normals appended to the pool
    pub normals: usize,
    /// Face records accepted (pre-triangulation)
    pub faces: usize,
    /// Groups opened, including the implicit default group
    pub groups: usize,
    /// Faces dropped for having fewer than 3 corners
    pub degenerate_faces: usize,
}
