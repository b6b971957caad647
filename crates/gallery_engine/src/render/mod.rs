//! Render module - Renderer-facing data structures
//!
//! The handoff surface for an external renderer: assembled meshes with
//! per-group interleaved vertex/index buffers and material descriptors.
//! No GPU backend lives here; uploading the buffers is the collaborator's
//! job.

pub mod material;
pub mod mesh;

pub use material::MaterialDescriptor;
pub use mesh::{FaceRecord, FaceVertex, Mesh, MeshGroup, Vertex, VertexPools};
