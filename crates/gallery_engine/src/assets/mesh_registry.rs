//! Mesh registry - arena storage with path-keyed caching
//!
//! Owns every loaded mesh and hands out stable [`MeshHandle`]s. Scene
//! objects hold handles rather than mesh data, so several objects can
//! share one mesh and a geometry file is parsed at most once per path.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::foundation::collections::{HandleMap, TypedHandle};
use crate::render::Mesh;

use super::obj_loader::{LoadedMesh, ObjLoader};
use super::AssetError;

/// Stable handle to a mesh owned by the registry
pub type MeshHandle = TypedHandle<Mesh>;

/// Arena of loaded meshes, keyed by handle and cached by source path
#[derive(Default)]
pub struct MeshRegistry {
    meshes: HandleMap<Mesh>,
    by_path: HashMap<PathBuf, MeshHandle>,
}

impl MeshRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a mesh built in memory and return its handle
    pub fn insert(&mut self, mesh: Mesh) -> MeshHandle {
        TypedHandle::new(self.meshes.insert(mesh))
    }

    /// Load a geometry file, reusing a previous load of the same path
    ///
    /// # Returns
    /// Handle to the cached or freshly loaded mesh, or the load error when
    /// the file cannot be read.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<MeshHandle, AssetError> {
        let path = path.as_ref();
        if let Some(handle) = self.by_path.get(path) {
            log::debug!("mesh cache hit: {}", path.display());
            return Ok(*handle);
        }

        let LoadedMesh { mesh, .. } = ObjLoader::load_obj(path)?;
        let handle = self.insert(mesh);
        self.by_path.insert(path.to_path_buf(), handle);
        Ok(handle)
    }

    /// Look up a mesh by handle
    pub fn get(&self, handle: MeshHandle) -> Option<&Mesh> {
        self.meshes.get(handle.key())
    }

    /// Number of meshes currently stored
    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    /// Whether the registry holds no meshes
    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }

    /// Drop every mesh and forget cached paths
    ///
    /// Outstanding handles become stale; [`MeshRegistry::get`] returns
    /// `None` for them afterwards.
    pub fn clear(&mut self) {
        self.meshes.clear();
        self.by_path.clear();
    }
}
