//! Scene module - placed objects and the assets they reference
//!
//! The scene owns three things: the placed objects in insertion order, the
//! mesh registry they reference, and the texture cache for their diffuse
//! maps. Insertion order is load order and is the order collision queries
//! walk, so object resolution is deterministic run to run.
//!
//! Removal is deferred: gameplay marks objects doomed during an update
//! pass and [`Scene::remove_doomed`] applies the removals afterwards, so
//! the object list is never mutated while it is being walked.

use thiserror::Error;

pub mod loader;
pub mod object;
pub mod placement;

pub use loader::{SceneLoadReport, SceneLoader};
pub use object::SceneObject;
pub use placement::{PlacementDocument, PlacementParser, PlacementRecord};

use crate::assets::{MeshRegistry, TextureCache};

/// Scene loading errors
#[derive(Debug, Error)]
pub enum SceneError {
    /// The placement document itself could not be read
    #[error("failed to read placement document {path}: {source}")]
    PlacementUnreadable {
        /// Document path as given by the caller
        path: String,
        /// Underlying I/O failure
        source: std::io::Error,
    },
}

/// All loaded state for one shooting-gallery scene
#[derive(Default)]
pub struct Scene {
    objects: Vec<SceneObject>,
    registry: MeshRegistry,
    textures: TextureCache,
}

impl Scene {
    /// Create an empty scene
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an object; insertion order is collision-test order
    pub fn add_object(&mut self, object: SceneObject) {
        self.objects.push(object);
    }

    /// Placed objects in insertion order
    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    /// Mutable access to the placed objects
    pub fn objects_mut(&mut self) -> &mut [SceneObject] {
        &mut self.objects
    }

    /// Find an object by placement name
    pub fn object_by_name(&self, name: &str) -> Option<&SceneObject> {
        self.objects.iter().find(|object| object.name == name)
    }

    /// The mesh registry backing this scene's objects
    pub fn registry(&self) -> &MeshRegistry {
        &self.registry
    }

    /// Mutable access to the mesh registry
    pub fn registry_mut(&mut self) -> &mut MeshRegistry {
        &mut self.registry
    }

    /// The texture cache backing this scene's objects
    pub fn textures(&self) -> &TextureCache {
        &self.textures
    }

    /// Mutable access to the texture cache
    pub fn textures_mut(&mut self) -> &mut TextureCache {
        &mut self.textures
    }

    /// Split borrow for collision passes that mark objects while reading
    /// meshes
    pub fn objects_and_meshes(&mut self) -> (&mut [SceneObject], &MeshRegistry) {
        (&mut self.objects, &self.registry)
    }

    /// Number of placed objects
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the scene has no objects
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Apply deferred removals, dropping every doomed object
    pub fn remove_doomed(&mut self) {
        self.objects.retain(|object| {
            if object.doomed {
                log::debug!("removing eliminated object '{}'", object.name);
            }
            !object.doomed
        });
    }

    /// Drop all objects and cached assets
    pub fn clear(&mut self) {
        self.objects.clear();
        self.registry.clear();
        self.textures.clear();
    }
}
