//! Scene object placement and flags

use std::path::PathBuf;

use crate::assets::MeshHandle;
use crate::foundation::math::Transform;

/// A placed instance of a mesh in the scene
///
/// Objects hold a [`MeshHandle`] rather than mesh data, so any number of
/// objects can share one loaded mesh. The transform composes scale first,
/// then rotation, then translation.
#[derive(Debug, Clone)]
pub struct SceneObject {
    /// Placement name, unique per scene by convention
    pub name: String,

    /// Handle into the scene's mesh registry
    pub mesh: MeshHandle,

    /// World placement
    pub transform: Transform,

    /// Whether a projectile hit removes this object
    pub eliminable: bool,

    /// Render flag; invisible objects are also skipped by collision
    pub visible: bool,

    /// Optional diffuse texture for the renderer
    pub texture: Option<PathBuf>,

    /// Marked for removal at the end of the current update pass
    pub doomed: bool,
}

impl SceneObject {
    /// Create a visible, indestructible object at the identity placement
    pub fn new(name: impl Into<String>, mesh: MeshHandle) -> Self {
        Self {
            name: name.into(),
            mesh,
            transform: Transform::identity(),
            eliminable: false,
            visible: true,
            texture: None,
            doomed: false,
        }
    }

    /// Set the world placement
    #[must_use]
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Set whether a projectile hit removes this object
    #[must_use]
    pub fn with_eliminable(mut self, eliminable: bool) -> Self {
        self.eliminable = eliminable;
        self
    }

    /// Set the diffuse texture path
    #[must_use]
    pub fn with_texture(mut self, texture: Option<PathBuf>) -> Self {
        self.texture = texture;
        self
    }
}
