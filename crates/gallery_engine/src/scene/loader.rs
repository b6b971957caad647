//! Scene loading from placement documents
//!
//! Ties the placement parser to the asset caches: every record's geometry
//! goes through the scene's mesh registry (so repeated paths load once)
//! and its texture through the texture cache. Failures stay per-object;
//! one unreadable model never takes the rest of the scene down with it.

use std::fs;
use std::path::Path;

use crate::assets::obj_loader::sibling_path;
use crate::assets::{AssetError, ParseWarning};

use super::object::SceneObject;
use super::placement::PlacementParser;
use super::{Scene, SceneError};

/// Outcome summary of one scene load
#[derive(Debug, Default)]
pub struct SceneLoadReport {
    /// Objects successfully placed
    pub loaded: usize,
    /// Objects dropped because their geometry failed to load
    pub skipped: Vec<(String, AssetError)>,
    /// Placement and texture warnings
    pub warnings: Vec<ParseWarning>,
}

/// Loads a scene from a placement document
pub struct SceneLoader;

impl SceneLoader {
    /// Load a placement document and every asset it references
    ///
    /// Geometry and texture paths resolve relative to the document. An
    /// object whose geometry cannot be read is skipped and reported; a
    /// missing texture downgrades its object to untextured. Only the
    /// placement document itself failing to read is fatal.
    pub fn load_scene<P: AsRef<Path>>(path: P) -> Result<(Scene, SceneLoadReport), SceneError> {
        let path = path.as_ref();
        let source =
            fs::read_to_string(path).map_err(|source| SceneError::PlacementUnreadable {
                path: path.display().to_string(),
                source,
            })?;

        let document = PlacementParser::parse(&source);
        let mut scene = Scene::new();
        let mut report = SceneLoadReport {
            warnings: document.warnings,
            ..SceneLoadReport::default()
        };

        for record in document.records {
            let geometry_path = sibling_path(path, &record.geometry);
            let handle = match scene.registry_mut().load(&geometry_path) {
                Ok(handle) => handle,
                Err(err) => {
                    log::error!("skipping object '{}': {}", record.name, err);
                    report.skipped.push((record.name, err));
                    continue;
                }
            };

            let mut object = SceneObject::new(record.name.clone(), handle)
                .with_transform(record.transform())
                .with_eliminable(record.eliminable);

            if let Some(texture) = &record.texture {
                let texture_path = sibling_path(path, texture);
                match scene.textures_mut().load(&texture_path) {
                    Ok(_) => object.texture = Some(texture_path),
                    Err(err) => {
                        log::warn!("object '{}' texture unavailable: {}", record.name, err);
                        report.warnings.push(ParseWarning::MissingTexture {
                            path: texture.clone(),
                            reason: err.to_string(),
                        });
                    }
                }
            }

            scene.add_object(object);
            report.loaded += 1;
        }

        log::info!(
            "scene {}: {} objects loaded, {} skipped",
            path.display(),
            report.loaded,
            report.skipped.len(),
        );

        Ok((scene, report))
    }
}
