//! Material descriptors for the renderer handoff
//!
//! Phong-style surface descriptions parsed from material documents. The
//! renderer (an external collaborator) consumes these as-is; nothing here
//! touches a shading pipeline.

use crate::foundation::math::Vec3;

/// Parsed material data (Wavefront Phong model subset)
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialDescriptor {
    /// Material name
    pub name: String,
    /// Ambient color (Ka)
    pub ambient: Vec3,
    /// Diffuse color (Kd)
    pub diffuse: Vec3,
    /// Specular color (Ks)
    pub specular: Vec3,
    /// Specular exponent (Ns)
    pub shininess: f32,
    /// Diffuse texture map (map_Kd), path relative to the material document
    pub diffuse_map: Option<String>,
}

impl Default for MaterialDescriptor {
    fn default() -> Self {
        Self {
            name: String::from("default"),
            ambient: Vec3::new(0.2, 0.2, 0.2),
            diffuse: Vec3::new(0.8, 0.8, 0.8),
            specular: Vec3::zeros(),
            shininess: 32.0,
            diffuse_map: None,
        }
    }
}

impl MaterialDescriptor {
    /// Default descriptor carrying a specific name
    ///
    /// Used when a geometry document references a material its library
    /// never declares.
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_descriptor_values() {
        let mat = MaterialDescriptor::default();
        assert_eq!(mat.ambient, Vec3::new(0.2, 0.2, 0.2));
        assert_eq!(mat.diffuse, Vec3::new(0.8, 0.8, 0.8));
        assert_eq!(mat.specular, Vec3::zeros());
        assert_eq!(mat.shininess, 32.0);
        assert!(mat.diffuse_map.is_none());
    }

    #[test]
    fn test_named_keeps_defaults() {
        let mat = MaterialDescriptor::named("brass");
        assert_eq!(mat.name, "brass");
        assert_eq!(mat.diffuse, MaterialDescriptor::default().diffuse);
    }
}
