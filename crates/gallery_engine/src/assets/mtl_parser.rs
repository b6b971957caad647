//! Material document parser
//!
//! Parses Wavefront-style .mtl text into [`MaterialDescriptor`]s keyed by
//! name. Only the Phong subset the renderer handoff carries is read
//! (`newmtl`, `Ka`, `Kd`, `Ks`, `Ns`, `map_Kd`); other directives are
//! ignored. A declared material starts from the default descriptor, so
//! sparsely specified materials inherit the same defaults as undeclared
//! ones.

use std::collections::HashMap;

use crate::foundation::math::Vec3;
use crate::render::MaterialDescriptor;

use super::ParseWarning;

/// Best-effort parse result of one material document
#[derive(Debug, Clone, Default)]
pub struct MtlDocument {
    /// Declared materials by name
    pub materials: HashMap<String, MaterialDescriptor>,
    /// Recovered problems, in document order
    pub warnings: Vec<ParseWarning>,
}

/// Material document parser
pub struct MtlParser;

impl MtlParser {
    /// Parse material text into a name → descriptor map
    ///
    /// Never fails; malformed property lines are skipped with a warning and
    /// the property keeps its previous (or default) value.
    pub fn parse(contents: &str) -> MtlDocument {
        let mut doc = MtlDocument::default();
        let mut current: Option<MaterialDescriptor> = None;

        for (index, raw_line) in contents.lines().enumerate() {
            let line_num = index + 1;
            let line = raw_line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut tokens = line.split_whitespace();
            let directive = match tokens.next() {
                Some(directive) => directive,
                None => continue,
            };

            match directive {
                "newmtl" => {
                    let name: Vec<&str> = tokens.collect();
                    if name.is_empty() {
                        doc.warn_malformed(line_num, line);
                        continue;
                    }

                    // Save the material being built before starting the next
                    if let Some(material) = current.take() {
                        doc.materials.insert(material.name.clone(), material);
                    }
                    current = Some(MaterialDescriptor::named(&name.join(" ")));
                }
                "Ka" => match (parse_color(&mut tokens), current.as_mut()) {
                    (Some(color), Some(material)) => material.ambient = color,
                    (None, _) => doc.warn_malformed(line_num, line),
                    _ => {}
                },
                "Kd" => match (parse_color(&mut tokens), current.as_mut()) {
                    (Some(color), Some(material)) => material.diffuse = color,
                    (None, _) => doc.warn_malformed(line_num, line),
                    _ => {}
                },
                "Ks" => match (parse_color(&mut tokens), current.as_mut()) {
                    (Some(color), Some(material)) => material.specular = color,
                    (None, _) => doc.warn_malformed(line_num, line),
                    _ => {}
                },
                "Ns" => match (parse_scalar(&mut tokens), current.as_mut()) {
                    (Some(value), Some(material)) => material.shininess = value,
                    (None, _) => doc.warn_malformed(line_num, line),
                    _ => {}
                },
                "map_Kd" => {
                    // Texture paths may contain spaces; take the rest of
                    // the line
                    let path: Vec<&str> = tokens.collect();
                    match (path.is_empty(), current.as_mut()) {
                        (false, Some(material)) => {
                            material.diffuse_map = Some(path.join(" "));
                        }
                        (true, _) => doc.warn_malformed(line_num, line),
                        _ => {}
                    }
                }
                // Directives outside the handoff subset (d, illum, Ke,
                // bump, ...) are ignored
                _ => {}
            }
        }

        if let Some(material) = current {
            doc.materials.insert(material.name.clone(), material);
        }

        doc
    }
}

impl MtlDocument {
    fn warn_malformed(&mut self, line: usize, text: &str) {
        self.warnings.push(ParseWarning::MalformedLine {
            line,
            text: text.to_string(),
        });
    }
}

fn parse_color<'a, I>(tokens: &mut I) -> Option<Vec3>
where
    I: Iterator<Item = &'a str>,
{
    let r = parse_scalar(tokens)?;
    let g = parse_scalar(tokens)?;
    let b = parse_scalar(tokens)?;
    Some(Vec3::new(r, g, b))
}

fn parse_scalar<'a, I>(tokens: &mut I) -> Option<f32>
where
    I: Iterator<Item = &'a str>,
{
    tokens.next()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_material() {
        let mtl_content = r#"
# Simple material
newmtl TestMaterial
Ka 1.0 1.0 1.0
Kd 0.8 0.2 0.2
Ks 0.5 0.5 0.5
Ns 250.0
"#;

        let doc = MtlParser::parse(mtl_content);
        assert_eq!(doc.materials.len(), 1);
        assert!(doc.warnings.is_empty());

        let mat = doc.materials.get("TestMaterial").unwrap();
        assert_eq!(mat.name, "TestMaterial");
        assert_eq!(mat.ambient, Vec3::new(1.0, 1.0, 1.0));
        assert_eq!(mat.diffuse, Vec3::new(0.8, 0.2, 0.2));
        assert_eq!(mat.specular, Vec3::new(0.5, 0.5, 0.5));
        assert_eq!(mat.shininess, 250.0);
    }

    #[test]
    fn test_parse_diffuse_map_with_spaces() {
        let mtl_content = r#"
newmtl TexturedMaterial
Kd 1.0 1.0 1.0
map_Kd textures/old crate.png
"#;

        let doc = MtlParser::parse(mtl_content);
        let mat = doc.materials.get("TexturedMaterial").unwrap();
        assert_eq!(mat.diffuse_map.as_deref(), Some("textures/old crate.png"));
    }

    #[test]
    fn test_parse_multiple_materials() {
        let mtl_content = r#"
newmtl Material1
Kd 1.0 0.0 0.0

newmtl Material2
Kd 0.0 1.0 0.0
"#;

        let doc = MtlParser::parse(mtl_content);
        assert_eq!(doc.materials.len(), 2);
        assert_eq!(
            doc.materials.get("Material1").unwrap().diffuse,
            Vec3::new(1.0, 0.0, 0.0)
        );
        assert_eq!(
            doc.materials.get("Material2").unwrap().diffuse,
            Vec3::new(0.0, 1.0, 0.0)
        );
    }

    #[test]
    fn test_sparse_material_keeps_defaults() {
        let doc = MtlParser::parse("newmtl Bare\nKd 0.1 0.2 0.3\n");
        let mat = doc.materials.get("Bare").unwrap();

        assert_eq!(mat.diffuse, Vec3::new(0.1, 0.2, 0.3));
        assert_eq!(mat.ambient, MaterialDescriptor::default().ambient);
        assert_eq!(mat.shininess, MaterialDescriptor::default().shininess);
        assert!(mat.diffuse_map.is_none());
    }

    #[test]
    fn test_malformed_property_warns_and_continues() {
        let mtl_content = r#"
newmtl Damaged
Ka 1.0 oops 1.0
Kd 0.9 0.9 0.9
"#;

        let doc = MtlParser::parse(mtl_content);
        assert_eq!(doc.warnings.len(), 1);

        let mat = doc.materials.get("Damaged").unwrap();
        assert_eq!(mat.ambient, MaterialDescriptor::default().ambient);
        assert_eq!(mat.diffuse, Vec3::new(0.9, 0.9, 0.9));
    }

    #[test]
    fn test_property_before_newmtl_ignored() {
        let doc = MtlParser::parse("Kd 1.0 0.0 0.0\nnewmtl Late\n");
        assert!(doc.warnings.is_empty());
        assert_eq!(
            doc.materials.get("Late").unwrap().diffuse,
            MaterialDescriptor::default().diffuse
        );
    }

    #[test]
    fn test_unsupported_directives_ignored() {
        let mtl_content = r#"
newmtl Fancy
d 0.5
illum 2
Ke 1.0 1.0 1.0
"#;

        let doc = MtlParser::parse(mtl_content);
        assert!(doc.warnings.is_empty());
        assert!(doc.materials.contains_key("Fancy"));
    }
}
