//! Scene placement document parsing
//!
//! One object per line:
//!
//! ```text
//! name geometry-path px py pz rx ry rz sx sy sz eliminable [texture-path]
//! ```
//!
//! Rotation is in degrees per axis. The eliminable flag takes `0`/`1` or
//! `false`/`true`. Lines starting with `#` and blank lines are skipped;
//! malformed lines produce a warning and are dropped, same as the
//! geometry parsers.

use crate::assets::ParseWarning;
use crate::foundation::math::{Transform, Vec3};

/// One parsed placement line, paths still unresolved
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementRecord {
    /// Object name
    pub name: String,
    /// Geometry path as written in the document
    pub geometry: String,
    /// World position
    pub position: Vec3,
    /// Euler rotation in degrees per axis
    pub rotation_degrees: Vec3,
    /// Per-axis scale
    pub scale: Vec3,
    /// Whether a projectile hit removes the object
    pub eliminable: bool,
    /// Texture path as written in the document, if any
    pub texture: Option<String>,
}

impl PlacementRecord {
    /// Compose this record's placement into a transform
    pub fn transform(&self) -> Transform {
        Transform::from_placement(self.position, self.rotation_degrees, self.scale)
    }
}

/// Result of parsing a placement document
#[derive(Debug, Clone, Default)]
pub struct PlacementDocument {
    /// Well-formed records in document order
    pub records: Vec<PlacementRecord>,
    /// Malformed lines that were dropped
    pub warnings: Vec<ParseWarning>,
}

/// Placement document parser
pub struct PlacementParser;

impl PlacementParser {
    /// Parse placement text; never fails, malformed lines become warnings
    pub fn parse(source: &str) -> PlacementDocument {
        let mut document = PlacementDocument::default();

        for (number, line) in source.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let parts: Vec<&str> = line.split_whitespace().collect();
            match parse_record(&parts) {
                Some(record) => document.records.push(record),
                None => document.warnings.push(ParseWarning::MalformedLine {
                    line: number + 1,
                    text: line.to_string(),
                }),
            }
        }

        document
    }
}

fn parse_record(parts: &[&str]) -> Option<PlacementRecord> {
    if !(12..=13).contains(&parts.len()) {
        return None;
    }
    Some(PlacementRecord {
        name: parts[0].to_string(),
        geometry: parts[1].to_string(),
        position: parse_vec3(&parts[2..5])?,
        rotation_degrees: parse_vec3(&parts[5..8])?,
        scale: parse_vec3(&parts[8..11])?,
        eliminable: parse_flag(parts[11])?,
        texture: parts.get(12).map(|s| s.to_string()),
    })
}

fn parse_vec3(parts: &[&str]) -> Option<Vec3> {
    let x = parts[0].parse().ok()?;
    let y = parts[1].parse().ok()?;
    let z = parts[2].parse().ok()?;
    Some(Vec3::new(x, y, z))
}

fn parse_flag(token: &str) -> Option<bool> {
    match token {
        "1" | "true" => Some(true),
        "0" | "false" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Point3;
    use approx::assert_relative_eq;

    #[test]
    fn test_full_line_parses() {
        let doc = PlacementParser::parse(
            "bottle models/bottle.obj 1 2 3 0 90 0 2 2 2 1 textures/glass.png\n",
        );
        assert_eq!(doc.records.len(), 1);
        let record = &doc.records[0];
        assert_eq!(record.name, "bottle");
        assert_eq!(record.geometry, "models/bottle.obj");
        assert_eq!(record.position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(record.rotation_degrees, Vec3::new(0.0, 90.0, 0.0));
        assert_eq!(record.scale, Vec3::new(2.0, 2.0, 2.0));
        assert!(record.eliminable);
        assert_eq!(record.texture.as_deref(), Some("textures/glass.png"));
    }

    #[test]
    fn test_texture_is_optional() {
        let doc = PlacementParser::parse("wall models/wall.obj 0 0 -10 0 0 0 1 1 1 0\n");
        assert_eq!(doc.records.len(), 1);
        assert!(doc.records[0].texture.is_none());
        assert!(!doc.records[0].eliminable);
    }

    #[test]
    fn test_comments_and_blanks_are_skipped() {
        let source = "# the back wall\n\nwall models/wall.obj 0 0 -10 0 0 0 1 1 1 0\n\n";
        let doc = PlacementParser::parse(source);
        assert_eq!(doc.records.len(), 1);
        assert!(doc.warnings.is_empty());
    }

    #[test]
    fn test_flag_accepts_both_spellings() {
        let source = "a m.obj 0 0 0 0 0 0 1 1 1 true\nb m.obj 0 0 0 0 0 0 1 1 1 false\n";
        let doc = PlacementParser::parse(source);
        assert!(doc.records[0].eliminable);
        assert!(!doc.records[1].eliminable);
    }

    #[test]
    fn test_short_line_warns_and_is_dropped() {
        let doc = PlacementParser::parse("stub models/stub.obj 0 0 0\n");
        assert!(doc.records.is_empty());
        assert!(matches!(
            doc.warnings[0],
            ParseWarning::MalformedLine { line: 1, .. }
        ));
    }

    #[test]
    fn test_bad_number_warns_and_is_dropped() {
        let doc = PlacementParser::parse("bad m.obj 0 0 oops 0 0 0 1 1 1 0\n");
        assert!(doc.records.is_empty());
        assert_eq!(doc.warnings.len(), 1);
    }

    #[test]
    fn test_bad_flag_warns_and_is_dropped() {
        let doc = PlacementParser::parse("bad m.obj 0 0 0 0 0 0 1 1 1 yes\n");
        assert!(doc.records.is_empty());
        assert_eq!(doc.warnings.len(), 1);
    }

    #[test]
    fn test_record_transform_applies_scale_before_translation() {
        let doc = PlacementParser::parse("t m.obj 5 0 0 0 0 0 2 2 2 0\n");
        let transform = doc.records[0].transform();
        let moved = transform.transform_point(Point3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(moved.x, 7.0, epsilon = 1e-5);
    }
}
