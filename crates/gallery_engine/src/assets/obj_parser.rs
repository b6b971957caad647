//! Geometry document parser
//!
//! Streaming line-oriented parser for Wavefront-style geometry text.
//! Produces raw attribute pools and material-tagged face groups; nothing is
//! triangulated or assembled here, that is [`super::mesh_builder`]'s job.
//!
//! Parsing is deliberately tolerant: malformed directive lines are skipped
//! with a [`ParseWarning`], unknown directives are ignored outright, and the
//! parser itself never fails. Only the surrounding file I/O (in
//! [`super::obj_loader`]) can error.

use crate::foundation::math::{Vec2, Vec3};
use crate::render::{FaceRecord, FaceVertex, VertexPools};

use super::{ParseStats, ParseWarning};

/// Name given to the group opened implicitly when faces appear before any
/// `g`/`o` directive, and to unnamed `g` lines
pub const DEFAULT_GROUP: &str = "default";

/// A parsed face group: the material active at declaration time plus the
/// faces declared under it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjGroup {
    /// Group name from `g`/`o`, or [`DEFAULT_GROUP`]
    pub name: String,
    /// Active `usemtl` name, if any was in effect
    pub material: Option<String>,
    /// Face records in declaration order, arity ≥ 3, not yet triangulated
    pub faces: Vec<FaceRecord>,
}

impl ObjGroup {
    fn new(name: &str, material: Option<String>) -> Self {
        Self {
            name: name.to_string(),
            material,
            faces: Vec::new(),
        }
    }
}

/// Best-effort parse result of one geometry document
#[derive(Debug, Clone, Default)]
pub struct ObjDocument {
    /// Raw attribute pools in document order, indices already 0-based
    pub pools: VertexPools,
    /// Face groups in declaration order
    pub groups: Vec<ObjGroup>,
    /// `mtllib` reference, unresolved; path resolution relative to the
    /// geometry file's directory is the loader's responsibility
    pub material_library: Option<String>,
    /// Diagnostic counts
    pub stats: ParseStats,
    /// Recovered problems, in document order
    pub warnings: Vec<ParseWarning>,
}

/// Geometry document parser
pub struct ObjParser;

impl ObjParser {
    /// Parse geometry text into pools, groups, and a material-library
    /// reference
    ///
    /// Never fails; problems are recovered per the tolerant-parsing policy
    /// and reported in the returned document's `warnings`.
    pub fn parse(source: &str) -> ObjDocument {
        let mut doc = ObjDocument::default();
        // usemtl state survives group boundaries
        let mut active_material: Option<String> = None;

        for (index, raw_line) in source.lines().enumerate() {
            let line_num = index + 1;
            let line = raw_line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let parts: Vec<&str> = line.split_whitespace().collect();

            match parts[0] {
                "v" => {
                    if let Some(position) = parse_vec3(&parts) {
                        doc.pools.positions.push(position);
                        doc.stats.positions += 1;
                    } else {
                        doc.warn_malformed(line_num, line);
                    }
                }
                "vt" => {
                    if let Some(texcoord) = parse_vec2(&parts) {
                        doc.pools.texcoords.push(texcoord);
                        doc.stats.texcoords += 1;
                    } else {
                        doc.warn_malformed(line_num, line);
                    }
                }
                "vn" => {
                    if let Some(normal) = parse_vec3(&parts) {
                        doc.pools.normals.push(normal);
                        doc.stats.normals += 1;
                    } else {
                        doc.warn_malformed(line_num, line);
                    }
                }
                "g" | "o" => {
                    let name = if parts.len() > 1 {
                        parts[1..].join(" ")
                    } else {
                        DEFAULT_GROUP.to_string()
                    };
                    doc.groups.push(ObjGroup::new(&name, active_material.clone()));
                    doc.stats.groups += 1;
                }
                "usemtl" => {
                    if parts.len() > 1 {
                        let name = parts[1..].join(" ");
                        active_material = Some(name.clone());
                        doc.switch_material(name);
                    } else {
                        doc.warn_malformed(line_num, line);
                    }
                }
                "mtllib" => {
                    if parts.len() > 1 {
                        doc.material_library = Some(parts[1..].join(" "));
                    } else {
                        doc.warn_malformed(line_num, line);
                    }
                }
                "f" => match parse_face(&parts) {
                    Some(face) if face.arity() >= 3 => {
                        doc.active_group(&active_material).faces.push(face);
                        doc.stats.faces += 1;
                    }
                    // Degenerate: fewer than 3 corners, dropped without a
                    // warning, tracked only as a count
                    Some(_) => doc.stats.degenerate_faces += 1,
                    None => doc.warn_malformed(line_num, line),
                },
                // Unknown directives (s, l, p, ...) are ignored
                _ => {}
            }
        }

        doc
    }
}

impl ObjDocument {
    fn warn_malformed(&mut self, line: usize, text: &str) {
        self.warnings.push(ParseWarning::MalformedLine {
            line,
            text: text.to_string(),
        });
    }

    /// The group new faces land in, opening the implicit default group when
    /// none has been declared yet
    fn active_group(&mut self, active_material: &Option<String>) -> &mut ObjGroup {
        if self.groups.is_empty() {
            self.groups
                .push(ObjGroup::new(DEFAULT_GROUP, active_material.clone()));
            self.stats.groups += 1;
        }
        let last = self.groups.len() - 1;
        &mut self.groups[last]
    }

    /// Apply a `usemtl` switch: retag the current group if it has no faces
    /// yet, otherwise continue under a new group of the same name
    fn switch_material(&mut self, name: String) {
        match self.groups.last_mut() {
            Some(current) if current.faces.is_empty() => {
                current.material = Some(name);
            }
            Some(current) => {
                let group_name = current.name.clone();
                self.groups.push(ObjGroup::new(&group_name, Some(name)));
                self.stats.groups += 1;
            }
            // No group yet: the implicit group picks the material up when
            // the first face arrives
            None => {}
        }
    }
}

fn parse_vec3(parts: &[&str]) -> Option<Vec3> {
    if parts.len() < 4 {
        return None;
    }
    let x: f32 = parts[1].parse().ok()?;
    let y: f32 = parts[2].parse().ok()?;
    let z: f32 = parts[3].parse().ok()?;
    Some(Vec3::new(x, y, z))
}

fn parse_vec2(parts: &[&str]) -> Option<Vec2> {
    if parts.len() < 3 {
        return None;
    }
    let u: f32 = parts[1].parse().ok()?;
    let v: f32 = parts[2].parse().ok()?;
    Some(Vec2::new(u, v))
}

/// Parse the corner tuples of an `f` line
///
/// Each corner is `pos[/tex][/norm]` with either trailing slot possibly
/// empty. Indices are 1-based in the source and normalized to 0-based here;
/// an index of 0, a negative index, or an unparseable token makes the whole
/// line malformed.
fn parse_face(parts: &[&str]) -> Option<FaceRecord> {
    let mut corners = Vec::with_capacity(parts.len().saturating_sub(1));

    for token in &parts[1..] {
        let mut slots = token.split('/');

        let position = parse_index(slots.next()?)?;
        let texcoord = match slots.next() {
            Some("") | None => None,
            Some(slot) => Some(parse_index(slot)?),
        };
        let normal = match slots.next() {
            Some("") | None => None,
            Some(slot) => Some(parse_index(slot)?),
        };

        corners.push(FaceVertex::new(position, texcoord, normal));
    }

    Some(FaceRecord::new(corners))
}

/// 1-based source index to 0-based pool index
fn parse_index(token: &str) -> Option<usize> {
    token.parse::<usize>().ok()?.checked_sub(1)
}
