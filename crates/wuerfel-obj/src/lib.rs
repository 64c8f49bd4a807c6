//! Wavefront OBJ emission for block meshes, plus a small reader used to
//! verify round-trips.
#![forbid(unsafe_code)]

use std::io::{self, BufRead, Write};

use log::debug;
use wuerfel_geom::Vec3;
use wuerfel_mesh::BlockMesh;

#[derive(Debug)]
pub enum ObjError {
    Io(io::Error),
    /// Malformed input at a 1-based line number.
    Parse { line: usize, message: String },
}

impl std::fmt::Display for ObjError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ObjError::Io(e) => write!(f, "obj i/o error: {}", e),
            ObjError::Parse { line, message } => write!(f, "obj parse error, line {}: {}", line, message),
        }
    }
}

impl std::error::Error for ObjError {}

impl From<io::Error> for ObjError {
    fn from(e: io::Error) -> Self {
        ObjError::Io(e)
    }
}

/// Writes the mesh as OBJ text: a `g` line, one `v` line per vertex in index
/// order (so 1-based line position equals index + 1), then one `f` line per
/// triangle with 1-based `index//index` tokens, the index doubling as the
/// normal reference. Face line order is whatever the set yields.
pub fn write_obj<W: Write>(out: &mut W, mesh: &BlockMesh, object: &str) -> io::Result<()> {
    writeln!(out, "g {}", object)?;
    for index in 0..mesh.vertices().len() as u32 {
        let p = mesh.vertex_position(index);
        writeln!(out, "v {} {} {}", p.x, p.y, p.z)?;
    }
    for tri in mesh.triangles() {
        writeln!(
            out,
            "f {}//{} {}//{} {}//{}",
            tri[0] + 1,
            tri[0] + 1,
            tri[1] + 1,
            tri[1] + 1,
            tri[2] + 1,
            tri[2] + 1
        )?;
    }
    debug!(
        "wrote obj '{}': {} vertices, {} faces",
        object,
        mesh.vertices().len(),
        mesh.triangles().len()
    );
    Ok(())
}

/// Parsed OBJ content, indices rebased to 0.
#[derive(Debug, Default)]
pub struct ObjModel {
    pub object: Option<String>,
    pub positions: Vec<Vec3>,
    pub triangles: Vec<[u32; 3]>,
}

/// Reads back the subset of OBJ this crate writes (`g`, `v`, triangular `f`
/// with `v`, `v//vn` or `v/vt/vn` tokens). Blank lines, comments and unknown
/// tags are skipped.
pub fn read_obj<R: BufRead>(input: R) -> Result<ObjModel, ObjError> {
    let mut model = ObjModel::default();
    let mut face_lines: Vec<usize> = Vec::new();
    for (i, line) in input.lines().enumerate() {
        let lineno = i + 1;
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut fields = line.split_whitespace();
        match fields.next() {
            Some("g") | Some("o") => {
                model.object = fields.next().map(str::to_string);
            }
            Some("v") => {
                let p = parse_position(fields, lineno)?;
                model.positions.push(p);
            }
            Some("f") => {
                let tri = parse_triangle(fields, lineno)?;
                model.triangles.push(tri);
                face_lines.push(lineno);
            }
            _ => {}
        }
    }
    // index bounds only checkable once all v lines are in
    for (tri, &lineno) in model.triangles.iter().zip(&face_lines) {
        if let Some(&bad) = tri.iter().find(|&&v| v as usize >= model.positions.len()) {
            return Err(ObjError::Parse {
                line: lineno,
                message: format!(
                    "face references vertex {} but only {} were declared",
                    bad + 1,
                    model.positions.len()
                ),
            });
        }
    }
    Ok(model)
}

fn parse_position<'a>(
    mut fields: impl Iterator<Item = &'a str>,
    lineno: usize,
) -> Result<Vec3, ObjError> {
    let mut out = [0f32; 3];
    for slot in &mut out {
        let field = fields.next().ok_or_else(|| ObjError::Parse {
            line: lineno,
            message: "vertex needs three coordinates".to_string(),
        })?;
        *slot = field.parse().map_err(|_| ObjError::Parse {
            line: lineno,
            message: format!("bad coordinate '{}'", field),
        })?;
    }
    Ok(Vec3::new(out[0], out[1], out[2]))
}

fn parse_triangle<'a>(
    fields: impl Iterator<Item = &'a str>,
    lineno: usize,
) -> Result<[u32; 3], ObjError> {
    let mut out = [0u32; 3];
    let mut seen = 0usize;
    for field in fields {
        if seen == 3 {
            return Err(ObjError::Parse {
                line: lineno,
                message: "only triangular faces are supported".to_string(),
            });
        }
        // token forms: "7", "7//7", "7/2/7" -- the vertex index leads
        let vertex = field.split('/').next().unwrap_or("");
        let index: u32 = vertex.parse().map_err(|_| ObjError::Parse {
            line: lineno,
            message: format!("bad face token '{}'", field),
        })?;
        if index == 0 {
            return Err(ObjError::Parse {
                line: lineno,
                message: "obj indices are 1-based".to_string(),
            });
        }
        out[seen] = index - 1;
        seen += 1;
    }
    if seen != 3 {
        return Err(ObjError::Parse {
            line: lineno,
            message: "face needs three vertices".to_string(),
        });
    }
    Ok(out)
}
