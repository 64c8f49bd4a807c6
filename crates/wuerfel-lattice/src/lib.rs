//! Closed-form, gap-free numbering of the surface lattice of a subdivided cube.
//!
//! A cube with `n` lattice points per edge carries
//! `8 + 12(n-2) + 6(n-2)^2` surface vertices. Every surface coordinate maps
//! to a dense index via pure arithmetic: corners occupy `[0, 8)`, edge
//! interiors the next `12(n-2)` slots, face interiors the rest. The mapping
//! is a bijection; [`check_dense`] re-verifies that with a reverse map.
#![forbid(unsafe_code)]

use hashbrown::HashMap;
use log::debug;

/// Dense identifier of one surface vertex, contiguous from 0.
pub type VertexIndex = u32;

/// A point of the `[0,n)^3` lattice. Only surface points are indexable.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Coord {
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn components(self) -> [i32; 3] {
        [self.x, self.y, self.z]
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Where on the cube surface a coordinate sits, by how many of its
/// components are strictly between the extremes 0 and n-1.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SurfaceKind {
    /// All three components extreme. 8 per cube.
    Corner,
    /// One free component; the interior of one of the 12 cube edges.
    Edge,
    /// Two free components; the interior of one of the 6 cube faces.
    Face,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LatticeError {
    /// A component is negative or >= n. The caller broke the contract.
    OutOfRange { coord: Coord, n: u32 },
    /// All three components are strictly inside; the point is not on the surface.
    Interior { coord: Coord },
    /// Two distinct surface coordinates produced the same index.
    DuplicateIndex {
        index: VertexIndex,
        first: Coord,
        second: Coord,
    },
    /// An index in `[0, vertex_count)` was never produced.
    IndexGap { missing: VertexIndex },
    /// A vertex table slot holds a coordinate whose index is some other slot.
    MisplacedVertex {
        index: VertexIndex,
        coord: Coord,
        actual: VertexIndex,
    },
}

impl std::fmt::Display for LatticeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LatticeError::OutOfRange { coord, n } => {
                write!(f, "coordinate {} outside the n={} lattice", coord, n)
            }
            LatticeError::Interior { coord } => {
                write!(f, "coordinate {} is interior to the cube, not on its surface", coord)
            }
            LatticeError::DuplicateIndex { index, first, second } => {
                write!(f, "vertex index {} assigned to both {} and {}", index, first, second)
            }
            LatticeError::IndexGap { missing } => {
                write!(f, "no surface coordinate maps to vertex index {}", missing)
            }
            LatticeError::MisplacedVertex { index, coord, actual } => {
                write!(
                    f,
                    "vertex table slot {} holds {} which indexes to {}",
                    index, coord, actual
                )
            }
        }
    }
}

impl std::error::Error for LatticeError {}

/// Number of interior lattice points along one edge (`n - 2`).
#[inline]
fn edge_run(n: u32) -> u32 {
    n.saturating_sub(2)
}

/// Total surface vertices for a cube with `n` lattice points per edge.
#[inline]
pub fn vertex_count(n: u32) -> u32 {
    let run = edge_run(n);
    8 + 12 * run + 6 * run * run
}

/// Classifies `coord` as corner, edge or face point of the `n`-lattice.
pub fn classify(coord: Coord, n: u32) -> Result<SurfaceKind, LatticeError> {
    let hi = n as i32 - 1;
    let mut free = 0u32;
    for c in coord.components() {
        if c < 0 || c > hi {
            return Err(LatticeError::OutOfRange { coord, n });
        }
        if c != 0 && c != hi {
            free += 1;
        }
    }
    match free {
        0 => Ok(SurfaceKind::Corner),
        1 => Ok(SurfaceKind::Edge),
        2 => Ok(SurfaceKind::Face),
        _ => Err(LatticeError::Interior { coord }),
    }
}

/// Computes the dense index of one surface coordinate, independently of any
/// other vertex. Corners first, then edge interiors, then face interiors.
///
/// The slot conventions are fixed: corners read their components as a 3-bit
/// number (a component at n-1 is a 1 bit, x most significant); each edge is
/// keyed by its varying axis and the same 2-bit encoding of its two fixed
/// components; each face by `2*axis + 1` when held at n-1, `2*axis` when
/// held at 0, its cells row-major over the free axes in increasing order.
pub fn vertex_index(coord: Coord, n: u32) -> Result<VertexIndex, LatticeError> {
    let kind = classify(coord, n)?;
    let hi = n as i32 - 1;
    let run = edge_run(n);
    let index = match kind {
        SurfaceKind::Corner => {
            let mut bits = 0u32;
            for c in coord.components() {
                bits *= 2;
                if c == hi {
                    bits += 1;
                }
            }
            bits
        }
        SurfaceKind::Edge => {
            let mut axis = 0u32;
            let mut along = 0u32;
            let mut slot = 0u32;
            for (i, c) in coord.components().into_iter().enumerate() {
                if c == hi {
                    slot = slot * 2 + 1;
                } else if c == 0 {
                    slot *= 2;
                } else {
                    axis = i as u32;
                    along = (c - 1) as u32;
                }
            }
            8 + axis * 4 * run + slot * run + along
        }
        SurfaceKind::Face => {
            let mut slot = 0u32;
            let mut cell = 0u32;
            for (i, c) in coord.components().into_iter().enumerate() {
                if c == hi {
                    slot = 2 * i as u32 + 1;
                } else if c == 0 {
                    slot = 2 * i as u32;
                } else {
                    cell = cell * run + (c - 1) as u32;
                }
            }
            8 + 12 * run + slot * run * run + cell
        }
    };
    Ok(index)
}

/// Enumerates every surface coordinate exactly once: the 8 corners, then the
/// 12 edge interiors, then the 6 face interiors.
pub fn surface_coords(n: u32) -> Vec<Coord> {
    let hi = n as i32 - 1;
    let mut out = Vec::with_capacity(vertex_count(n) as usize);
    for &x in &[0, hi] {
        for &y in &[0, hi] {
            for &z in &[0, hi] {
                out.push(Coord::new(x, y, z));
            }
        }
    }
    for axis in 0..3 {
        for &a2 in &[0, hi] {
            for &a3 in &[0, hi] {
                for t in 1..hi {
                    out.push(coord_on_axis(axis, t, a2, a3));
                }
            }
        }
    }
    for axis in 0..3 {
        for u in 1..hi {
            for v in 1..hi {
                for &e in &[0, hi] {
                    out.push(coord_on_axis(axis, e, u, v));
                }
            }
        }
    }
    out
}

/// Builds a coordinate with `a1` on `axis` and `a2`, `a3` on the two other
/// axes in cyclic order.
#[inline]
pub fn coord_on_axis(axis: usize, a1: i32, a2: i32, a3: i32) -> Coord {
    let mut c = [0i32; 3];
    c[axis] = a1;
    c[(axis + 1) % 3] = a2;
    c[(axis + 2) % 3] = a3;
    Coord::new(c[0], c[1], c[2])
}

/// Reverse-map verification pass: recomputes every surface index and checks
/// for collisions and gaps. The closed form in [`vertex_index`] stays the
/// source of truth; this routine only cross-checks it.
pub fn check_dense(n: u32) -> Result<(), LatticeError> {
    let count = vertex_count(n);
    let mut by_index: HashMap<VertexIndex, Coord> = HashMap::with_capacity(count as usize);
    for coord in surface_coords(n) {
        let index = vertex_index(coord, n)?;
        if let Some(&first) = by_index.get(&index) {
            return Err(LatticeError::DuplicateIndex {
                index,
                first,
                second: coord,
            });
        }
        by_index.insert(index, coord);
    }
    for index in 0..count {
        if !by_index.contains_key(&index) {
            return Err(LatticeError::IndexGap { missing: index });
        }
    }
    debug!("lattice n={}: {} surface vertices, dense and collision-free", n, count);
    Ok(())
}
