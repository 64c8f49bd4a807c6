//! Surface mesh construction for a subdivided cube.
//!
//! Builds the ordered vertex table (one slot per lattice index) and the two
//! triangles covering each unit grid cell of every cube face, wound to face
//! outward.
#![forbid(unsafe_code)]

mod face;

pub use face::CubeFace;

use hashbrown::HashSet;
use log::debug;
use wuerfel_geom::Vec3;
use wuerfel_lattice as lattice;
use wuerfel_lattice::{Coord, LatticeError, VertexIndex};

/// Winding-ordered triangle of vertex indices.
pub type Tri = [VertexIndex; 3];

/// Maps a lattice component in `[0,n)` onto the centered unit cube, so
/// corners land at +-0.5 on every axis. Requires `n >= 2`; smaller lattices
/// have no span to divide by.
#[inline]
pub fn lattice_position(coord: Coord, n: u32) -> Vec3 {
    debug_assert!(n >= 2, "lattice needs at least two points per edge");
    let span = (n - 1) as f32;
    Vec3::new(
        coord.x as f32 / span - 0.5,
        coord.y as f32 / span - 0.5,
        coord.z as f32 / span - 0.5,
    )
}

/// Completed block surface mesh: every surface vertex at its lattice index,
/// plus the unordered set of outward-wound triangles.
pub struct BlockMesh {
    n: u32,
    vertices: Vec<Coord>,
    triangles: HashSet<Tri>,
}

impl BlockMesh {
    /// Builds the full mesh for a cube with `n >= 2` lattice points per edge.
    ///
    /// Errors surface broken invariants, not runtime conditions: a slot
    /// collision or an unfilled slot means the closed-form numbering and the
    /// surface enumeration disagree.
    pub fn build(n: u32) -> Result<BlockMesh, LatticeError> {
        let count = lattice::vertex_count(n) as usize;
        let mut slots: Vec<Option<Coord>> = vec![None; count];
        for coord in lattice::surface_coords(n) {
            let index = lattice::vertex_index(coord, n)?;
            if let Some(first) = slots[index as usize] {
                return Err(LatticeError::DuplicateIndex {
                    index,
                    first,
                    second: coord,
                });
            }
            slots[index as usize] = Some(coord);
        }
        let mut vertices = Vec::with_capacity(count);
        for (index, slot) in slots.into_iter().enumerate() {
            match slot {
                Some(coord) => vertices.push(coord),
                None => {
                    return Err(LatticeError::IndexGap {
                        missing: index as VertexIndex,
                    });
                }
            }
        }

        let cells = (n - 1) as usize;
        let mut triangles: HashSet<Tri> = HashSet::with_capacity(12 * cells * cells);
        for cube_face in CubeFace::ALL {
            for i in 0..cells as i32 {
                for j in 0..cells as i32 {
                    for corners in cell_triangles(cube_face, i, j, n) {
                        let tri = [
                            lattice::vertex_index(corners[0], n)?,
                            lattice::vertex_index(corners[1], n)?,
                            lattice::vertex_index(corners[2], n)?,
                        ];
                        triangles.insert(tri);
                    }
                }
            }
        }
        debug!(
            "block mesh n={}: {} vertices, {} triangles",
            n,
            vertices.len(),
            triangles.len()
        );
        Ok(BlockMesh {
            n,
            vertices,
            triangles,
        })
    }

    #[inline]
    pub fn subdivisions(&self) -> u32 {
        self.n
    }

    /// Surface coordinates ordered by vertex index.
    #[inline]
    pub fn vertices(&self) -> &[Coord] {
        &self.vertices
    }

    #[inline]
    pub fn triangles(&self) -> &HashSet<Tri> {
        &self.triangles
    }

    /// Centered unit-cube position of the vertex at `index`. Panics when
    /// `index` is not below [`lattice::vertex_count`] for this mesh.
    #[inline]
    pub fn vertex_position(&self, index: VertexIndex) -> Vec3 {
        lattice_position(self.vertices[index as usize], self.n)
    }

    /// Consistency pass over the finished table: every slot must re-derive
    /// its own index (which also re-checks the surface condition), and the
    /// table must span the whole dense range.
    pub fn validate(&self) -> Result<(), LatticeError> {
        let count = lattice::vertex_count(self.n);
        if (self.vertices.len() as u32) < count {
            return Err(LatticeError::IndexGap {
                missing: self.vertices.len() as VertexIndex,
            });
        }
        for (index, &coord) in self.vertices.iter().enumerate() {
            let actual = lattice::vertex_index(coord, self.n)?;
            if actual as usize != index {
                return Err(LatticeError::MisplacedVertex {
                    index: index as VertexIndex,
                    coord,
                    actual,
                });
            }
        }
        Ok(())
    }
}

/// The two triangles covering the cell with lower corner `(i, j)` in the
/// face's 2D parameterization (axes `axis+1`, `axis+2`, cyclic). Every cell
/// splits along the same diagonal; negative faces mirror the order so the
/// winding points along the outward normal.
fn cell_triangles(cube_face: CubeFace, i: i32, j: i32, n: u32) -> [[Coord; 3]; 2] {
    let hi = n as i32 - 1;
    let held = if cube_face.positive() { hi } else { 0 };
    let axis = cube_face.axis();
    let at = |u: i32, v: i32| lattice::coord_on_axis(axis, held, u, v);
    let a = at(i, j);
    let b = at(i + 1, j);
    let c = at(i, j + 1);
    let d = at(i + 1, j + 1);
    if cube_face.positive() {
        [[a, b, d], [a, d, c]]
    } else {
        [[a, d, b], [a, c, d]]
    }
}
