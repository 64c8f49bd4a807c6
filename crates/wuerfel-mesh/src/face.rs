use wuerfel_geom::Vec3;

/// One of the six axis-aligned cube faces, keyed by held axis and extreme.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum CubeFace {
    PosX = 0,
    NegX = 1,
    PosY = 2,
    NegY = 3,
    PosZ = 4,
    NegZ = 5,
}

impl CubeFace {
    pub const ALL: [CubeFace; 6] = [
        CubeFace::PosX,
        CubeFace::NegX,
        CubeFace::PosY,
        CubeFace::NegY,
        CubeFace::PosZ,
        CubeFace::NegZ,
    ];

    /// Returns the `[0..6)` index of this face.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The axis held at an extreme on this face (x=0, y=1, z=2).
    #[inline]
    pub fn axis(self) -> usize {
        match self {
            CubeFace::PosX | CubeFace::NegX => 0,
            CubeFace::PosY | CubeFace::NegY => 1,
            CubeFace::PosZ | CubeFace::NegZ => 2,
        }
    }

    /// True when the face sits at the n-1 extreme of its axis.
    #[inline]
    pub fn positive(self) -> bool {
        matches!(self, CubeFace::PosX | CubeFace::PosY | CubeFace::PosZ)
    }

    /// Returns the outward unit-normal vector for this face.
    #[inline]
    pub fn normal(self) -> Vec3 {
        let unit = Vec3::axis_unit(self.axis());
        if self.positive() { unit } else { -unit }
    }
}
