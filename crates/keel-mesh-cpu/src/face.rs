use keel_geom::Vec3;

/// One of the three world axes.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Axis {
    X = 0,
    Y = 1,
    Z = 2,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::new(1.0, 0.0, 0.0),
            Axis::Y => Vec3::new(0.0, 1.0, 0.0),
            Axis::Z => Vec3::new(0.0, 0.0, 1.0),
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Face {
    PosY = 0,
    NegY = 1,
    PosX = 2,
    NegX = 3,
    PosZ = 4,
    NegZ = 5,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::PosY,
        Face::NegY,
        Face::PosX,
        Face::NegX,
        Face::PosZ,
        Face::NegZ,
    ];

    /// Returns the `[0..6)` index of this face.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Converts a face index `[0..6)` back into a `Face` value.
    /// Falls back to `PosY` for out-of-range indices.
    #[inline]
    pub fn from_index(i: usize) -> Face {
        match i {
            0 => Face::PosY,
            1 => Face::NegY,
            2 => Face::PosX,
            3 => Face::NegX,
            4 => Face::PosZ,
            5 => Face::NegZ,
            _ => Face::PosY,
        }
    }

    /// Returns the unit-normal vector for this face.
    #[inline]
    pub fn normal(self) -> Vec3 {
        match self {
            Face::PosY => Vec3::new(0.0, 1.0, 0.0),
            Face::NegY => Vec3::new(0.0, -1.0, 0.0),
            Face::PosX => Vec3::new(1.0, 0.0, 0.0),
            Face::NegX => Vec3::new(-1.0, 0.0, 0.0),
            Face::PosZ => Vec3::new(0.0, 0.0, 1.0),
            Face::NegZ => Vec3::new(0.0, 0.0, -1.0),
        }
    }

    #[inline]
    pub fn axis(self) -> Axis {
        match self {
            Face::PosY | Face::NegY => Axis::Y,
            Face::PosX | Face::NegX => Axis::X,
            Face::PosZ | Face::NegZ => Axis::Z,
        }
    }

    /// `+1.0` for the positive faces, `-1.0` for the negative ones.
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Face::PosY | Face::PosX | Face::PosZ => 1.0,
            _ => -1.0,
        }
    }

    #[inline]
    pub fn from_axis_dir(axis: Axis, positive: bool) -> Face {
        match (axis, positive) {
            (Axis::X, true) => Face::PosX,
            (Axis::X, false) => Face::NegX,
            (Axis::Y, true) => Face::PosY,
            (Axis::Y, false) => Face::NegY,
            (Axis::Z, true) => Face::PosZ,
            (Axis::Z, false) => Face::NegZ,
        }
    }

    #[inline]
    pub fn opposite(self) -> Face {
        match self {
            Face::PosY => Face::NegY,
            Face::NegY => Face::PosY,
            Face::PosX => Face::NegX,
            Face::NegX => Face::PosX,
            Face::PosZ => Face::NegZ,
            Face::NegZ => Face::PosZ,
        }
    }
}
