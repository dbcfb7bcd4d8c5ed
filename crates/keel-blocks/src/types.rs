use keel_geom::{Aabb, Vec3};
use serde::Deserialize;

use super::material::MaterialCatalog;

/// Packed vertex color, RGBA order.
pub type Rgba = [u8; 4];

/// Material progression, lowest to highest tech.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MaterialTier {
    #[default]
    Iron,
    Titanium,
    Naonite,
    Trinium,
    Xanion,
    Ogonite,
    Avorion,
}

impl MaterialTier {
    pub const ALL: [MaterialTier; 7] = [
        MaterialTier::Iron,
        MaterialTier::Titanium,
        MaterialTier::Naonite,
        MaterialTier::Trinium,
        MaterialTier::Xanion,
        MaterialTier::Ogonite,
        MaterialTier::Avorion,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Lowercase name, also the key used in catalog TOML.
    pub fn key(self) -> &'static str {
        match self {
            MaterialTier::Iron => "iron",
            MaterialTier::Titanium => "titanium",
            MaterialTier::Naonite => "naonite",
            MaterialTier::Trinium => "trinium",
            MaterialTier::Xanion => "xanion",
            MaterialTier::Ogonite => "ogonite",
            MaterialTier::Avorion => "avorion",
        }
    }

    pub fn from_key(key: &str) -> Option<MaterialTier> {
        MaterialTier::ALL.into_iter().find(|t| t.key() == key)
    }
}

/// Functional role of a block within a structure.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockKind {
    #[default]
    Hull,
    Armor,
    Engine,
    Thruster,
    GyroArray,
    Generator,
    ShieldGenerator,
    TurretMount,
    HyperdriveCore,
    Cargo,
    CrewQuarters,
    PodDocking,
    Computer,
    Battery,
    IntegrityField,
}

/// Geometric form of a block.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockShape {
    #[default]
    Cube,
    Wedge,
    Corner,
    InnerCorner,
    Tetrahedron,
    HalfBlock,
}

impl BlockShape {
    /// Fraction of the full box the shape occupies; feeds mass and durability.
    pub fn volume_factor(self) -> f32 {
        match self {
            BlockShape::Cube => 1.0,
            BlockShape::Wedge | BlockShape::HalfBlock => 0.5,
            BlockShape::Corner | BlockShape::Tetrahedron => 0.25,
            BlockShape::InnerCorner => 0.75,
        }
    }
}

/// One of the six axis-aligned facings a shaped block can take.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Orientation {
    PosX,
    NegX,
    #[default]
    PosY,
    NegY,
    PosZ,
    NegZ,
}

impl Orientation {
    pub const ALL: [Orientation; 6] = [
        Orientation::PosX,
        Orientation::NegX,
        Orientation::PosY,
        Orientation::NegY,
        Orientation::PosZ,
        Orientation::NegZ,
    ];

    #[inline]
    pub fn unit(self) -> Vec3 {
        match self {
            Orientation::PosX => Vec3::new(1.0, 0.0, 0.0),
            Orientation::NegX => Vec3::new(-1.0, 0.0, 0.0),
            Orientation::PosY => Vec3::new(0.0, 1.0, 0.0),
            Orientation::NegY => Vec3::new(0.0, -1.0, 0.0),
            Orientation::PosZ => Vec3::new(0.0, 0.0, 1.0),
            Orientation::NegZ => Vec3::new(0.0, 0.0, -1.0),
        }
    }
}

/// A single structural voxel. `position` is the center of the box; `size` is
/// the full extent per axis, so the box spans `position ± size / 2`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Block {
    pub position: Vec3,
    pub size: Vec3,
    pub kind: BlockKind,
    pub shape: BlockShape,
    pub orientation: Orientation,
    pub tier: MaterialTier,
    pub color: Rgba,
    pub durability: f32,
    pub max_durability: f32,
    pub mass: f32,
    pub thrust: f32,
    pub power: f32,
    pub shield: f32,
    pub destroyed: bool,
}

impl Block {
    /// Plain cube block with stats derived from the catalog.
    pub fn new(
        position: Vec3,
        size: Vec3,
        tier: MaterialTier,
        kind: BlockKind,
        catalog: &MaterialCatalog,
    ) -> Self {
        Self::shaped(
            position,
            size,
            tier,
            kind,
            BlockShape::Cube,
            Orientation::default(),
            catalog,
        )
    }

    pub fn shaped(
        position: Vec3,
        size: Vec3,
        tier: MaterialTier,
        kind: BlockKind,
        shape: BlockShape,
        orientation: Orientation,
        catalog: &MaterialCatalog,
    ) -> Self {
        let mut b = Block {
            position,
            size,
            kind,
            shape,
            orientation,
            tier,
            color: [0, 0, 0, 255],
            durability: 0.0,
            max_durability: 0.0,
            mass: 0.0,
            thrust: 0.0,
            power: 0.0,
            shield: 0.0,
            destroyed: false,
        };
        b.recalculate(catalog);
        b
    }

    /// Shape-adjusted volume in world units.
    #[inline]
    pub fn volume(&self) -> f32 {
        self.size.x * self.size.y * self.size.z * self.shape.volume_factor()
    }

    /// Rederive mass, durability, and kind-specific stats from the catalog.
    /// Resets `durability` to the new maximum.
    pub fn recalculate(&mut self, catalog: &MaterialCatalog) {
        let props = catalog.get(self.tier);
        let volume = self.volume();
        self.color = props.color;
        self.mass = volume * props.mass_mult;
        self.max_durability = 100.0 * props.durability_mult * volume;
        self.thrust = 0.0;
        self.power = 0.0;
        self.shield = 0.0;
        match self.kind {
            BlockKind::Armor => {
                self.max_durability *= 5.0;
                self.mass *= 1.5;
            }
            BlockKind::Engine => self.thrust = 50.0 * volume * props.energy_mult,
            BlockKind::Thruster => self.thrust = 30.0 * volume * props.energy_mult,
            BlockKind::GyroArray => self.thrust = 20.0 * volume * props.energy_mult,
            BlockKind::Generator => self.power = 100.0 * volume * props.energy_mult,
            BlockKind::ShieldGenerator => self.shield = 200.0 * volume * props.shield_mult,
            _ => {}
        }
        self.durability = self.max_durability;
    }

    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::from_center_size(self.position, self.size)
    }

    pub fn intersects(&self, other: &Block) -> bool {
        self.aabb().intersects(other.aabb())
    }

    /// Subtract `amount` from durability. Returns true when this hit destroys
    /// the block; hits on an already destroyed block are ignored.
    pub fn apply_damage(&mut self, amount: f32) -> bool {
        if self.destroyed {
            return false;
        }
        self.durability -= amount;
        if self.durability <= 0.0 {
            self.durability = 0.0;
            self.destroyed = true;
            return true;
        }
        false
    }
}
