//! Procedural demo ship used when no layout file is given.

use hashbrown::HashSet;

use keel_blocks::{Block, BlockKind, BlockShape, MaterialCatalog, MaterialTier, Orientation};
use keel_geom::Vec3;
use keel_structures::{Structure, lookup_key};

struct ShipBuilder<'a> {
    st: Structure,
    used: HashSet<(i32, i32, i32)>,
    tier: MaterialTier,
    catalog: &'a MaterialCatalog,
}

impl<'a> ShipBuilder<'a> {
    fn new(tier: MaterialTier, catalog: &'a MaterialCatalog) -> Self {
        Self {
            st: Structure::new(1),
            used: HashSet::new(),
            tier,
            catalog,
        }
    }

    /// First writer wins; later bands skip cells an earlier band owns.
    fn place(
        &mut self,
        x: i32,
        y: i32,
        z: i32,
        kind: BlockKind,
        shape: BlockShape,
        o: Orientation,
    ) {
        let pos = Vec3::new(x as f32, y as f32, z as f32);
        if !self.used.insert(lookup_key(pos)) {
            return;
        }
        self.st.add_block(Block::shaped(
            pos,
            Vec3::ONE,
            self.tier,
            kind,
            shape,
            o,
            self.catalog,
        ));
    }

    fn cube(&mut self, x: i32, y: i32, z: i32, kind: BlockKind) {
        self.place(x, y, z, kind, BlockShape::Cube, Orientation::default());
    }
}

/// Blocky corvette: hull slab with an armor skin, wedge prow with corner
/// trim, engines and thrusters across the stern, systems buried amidships.
/// Every block is a unit cube (shaped trim included), so both meshers
/// accept the result.
pub fn demo_ship(size: u32, tier: MaterialTier, catalog: &MaterialCatalog) -> Structure {
    let n = size.max(4) as i32;
    let length = n;
    let half_w = (n / 4).max(1);
    let height = (n / 4).max(2);
    let mut b = ShipBuilder::new(tier, catalog);

    // Systems go in first so the hull fill cannot take their cells.
    let mid = length / 2;
    let aft = (mid - 2).max(1);
    let fore = (mid + 2).min(length - 1);
    b.cube(mid, 0, 0, BlockKind::Generator);
    b.cube(aft, 0, 0, BlockKind::ShieldGenerator);
    b.cube(fore, 0, 0, BlockKind::GyroArray);
    b.cube(aft, 0, 1, BlockKind::Cargo);
    b.cube(fore, 0, -1, BlockKind::Cargo);

    // Hull slab; top layer and the z sides wear armor.
    for x in 0..length {
        for y in 0..height {
            for z in -half_w..=half_w {
                let skin = y == height - 1 || z.abs() == half_w;
                let kind = if skin { BlockKind::Armor } else { BlockKind::Hull };
                b.cube(x, y, z, kind);
            }
        }
    }

    // Prow: wedges ramp down toward +x, corners chamfer the outer edges.
    for y in 0..height {
        for z in (-half_w + 1)..half_w {
            b.place(
                length,
                y,
                z,
                BlockKind::Armor,
                BlockShape::Wedge,
                Orientation::NegX,
            );
        }
        b.place(
            length,
            y,
            half_w,
            BlockKind::Armor,
            BlockShape::Corner,
            Orientation::PosX,
        );
        b.place(
            length,
            y,
            -half_w,
            BlockKind::Armor,
            BlockShape::Corner,
            Orientation::NegZ,
        );
    }

    // Stern: engine core flanked by thrusters.
    for y in 0..height {
        for z in -half_w..=half_w {
            let kind = if z.abs() == half_w {
                BlockKind::Thruster
            } else {
                BlockKind::Engine
            };
            b.cube(-1, y, z, kind);
        }
    }

    b.st
}
