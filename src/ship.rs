//! TOML ship layouts for the harness.
//!
//! ```toml
//! name = "skiff"
//! tier = "titanium"
//!
//! [[blocks]]
//! pos = [0.0, 0.0, 0.0]
//! kind = "hull"
//!
//! [[blocks]]
//! pos = [1.0, 0.0, 0.0]
//! kind = "armor"
//! shape = "wedge"
//! orientation = "neg-x"
//! tier = "trinium"
//! ```

use std::error::Error;
use std::path::Path;

use serde::Deserialize;

use keel_blocks::{Block, BlockKind, BlockShape, MaterialCatalog, MaterialTier, Orientation};
use keel_geom::Vec3;
use keel_structures::Structure;

#[derive(Deserialize)]
struct ShipFile {
    name: Option<String>,
    tier: Option<MaterialTier>,
    #[serde(default)]
    blocks: Vec<BlockEntry>,
}

#[derive(Deserialize)]
struct BlockEntry {
    pos: [f32; 3],
    #[serde(default = "unit_size")]
    size: [f32; 3],
    #[serde(default)]
    kind: BlockKind,
    #[serde(default)]
    shape: BlockShape,
    #[serde(default)]
    orientation: Orientation,
    tier: Option<MaterialTier>,
}

fn unit_size() -> [f32; 3] {
    [1.0, 1.0, 1.0]
}

/// Builds a structure from a layout file. Per-block `tier` falls back to
/// the file-level tier, then to the catalog default.
pub fn load_structure(path: &Path, catalog: &MaterialCatalog) -> Result<Structure, Box<dyn Error>> {
    let text = std::fs::read_to_string(path)?;
    parse_structure(&text, catalog)
}

fn parse_structure(text: &str, catalog: &MaterialCatalog) -> Result<Structure, Box<dyn Error>> {
    let file: ShipFile = toml::from_str(text)?;
    let default_tier = file.tier.unwrap_or_default();
    let mut st = Structure::new(1);
    for e in &file.blocks {
        st.add_block(Block::shaped(
            Vec3::from_array(e.pos),
            Vec3::from_array(e.size),
            e.tier.unwrap_or(default_tier),
            e.kind,
            e.shape,
            e.orientation,
            catalog,
        ));
    }
    if let Some(name) = &file.name {
        log::info!("loaded ship '{}': {} blocks", name, st.len());
    }
    Ok(st)
}
