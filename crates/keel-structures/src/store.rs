use hashbrown::HashMap;

use keel_blocks::Block;
use keel_geom::Vec3;

/// Quantize a position to one decimal place per axis. Positions within
/// ±0.05 of the same decimal grid point produce the same key, which is the
/// intended tolerance for float drift in block placement.
#[inline]
pub fn lookup_key(p: Vec3) -> (i32, i32, i32) {
    (
        (p.x * 10.0).round() as i32,
        (p.y * 10.0).round() as i32,
        (p.z * 10.0).round() as i32,
    )
}

/// Read-only position index over a block slice, rebuilt per meshing pass.
/// Destroyed blocks are not entered; when two live blocks round to the same
/// key the later one wins.
pub struct BlockStore {
    map: HashMap<(i32, i32, i32), usize>,
}

impl BlockStore {
    pub fn build(blocks: &[Block]) -> Self {
        let mut map = HashMap::with_capacity(blocks.len());
        for (i, b) in blocks.iter().enumerate() {
            if b.destroyed {
                continue;
            }
            map.insert(lookup_key(b.position), i);
        }
        Self { map }
    }

    /// Exact-key membership; there is no nearest-match search.
    #[inline]
    pub fn contains(&self, position: Vec3) -> bool {
        self.map.contains_key(&lookup_key(position))
    }

    /// Index into the slice the store was built from.
    #[inline]
    pub fn get_index(&self, position: Vec3) -> Option<usize> {
        self.map.get(&lookup_key(position)).copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
