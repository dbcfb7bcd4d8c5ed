//! Structure containers and the rounded-position block lookup.
#![forbid(unsafe_code)]

use keel_blocks::Block;

pub mod store;

pub use store::{BlockStore, lookup_key};

pub type StructureId = u32;

/// Stable per-structure handle for a placed block.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct BlockId(pub u32);

/// Mutable block list for one vessel. Meshing never reads this directly;
/// callers snapshot `live_blocks()` and hand the slice to the mesher.
pub struct Structure {
    pub id: StructureId,
    entries: Vec<(BlockId, Block)>,
    next_block_id: u32,
    pub dirty_rev: u64,
    pub built_rev: u64,
}

impl Structure {
    pub fn new(id: StructureId) -> Self {
        Self {
            id,
            entries: Vec::new(),
            next_block_id: 0,
            dirty_rev: 1,
            built_rev: 0,
        }
    }

    pub fn add_block(&mut self, block: Block) -> BlockId {
        let id = BlockId(self.next_block_id);
        self.next_block_id += 1;
        self.entries.push((id, block));
        self.bump_rev();
        id
    }

    pub fn remove_block(&mut self, id: BlockId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(bid, _)| *bid != id);
        let removed = self.entries.len() != before;
        if removed {
            self.bump_rev();
        }
        removed
    }

    pub fn get_block(&self, id: BlockId) -> Option<&Block> {
        self.entries
            .iter()
            .find(|(bid, _)| *bid == id)
            .map(|(_, b)| b)
    }

    /// Handing out `&mut` counts as a mutation for rebuild tracking.
    pub fn get_block_mut(&mut self, id: BlockId) -> Option<&mut Block> {
        self.bump_rev();
        self.entries
            .iter_mut()
            .find(|(bid, _)| *bid == id)
            .map(|(_, b)| b)
    }

    pub fn clear_blocks(&mut self) {
        self.entries.clear();
        self.bump_rev();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.entries.iter().map(|(_, b)| b)
    }

    /// Combined mass of the surviving blocks.
    pub fn total_mass(&self) -> f32 {
        self.blocks()
            .filter(|b| !b.destroyed)
            .map(|b| b.mass)
            .sum()
    }

    /// Copy of the non-destroyed blocks in insertion order; the input the
    /// meshers take.
    pub fn live_blocks(&self) -> Vec<Block> {
        self.blocks().filter(|b| !b.destroyed).copied().collect()
    }

    pub fn mark_built(&mut self, rev: u64) {
        self.built_rev = rev;
    }

    #[inline]
    pub fn needs_rebuild(&self) -> bool {
        self.built_rev != self.dirty_rev
    }

    fn bump_rev(&mut self) {
        self.dirty_rev = self.dirty_rev.wrapping_add(1).max(1);
    }
}
