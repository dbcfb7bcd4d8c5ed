use keel_blocks::Block;
use keel_geom::{Aabb, Vec3};

use crate::error::MeshError;

/// Hard per-axis ceiling on dense grid dimensions. A structure spanning more
/// cells than this is meshed on the per-block path instead.
pub const DENSE_AXIS_CAP: usize = 1000;

/// Integer cell of a block center. Blocks are assumed unit-aligned; the
/// greedy path validates that before building a grid.
#[inline]
pub fn cell_of(p: Vec3) -> [i32; 3] {
    [p.x.round() as i32, p.y.round() as i32, p.z.round() as i32]
}

/// Per-build view over a live block snapshot: the geometric bounds plus the
/// slice itself. Constructed once per meshing pass and discarded after.
pub struct VoxelGrid<'a> {
    pub bounds: Aabb,
    pub blocks: &'a [Block],
}

impl<'a> VoxelGrid<'a> {
    /// `None` when the slice holds no live blocks.
    pub fn from_blocks(blocks: &'a [Block]) -> Option<Self> {
        let mut live = blocks.iter().filter(|b| !b.destroyed);
        let first = live.next()?;
        let mut bounds = first.aabb();
        for b in live {
            bounds = bounds.union(b.aabb());
        }
        Some(Self { bounds, blocks })
    }
}

/// Flat 3-D occupancy array over the grid's integer cells. Cells hold
/// indices into the source slice; destroyed blocks never enter, and when two
/// blocks map to the same cell the later one wins, matching the position
/// store.
pub struct DenseGrid<'a> {
    min_cell: [i32; 3],
    dims: [usize; 3],
    cells: Vec<Option<usize>>,
    blocks: &'a [Block],
}

impl<'a> DenseGrid<'a> {
    pub fn build(grid: &VoxelGrid<'a>) -> Result<Self, MeshError> {
        let mut min_c = [i32::MAX; 3];
        let mut max_c = [i32::MIN; 3];
        let mut any = false;
        for b in grid.blocks.iter().filter(|b| !b.destroyed) {
            let c = cell_of(b.position);
            for a in 0..3 {
                min_c[a] = min_c[a].min(c[a]);
                max_c[a] = max_c[a].max(c[a]);
            }
            any = true;
        }
        if !any {
            return Ok(Self {
                min_cell: [0; 3],
                dims: [0; 3],
                cells: Vec::new(),
                blocks: grid.blocks,
            });
        }
        let mut dims = [0usize; 3];
        for a in 0..3 {
            // Spans between saturated extreme cells overflow i32.
            dims[a] = (max_c[a] as i64 - min_c[a] as i64) as usize + 1;
        }
        if dims.iter().any(|&d| d > DENSE_AXIS_CAP) {
            return Err(MeshError::GridTooLarge { dims });
        }
        let mut cells = vec![None; dims[0] * dims[1] * dims[2]];
        for (i, b) in grid.blocks.iter().enumerate() {
            if b.destroyed {
                continue;
            }
            let c = cell_of(b.position);
            let l = [
                (c[0] - min_c[0]) as usize,
                (c[1] - min_c[1]) as usize,
                (c[2] - min_c[2]) as usize,
            ];
            cells[(l[1] * dims[2] + l[2]) * dims[0] + l[0]] = Some(i);
        }
        Ok(Self {
            min_cell: min_c,
            dims,
            cells,
            blocks: grid.blocks,
        })
    }

    #[inline]
    pub fn dims(&self) -> [usize; 3] {
        self.dims
    }

    #[inline]
    pub fn min_cell(&self) -> [i32; 3] {
        self.min_cell
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Lookup by grid-relative cell; anything outside the dims is empty.
    pub fn block_at_local(&self, c: [i32; 3]) -> Option<&'a Block> {
        for a in 0..3 {
            if c[a] < 0 || c[a] as usize >= self.dims[a] {
                return None;
            }
        }
        let l = [c[0] as usize, c[1] as usize, c[2] as usize];
        self.cells[(l[1] * self.dims[2] + l[2]) * self.dims[0] + l[0]].map(|i| &self.blocks[i])
    }

    /// Lookup by absolute cell coordinates.
    pub fn block_at(&self, c: [i32; 3]) -> Option<&'a Block> {
        self.block_at_local([
            c[0] - self.min_cell[0],
            c[1] - self.min_cell[1],
            c[2] - self.min_cell[2],
        ])
    }
}
