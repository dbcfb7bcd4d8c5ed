//! Per-block mesher. Every live block contributes its own geometry; cube
//! faces pressed against a live neighbor are culled via the position store.

use keel_blocks::{Block, BlockShape};
use keel_structures::BlockStore;

use crate::emit::{emit_box_face, emit_shaped_block};
use crate::face::Face;
use crate::mesh_build::MeshBuild;

/// Meshes each block independently. A cube face is skipped when the cell
/// one block-length out along its normal holds a live block, whatever that
/// neighbor's shape. Shaped blocks always emit their full hull.
pub(crate) fn mesh_blocks_simple(blocks: &[Block]) -> MeshBuild {
    let store = BlockStore::build(blocks);
    let mut mb = MeshBuild::default();
    mb.reserve_quads(blocks.len() * 3);
    for b in blocks {
        if b.destroyed {
            continue;
        }
        if b.shape != BlockShape::Cube {
            emit_shaped_block(&mut mb, b);
            continue;
        }
        let bb = b.aabb();
        let size = b.size.to_array();
        for face in Face::ALL {
            let probe = b.position + face.normal() * size[face.axis().index()];
            if store.contains(probe) {
                continue;
            }
            emit_box_face(&mut mb, bb, face, b.color, b.tier);
        }
    }
    mb
}
