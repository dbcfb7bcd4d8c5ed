//! CPU meshing crate: per-block and greedy meshers for block structures.
#![forbid(unsafe_code)]

use keel_blocks::Block;
use keel_geom::Aabb;

pub mod emit;
pub mod error;
pub mod face;
pub mod grid;
pub mod mesh_build;

mod greedy;
mod simple;

pub use error::MeshError;
pub use face::{Axis, Face};
pub use greedy::UNIT_SIZE_EPS;
pub use grid::{DENSE_AXIS_CAP, DenseGrid, VoxelGrid};
pub use mesh_build::MeshBuild;

/// Which mesher the top-level entry point runs.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MesherMode {
    Simple,
    Greedy,
}

/// Finished mesh: triangle buffers plus the structure's bounding box.
#[derive(Default, Clone)]
pub struct StructureMeshCPU {
    pub bbox: Aabb,
    pub build: MeshBuild,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct MeshStats {
    pub vertices: usize,
    pub indices: usize,
    pub triangles: usize,
}

impl StructureMeshCPU {
    pub fn stats(&self) -> MeshStats {
        MeshStats {
            vertices: self.build.vertex_count(),
            indices: self.build.index_count(),
            triangles: self.build.triangle_count(),
        }
    }
}

fn live_bounds(blocks: &[Block]) -> Aabb {
    VoxelGrid::from_blocks(blocks).map_or(Aabb::ZERO, |g| g.bounds)
}

/// Per-block mesher. Handles every shape and any block size; never fails.
pub fn build_structure_simple_cpu(blocks: &[Block]) -> StructureMeshCPU {
    StructureMeshCPU {
        bbox: live_bounds(blocks),
        build: simple::mesh_blocks_simple(blocks),
    }
}

/// Greedy mesher. Requires unit-cube blocks and a grid within the dense
/// cap; merged quads cover runs of matching faces.
pub fn build_structure_greedy_cpu(blocks: &[Block]) -> Result<StructureMeshCPU, MeshError> {
    Ok(StructureMeshCPU {
        bbox: live_bounds(blocks),
        build: greedy::mesh_blocks_greedy(blocks)?,
    })
}

/// Runs the requested mesher. An oversized dense grid is recoverable and
/// falls back to the per-block path; a non-unit block is not.
pub fn build_structure_mesh_cpu(
    blocks: &[Block],
    mode: MesherMode,
) -> Result<StructureMeshCPU, MeshError> {
    match mode {
        MesherMode::Simple => Ok(build_structure_simple_cpu(blocks)),
        MesherMode::Greedy => match build_structure_greedy_cpu(blocks) {
            Err(MeshError::GridTooLarge { dims }) => {
                log::warn!(
                    "dense grid {}x{}x{} exceeds the {} cap; falling back to per-block meshing",
                    dims[0],
                    dims[1],
                    dims[2],
                    DENSE_AXIS_CAP
                );
                Ok(build_structure_simple_cpu(blocks))
            }
            other => other,
        },
    }
}
