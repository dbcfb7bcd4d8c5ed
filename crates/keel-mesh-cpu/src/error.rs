use thiserror::Error;

use crate::grid::DENSE_AXIS_CAP;

/// Failure modes of the greedy path. `GridTooLarge` is recoverable by
/// rerunning on the per-block path; `NonUniformBlock` is a caller bug and
/// fails fast with no partial mesh.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    #[error("dense grid {dims:?} exceeds the per-axis cap of {cap} cells", cap = DENSE_AXIS_CAP)]
    GridTooLarge { dims: [usize; 3] },

    #[error("block {index} has size {size:?}; greedy meshing requires unit cubes")]
    NonUniformBlock { index: usize, size: (f32, f32, f32) },
}
