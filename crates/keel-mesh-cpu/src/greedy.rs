//! Greedy face merging over a dense unit-cube grid.
//!
//! Six sweeps (three axes, two directions). Each slice gets a 2-D exposure
//! mask; runs of matching faces widen along `u`, then grow row by row along
//! `v`, and emit one quad per merged rectangle.

use keel_blocks::{Block, BlockKind, MaterialTier, Rgba};
use keel_geom::Vec3;

use crate::error::MeshError;
use crate::face::{Axis, Face};
use crate::grid::{DenseGrid, VoxelGrid};
use crate::mesh_build::MeshBuild;

/// Tolerance on the unit-size precondition.
pub const UNIT_SIZE_EPS: f32 = 1e-3;

/// Faces merge only when every field matches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct FaceKey {
    color: Rgba,
    tier: MaterialTier,
    kind: BlockKind,
}

impl FaceKey {
    fn of(b: &Block) -> Self {
        Self {
            color: b.color,
            tier: b.tier,
            kind: b.kind,
        }
    }
}

/// One block per grid cell; anything that is not a unit cube is rejected
/// before the grid is built. Destroyed blocks are exempt since they never
/// enter the grid.
fn ensure_unit_blocks(blocks: &[Block]) -> Result<(), MeshError> {
    for (index, b) in blocks.iter().enumerate() {
        if b.destroyed {
            continue;
        }
        let s = b.size;
        if (s.x - 1.0).abs() > UNIT_SIZE_EPS
            || (s.y - 1.0).abs() > UNIT_SIZE_EPS
            || (s.z - 1.0).abs() > UNIT_SIZE_EPS
        {
            return Err(MeshError::NonUniformBlock {
                index,
                size: (s.x, s.y, s.z),
            });
        }
    }
    Ok(())
}

/// Merged-surface mesher. Shaped blocks occupy their cell and mesh as full
/// cubes on this path; the per-block mesher is the one that draws them.
pub(crate) fn mesh_blocks_greedy(blocks: &[Block]) -> Result<MeshBuild, MeshError> {
    ensure_unit_blocks(blocks)?;
    let mut mb = MeshBuild::default();
    let Some(grid) = VoxelGrid::from_blocks(blocks) else {
        return Ok(mb);
    };
    let dense = DenseGrid::build(&grid)?;
    if dense.is_empty() {
        return Ok(mb);
    }
    for axis in Axis::ALL {
        for positive in [true, false] {
            sweep_axis(&mut mb, &dense, axis, positive);
        }
    }
    Ok(mb)
}

fn sweep_axis(mb: &mut MeshBuild, dense: &DenseGrid<'_>, axis: Axis, positive: bool) {
    let a = axis.index();
    let u = (a + 1) % 3;
    let v = (a + 2) % 3;
    let dims = dense.dims();
    let (du, dv) = (dims[u], dims[v]);
    let step: i32 = if positive { 1 } else { -1 };
    // One allocation per sweep; refilled for every slice.
    let mut mask: Vec<Option<FaceKey>> = vec![None; du * dv];
    for slice in 0..dims[a] {
        for ui in 0..du {
            for vi in 0..dv {
                let mut c = [0i32; 3];
                c[a] = slice as i32;
                c[u] = ui as i32;
                c[v] = vi as i32;
                let here = match dense.block_at_local(c) {
                    Some(b) => b,
                    None => {
                        mask[ui * dv + vi] = None;
                        continue;
                    }
                };
                c[a] += step;
                // Occupancy hides the face regardless of the neighbor's key.
                mask[ui * dv + vi] = if dense.block_at_local(c).is_some() {
                    None
                } else {
                    Some(FaceKey::of(here))
                };
            }
        }
        for ui in 0..du {
            for vi in 0..dv {
                let Some(key) = mask[ui * dv + vi] else {
                    continue;
                };
                let mut w = 1;
                while ui + w < du && mask[(ui + w) * dv + vi] == Some(key) {
                    w += 1;
                }
                let mut h = 1;
                'grow: while vi + h < dv {
                    for k in 0..w {
                        if mask[(ui + k) * dv + vi + h] != Some(key) {
                            break 'grow;
                        }
                    }
                    h += 1;
                }
                for cu in ui..ui + w {
                    for cv in vi..vi + h {
                        mask[cu * dv + cv] = None;
                    }
                }
                emit_rect(mb, dense, axis, positive, slice, (ui, vi), (w, h), key);
            }
        }
    }
}

/// One merged quad covering cells `[ui, ui+w) x [vi, vi+h)` of the slice.
/// Cell centers sit on integers, so face corners land on half-integers.
#[allow(clippy::too_many_arguments)]
fn emit_rect(
    mb: &mut MeshBuild,
    dense: &DenseGrid<'_>,
    axis: Axis,
    positive: bool,
    slice: usize,
    (ui, vi): (usize, usize),
    (w, h): (usize, usize),
    key: FaceKey,
) {
    let a = axis.index();
    let u = (a + 1) % 3;
    let v = (a + 2) % 3;
    let min = dense.min_cell();
    let dir = if positive { 1.0 } else { -1.0 };
    let plane = (min[a] + slice as i32) as f32 + 0.5 * dir;
    let u0 = (min[u] + ui as i32) as f32 - 0.5;
    let v0 = (min[v] + vi as i32) as f32 - 0.5;
    let u1 = u0 + w as f32;
    let v1 = v0 + h as f32;
    let corner = |uc: f32, vc: f32| {
        let mut p = [0.0f32; 3];
        p[a] = plane;
        p[u] = uc;
        p[v] = vc;
        Vec3::from_array(p)
    };
    mb.add_quad(
        corner(u0, v0),
        corner(u1, v0),
        corner(u1, v1),
        corner(u0, v1),
        Face::from_axis_dir(axis, positive).normal(),
        key.color,
        key.tier,
    );
}
