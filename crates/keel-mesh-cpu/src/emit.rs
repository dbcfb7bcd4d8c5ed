//! Per-block geometry emitters for cubes and the shaped block variants.

use keel_blocks::{Block, BlockShape, MaterialTier, Orientation, Rgba};
use keel_geom::{Aabb, Vec3};

use crate::face::Face;
use crate::mesh_build::MeshBuild;

/// Corners of a box, indexed so that bit 0 selects min y, bit 1 selects
/// max x and bit 2 selects max z:
///
/// ```text
///   0:(x0,y1,z0)  1:(x0,y0,z0)  2:(x1,y1,z0)  3:(x1,y0,z0)
///   4:(x0,y1,z1)  5:(x0,y0,z1)  6:(x1,y1,z1)  7:(x1,y0,z1)
/// ```
#[inline]
pub fn box_corners(bb: Aabb) -> [Vec3; 8] {
    let (lo, hi) = (bb.min, bb.max);
    [
        Vec3::new(lo.x, hi.y, lo.z),
        Vec3::new(lo.x, lo.y, lo.z),
        Vec3::new(hi.x, hi.y, lo.z),
        Vec3::new(hi.x, lo.y, lo.z),
        Vec3::new(lo.x, hi.y, hi.z),
        Vec3::new(lo.x, lo.y, hi.z),
        Vec3::new(hi.x, hi.y, hi.z),
        Vec3::new(hi.x, lo.y, hi.z),
    ]
}

/// Corner indices per face in [`Face`] index order, CCW seen from outside.
pub const BOX_FACES: [[usize; 4]; 6] = [
    [0, 4, 6, 2], // PosY
    [1, 3, 7, 5], // NegY
    [7, 3, 2, 6], // PosX
    [1, 5, 4, 0], // NegX
    [5, 7, 6, 4], // PosZ
    [3, 1, 0, 2], // NegZ
];

/// One axis-aligned face of `bb` as a single quad.
pub fn emit_box_face(mb: &mut MeshBuild, bb: Aabb, face: Face, rgba: Rgba, tier: MaterialTier) {
    let c = box_corners(bb);
    let [i0, i1, i2, i3] = BOX_FACES[face.index()];
    mb.add_quad(c[i0], c[i1], c[i2], c[i3], face.normal(), rgba, tier);
}

/// All six faces of `bb`.
pub fn emit_box(mb: &mut MeshBuild, bb: Aabb, rgba: Rgba, tier: MaterialTier) {
    for face in Face::ALL {
        emit_box_face(mb, bb, face, rgba, tier);
    }
}

/// Shaped blocks bypass neighbor culling and always emit their full hull.
pub fn emit_shaped_block(mb: &mut MeshBuild, b: &Block) {
    let bb = b.aabb();
    match b.shape {
        BlockShape::Cube => emit_box(mb, bb, b.color, b.tier),
        BlockShape::Wedge => emit_wedge(mb, bb, b.orientation, b.color, b.tier),
        BlockShape::Corner => {
            if !emit_corner(mb, bb, b.orientation, b.color, b.tier) {
                log::debug!("corner has no {:?} form; emitting a cube", b.orientation);
                emit_box(mb, bb, b.color, b.tier);
            }
        }
        BlockShape::InnerCorner => {
            emit_box(mb, bb, b.color, b.tier);
            if !emit_inner_corner_cap(mb, bb, b.orientation, b.color, b.tier) {
                log::debug!("inner corner has no {:?} cap; cube only", b.orientation);
            }
        }
        BlockShape::Tetrahedron => emit_tetrahedron(mb, bb, b.orientation, b.color, b.tier),
        BlockShape::HalfBlock => emit_box(mb, half_box(bb, b.orientation), b.color, b.tier),
    }
}

/// Ramp: a full-height face on the thick side, a rectangular floor, a
/// sloped quad and two triangular cheeks.
fn emit_wedge(mb: &mut MeshBuild, bb: Aabb, o: Orientation, rgba: Rgba, tier: MaterialTier) {
    let c = box_corners(bb);
    let s = bb.extent();
    emit_box_face(mb, bb, Face::NegY, rgba, tier);
    match o {
        Orientation::PosX => {
            emit_box_face(mb, bb, Face::PosX, rgba, tier);
            let n = Vec3::new(-s.y, s.x, 0.0).normalized();
            mb.add_quad(c[1], c[5], c[6], c[2], n, rgba, tier);
            mb.add_tri(c[3], c[1], c[2], Face::NegZ.normal(), rgba, tier);
            mb.add_tri(c[5], c[7], c[6], Face::PosZ.normal(), rgba, tier);
        }
        Orientation::NegX => {
            emit_box_face(mb, bb, Face::NegX, rgba, tier);
            let n = Vec3::new(s.y, s.x, 0.0).normalized();
            mb.add_quad(c[7], c[3], c[0], c[4], n, rgba, tier);
            mb.add_tri(c[3], c[1], c[0], Face::NegZ.normal(), rgba, tier);
            mb.add_tri(c[5], c[7], c[4], Face::PosZ.normal(), rgba, tier);
        }
        Orientation::NegZ => {
            emit_box_face(mb, bb, Face::NegZ, rgba, tier);
            let n = Vec3::new(0.0, s.z, s.y).normalized();
            mb.add_quad(c[5], c[7], c[2], c[0], n, rgba, tier);
            mb.add_tri(c[1], c[5], c[0], Face::NegX.normal(), rgba, tier);
            mb.add_tri(c[7], c[3], c[2], Face::PosX.normal(), rgba, tier);
        }
        // A ramp has no vertical facing; treat PosY/NegY like PosZ.
        _ => {
            emit_box_face(mb, bb, Face::PosZ, rgba, tier);
            let n = Vec3::new(0.0, s.z, -s.y).normalized();
            mb.add_quad(c[3], c[1], c[4], c[6], n, rgba, tier);
            mb.add_tri(c[1], c[5], c[4], Face::NegX.normal(), rgba, tier);
            mb.add_tri(c[7], c[3], c[6], Face::PosX.normal(), rgba, tier);
        }
    }
}

/// Tetrahedral corner piece: a bottom triangle, two vertical side
/// triangles and a slanted hypotenuse. The orientation picks which
/// horizontal corner of the box the solid occupies. Returns `false` for
/// vertical orientations, which have no corner form.
fn emit_corner(
    mb: &mut MeshBuild,
    bb: Aabb,
    o: Orientation,
    rgba: Rgba,
    tier: MaterialTier,
) -> bool {
    let c = box_corners(bb);
    let s = bb.extent();
    // (corner, arm_a, arm_b, top, side_a, side_b, hypotenuse normal);
    // arm_a lies in side_a's plane and arm_b in side_b's.
    let (corner, arm_a, arm_b, top, side_a, side_b, hyp_n) = match o {
        Orientation::PosX => (
            c[7],
            c[5],
            c[3],
            c[6],
            Face::PosZ,
            Face::PosX,
            Vec3::new(-s.y * s.z, s.x * s.z, -s.x * s.y),
        ),
        Orientation::PosZ => (
            c[5],
            c[7],
            c[1],
            c[4],
            Face::PosZ,
            Face::NegX,
            Vec3::new(s.y * s.z, s.x * s.z, -s.x * s.y),
        ),
        Orientation::NegX => (
            c[1],
            c[3],
            c[5],
            c[0],
            Face::NegZ,
            Face::NegX,
            Vec3::new(s.y * s.z, s.x * s.z, s.x * s.y),
        ),
        Orientation::NegZ => (
            c[3],
            c[1],
            c[7],
            c[2],
            Face::NegZ,
            Face::PosX,
            Vec3::new(-s.y * s.z, s.x * s.z, s.x * s.y),
        ),
        _ => return false,
    };
    mb.add_tri(corner, arm_a, arm_b, Face::NegY.normal(), rgba, tier);
    mb.add_tri(corner, arm_a, top, side_a.normal(), rgba, tier);
    mb.add_tri(corner, arm_b, top, side_b.normal(), rgba, tier);
    mb.add_tri(arm_a, arm_b, top, hyp_n.normalized(), rgba, tier);
    true
}

/// Diagonal plate across the top corner opposite the filled one. The cube
/// under it is emitted by the caller; this only adds the cap. Returns
/// `false` for vertical orientations.
fn emit_inner_corner_cap(
    mb: &mut MeshBuild,
    bb: Aabb,
    o: Orientation,
    rgba: Rgba,
    tier: MaterialTier,
) -> bool {
    let c = box_corners(bb);
    let s = bb.extent();
    let (a, b, t, n) = match o {
        Orientation::PosX => (c[7], c[2], c[4], Vec3::new(s.y * s.z, s.x * s.z, s.x * s.y)),
        Orientation::NegX => (
            c[1],
            c[2],
            c[4],
            Vec3::new(-s.y * s.z, s.x * s.z, -s.x * s.y),
        ),
        Orientation::PosZ => (
            c[5],
            c[0],
            c[6],
            Vec3::new(-s.y * s.z, s.x * s.z, s.x * s.y),
        ),
        Orientation::NegZ => (c[3], c[0], c[6], Vec3::new(s.y * s.z, s.x * s.z, -s.x * s.y)),
        _ => return false,
    };
    mb.add_tri(a, b, t, n.normalized(), rgba, tier);
    true
}

/// Pyramid over the face opposite the orientation, apex at the center of
/// the oriented face.
fn emit_tetrahedron(mb: &mut MeshBuild, bb: Aabb, o: Orientation, rgba: Rgba, tier: MaterialTier) {
    let c = box_corners(bb);
    let base = face_of(o).opposite();
    emit_box_face(mb, bb, base, rgba, tier);
    let u = face_of(o).normal();
    let s = bb.extent();
    let apex = bb.center() + Vec3::new(u.x * s.x, u.y * s.y, u.z * s.z) * 0.5;
    let q = BOX_FACES[base.index()].map(|i| c[i]);
    // Base quad is CCW from outside the base, so reversed edges face the apex.
    for k in 0..4 {
        mb.add_tri_flat(q[(k + 1) % 4], q[k], apex, rgba, tier);
    }
}

/// Lower half of the box, or the upper half when oriented `PosY`.
fn half_box(bb: Aabb, o: Orientation) -> Aabb {
    let mid = (bb.min.y + bb.max.y) * 0.5;
    let mut out = bb;
    match o {
        Orientation::PosY => out.min.y = mid,
        _ => out.max.y = mid,
    }
    out
}

#[inline]
fn face_of(o: Orientation) -> Face {
    match o {
        Orientation::PosX => Face::PosX,
        Orientation::NegX => Face::NegX,
        Orientation::PosY => Face::PosY,
        Orientation::NegY => Face::NegY,
        Orientation::PosZ => Face::PosZ,
        Orientation::NegZ => Face::NegZ,
    }
}
