use keel_blocks::{Block, BlockKind, MaterialCatalog, MaterialTier};
use keel_geom::Vec3;
use keel_mesh_cpu::{
    MeshBuild, MeshError, MesherMode, build_structure_greedy_cpu, build_structure_mesh_cpu,
    build_structure_simple_cpu,
};

fn cat() -> MaterialCatalog {
    MaterialCatalog::default()
}

fn cube_at(x: f32, y: f32, z: f32) -> Block {
    Block::new(
        Vec3::new(x, y, z),
        Vec3::ONE,
        MaterialTier::Iron,
        BlockKind::Hull,
        &cat(),
    )
}

fn vtx(mb: &MeshBuild, i: usize) -> Vec3 {
    Vec3::new(mb.pos[3 * i], mb.pos[3 * i + 1], mb.pos[3 * i + 2])
}

fn tri_area_sum(mb: &MeshBuild) -> f32 {
    let mut total = 0.0;
    for t in mb.idx.chunks(3) {
        let (a, b, c) = (
            vtx(mb, t[0] as usize),
            vtx(mb, t[1] as usize),
            vtx(mb, t[2] as usize),
        );
        total += 0.5 * (b - a).cross(c - a).length();
    }
    total
}

fn check_mesh(mb: &MeshBuild) {
    assert_eq!(mb.idx.len() % 3, 0);
    assert_eq!(mb.pos.len(), mb.norm.len());
    let nverts = mb.vertex_count() as u32;
    for &i in &mb.idx {
        assert!(i < nverts);
    }
    for t in mb.idx.chunks(3) {
        let (a, b, c) = (
            vtx(mb, t[0] as usize),
            vtx(mb, t[1] as usize),
            vtx(mb, t[2] as usize),
        );
        let n = Vec3::new(
            mb.norm[3 * t[0] as usize],
            mb.norm[3 * t[0] as usize + 1],
            mb.norm[3 * t[0] as usize + 2],
        );
        assert!((b - a).cross(c - a).dot(n) > 0.0);
    }
}

#[test]
fn two_cubes_merge_to_six_quads() {
    let blocks = [cube_at(0.0, 0.0, 0.0), cube_at(1.0, 0.0, 0.0)];
    let mesh = build_structure_greedy_cpu(&blocks).unwrap();
    // Two end caps, merged top/bottom, merged front/back.
    assert_eq!(mesh.build.triangle_count(), 12);
    assert_eq!(mesh.build.vertex_count(), 24);
    assert_eq!(mesh.build.index_count(), 36);
    assert!((tri_area_sum(&mesh.build) - 10.0).abs() < 1e-3);
    check_mesh(&mesh.build);
}

#[test]
fn greedy_area_matches_per_block_on_a_slab() {
    let mut blocks = Vec::new();
    for x in 0..4 {
        for z in 0..4 {
            blocks.push(cube_at(x as f32, 0.0, z as f32));
        }
    }
    let greedy = build_structure_greedy_cpu(&blocks).unwrap();
    let simple = build_structure_simple_cpu(&blocks);
    let (ga, sa) = (tri_area_sum(&greedy.build), tri_area_sum(&simple.build));
    assert!((ga - sa).abs() < 1e-3, "greedy {} vs simple {}", ga, sa);
    assert!(greedy.build.triangle_count() <= simple.build.triangle_count());
    // Broad sides merge to one 4x4 quad each, rims to one 4x1 quad each.
    assert_eq!(greedy.build.triangle_count(), 12);
    check_mesh(&greedy.build);
}

#[test]
fn identical_input_builds_identical_buffers() {
    let mut blocks = Vec::new();
    for x in 0..3 {
        for y in 0..2 {
            blocks.push(cube_at(x as f32, y as f32, 0.0));
        }
    }
    let a = build_structure_greedy_cpu(&blocks).unwrap();
    let b = build_structure_greedy_cpu(&blocks).unwrap();
    assert_eq!(a.build.pos, b.build.pos);
    assert_eq!(a.build.norm, b.build.norm);
    assert_eq!(a.build.col, b.build.col);
    assert_eq!(a.build.mat, b.build.mat);
    assert_eq!(a.build.idx, b.build.idx);
}

#[test]
fn mismatched_tiers_do_not_merge_but_still_cull() {
    let mut blocks = [cube_at(0.0, 0.0, 0.0), cube_at(1.0, 0.0, 0.0)];
    blocks[1].tier = MaterialTier::Avorion;
    blocks[1].recalculate(&cat());
    let mesh = build_structure_greedy_cpu(&blocks).unwrap();
    // Same 10 exposed faces as the per-block path, none merged.
    assert_eq!(mesh.build.triangle_count(), 20);
    assert!((tri_area_sum(&mesh.build) - 10.0).abs() < 1e-3);
    check_mesh(&mesh.build);
}

#[test]
fn oversized_grid_errors_out() {
    let blocks = [cube_at(0.0, 0.0, 0.0), cube_at(1500.0, 0.0, 0.0)];
    match build_structure_greedy_cpu(&blocks) {
        Err(MeshError::GridTooLarge { dims }) => assert_eq!(dims, [1501, 1, 1]),
        other => panic!("expected GridTooLarge, got {:?}", other.map(|m| m.stats())),
    }
}

#[test]
fn extreme_coordinate_span_is_still_recoverable() {
    // Cell coordinates saturate at the i32 limits for positions this far
    // out; the span must still come back as GridTooLarge, not a panic.
    let blocks = [cube_at(-2.2e9, 0.0, 0.0), cube_at(2.2e9, 0.0, 0.0)];
    match build_structure_greedy_cpu(&blocks) {
        Err(MeshError::GridTooLarge { dims }) => {
            assert!(dims[0] > keel_mesh_cpu::DENSE_AXIS_CAP);
            assert_eq!(dims[1], 1);
        }
        other => panic!("expected GridTooLarge, got {:?}", other.map(|m| m.stats())),
    }
    // The dispatcher falls back like any other oversized grid.
    let fallback = build_structure_mesh_cpu(&blocks, MesherMode::Greedy).unwrap();
    let naive = build_structure_simple_cpu(&blocks);
    assert_eq!(fallback.build.pos, naive.build.pos);
    assert_eq!(fallback.build.idx, naive.build.idx);
}

#[test]
fn oversized_grid_falls_back_to_per_block() {
    let blocks = [cube_at(0.0, 0.0, 0.0), cube_at(1500.0, 0.0, 0.0)];
    let fallback = build_structure_mesh_cpu(&blocks, MesherMode::Greedy).unwrap();
    let naive = build_structure_simple_cpu(&blocks);
    assert_eq!(fallback.build.pos, naive.build.pos);
    assert_eq!(fallback.build.idx, naive.build.idx);
    assert_eq!(fallback.bbox, naive.bbox);
}

#[test]
fn non_unit_blocks_fail_fast() {
    let stretched = Block::new(
        Vec3::ZERO,
        Vec3::new(2.0, 1.0, 1.0),
        MaterialTier::Iron,
        BlockKind::Hull,
        &cat(),
    );
    let blocks = [stretched, cube_at(3.0, 0.0, 0.0)];
    match build_structure_greedy_cpu(&blocks) {
        Err(MeshError::NonUniformBlock { index, size }) => {
            assert_eq!(index, 0);
            assert_eq!(size, (2.0, 1.0, 1.0));
        }
        other => panic!("expected NonUniformBlock, got {:?}", other.map(|m| m.stats())),
    }
    // The dispatcher does not recover from this one.
    assert!(build_structure_mesh_cpu(&blocks, MesherMode::Greedy).is_err());
    // The per-block path does not care.
    assert!(
        build_structure_mesh_cpu(&blocks, MesherMode::Simple)
            .unwrap()
            .build
            .vertex_count()
            > 0
    );
}

#[test]
fn destroyed_blocks_never_reach_the_grid() {
    let mut stretched = Block::new(
        Vec3::new(10.0, 0.0, 0.0),
        Vec3::new(4.0, 4.0, 4.0),
        MaterialTier::Iron,
        BlockKind::Hull,
        &cat(),
    );
    stretched.destroyed = true;
    let blocks = [cube_at(0.0, 0.0, 0.0), stretched];
    // A destroyed non-unit block must not trip the precondition.
    let mesh = build_structure_greedy_cpu(&blocks).unwrap();
    assert_eq!(mesh.build.triangle_count(), 12);
    assert_eq!(mesh.bbox.max.x, 0.5);
}

#[test]
fn hole_left_by_a_destroyed_block_matches_per_block() {
    let mut blocks = vec![
        cube_at(0.0, 0.0, 0.0),
        cube_at(1.0, 0.0, 0.0),
        cube_at(2.0, 0.0, 0.0),
    ];
    blocks[1].destroyed = true;
    let greedy = build_structure_greedy_cpu(&blocks).unwrap();
    let simple = build_structure_simple_cpu(&blocks);
    // Two isolated cubes either way.
    assert!((tri_area_sum(&greedy.build) - 12.0).abs() < 1e-3);
    assert!((tri_area_sum(&simple.build) - 12.0).abs() < 1e-3);
    assert_eq!(greedy.bbox, simple.bbox);
}

#[test]
fn empty_input_is_ok_and_empty() {
    let mesh = build_structure_greedy_cpu(&[]).unwrap();
    assert!(mesh.build.is_empty());
    assert_eq!(mesh.stats().vertices, 0);
}

#[test]
fn random_pattern_matches_per_block_area() {
    // Deterministic pseudo-random occupancy over a 6x6x6 region.
    let n = 6;
    let mut blocks = Vec::new();
    for i in 0..(n * n * n) {
        let r = (i as u64 * 1664525 + 1013904223) & 0xFFFF_FFFF;
        if r & 1 == 0 {
            continue;
        }
        let (x, y, z) = (i % n, (i / n) % n, i / (n * n));
        blocks.push(cube_at(x as f32, y as f32, z as f32));
    }
    assert!(!blocks.is_empty());
    let greedy = build_structure_greedy_cpu(&blocks).unwrap();
    let simple = build_structure_simple_cpu(&blocks);
    let (ga, sa) = (tri_area_sum(&greedy.build), tri_area_sum(&simple.build));
    assert!((ga - sa).abs() < 1e-2, "greedy {} vs simple {}", ga, sa);
    assert!(greedy.build.triangle_count() <= simple.build.triangle_count());
    check_mesh(&greedy.build);
    check_mesh(&simple.build);
}
