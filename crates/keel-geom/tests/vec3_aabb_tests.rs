use keel_geom::{Aabb, Vec3};

fn approx_eq(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}

fn vec3_approx_eq(a: Vec3, b: Vec3, eps: f32) -> bool {
    approx_eq(a.x, b.x, eps) && approx_eq(a.y, b.y, eps) && approx_eq(a.z, b.z, eps)
}

#[test]
fn vec3_constants() {
    assert!(vec3_approx_eq(Vec3::ZERO, Vec3::new(0.0, 0.0, 0.0), 1e-6));
    assert!(vec3_approx_eq(Vec3::ONE, Vec3::new(1.0, 1.0, 1.0), 1e-6));
    assert!(vec3_approx_eq(Vec3::UP, Vec3::new(0.0, 1.0, 0.0), 1e-6));
}

#[test]
fn vec3_array_roundtrip() {
    let v = Vec3::new(1.5, -2.0, 0.25);
    assert_eq!(v.to_array(), [1.5, -2.0, 0.25]);
    assert!(vec3_approx_eq(Vec3::from_array(v.to_array()), v, 1e-6));
}

#[test]
fn vec3_ops() {
    let a = Vec3::new(1.0, 2.0, 3.0);
    let b = Vec3::new(-4.0, 5.0, -6.0);
    assert!(vec3_approx_eq(a + b, Vec3::new(-3.0, 7.0, -3.0), 1e-6));
    assert!(vec3_approx_eq((a + b) - a, b, 1e-6));

    let mut v = Vec3::new(1.0, 1.0, 1.0);
    v += Vec3::new(2.0, 3.0, 4.0);
    v -= Vec3::new(1.0, 2.0, 3.0);
    assert!(vec3_approx_eq(v, Vec3::new(2.0, 2.0, 2.0), 1e-6));

    let s = Vec3::new(1.5, -2.0, 4.0);
    assert!(vec3_approx_eq(s * 2.0, Vec3::new(3.0, -4.0, 8.0), 1e-6));
    assert!(vec3_approx_eq((s * 2.0) / 2.0, s, 1e-6));
}

#[test]
fn vec3_dot_length_normalized() {
    let v = Vec3::new(3.0, 4.0, 0.0);
    assert!(approx_eq(v.dot(v), 25.0, 1e-6));
    assert!(approx_eq(v.length(), 5.0, 1e-6));
    assert!(vec3_approx_eq(v.normalized(), Vec3::new(0.6, 0.8, 0.0), 1e-6));

    // Zero vector normalization should be a no-op (not NaN)
    assert!(vec3_approx_eq(Vec3::ZERO.normalized(), Vec3::ZERO, 1e-6));
}

#[test]
fn vec3_cross_basis() {
    let i = Vec3::new(1.0, 0.0, 0.0);
    let j = Vec3::new(0.0, 1.0, 0.0);
    let k = Vec3::new(0.0, 0.0, 1.0);
    assert!(vec3_approx_eq(i.cross(j), k, 1e-6));
    assert!(vec3_approx_eq(j.cross(k), i, 1e-6));
    assert!(vec3_approx_eq(k.cross(i), j, 1e-6));

    let a = Vec3::new(2.0, -1.0, 3.0);
    let b = Vec3::new(-4.0, 0.5, 1.0);
    let c = a.cross(b);
    assert!(approx_eq(a.dot(c), 0.0, 1e-6));
    assert!(approx_eq(b.dot(c), 0.0, 1e-6));
}

#[test]
fn vec3_componentwise_min_max() {
    let a = Vec3::new(1.0, 5.0, -2.0);
    let b = Vec3::new(3.0, -1.0, 0.0);
    assert!(vec3_approx_eq(a.min(b), Vec3::new(1.0, -1.0, -2.0), 1e-6));
    assert!(vec3_approx_eq(a.max(b), Vec3::new(3.0, 5.0, 0.0), 1e-6));
}

#[test]
fn aabb_from_center_size() {
    let b = Aabb::from_center_size(Vec3::new(1.0, 2.0, 3.0), Vec3::new(2.0, 4.0, 6.0));
    assert!(vec3_approx_eq(b.min, Vec3::new(0.0, 0.0, 0.0), 1e-6));
    assert!(vec3_approx_eq(b.max, Vec3::new(2.0, 4.0, 6.0), 1e-6));
    assert!(vec3_approx_eq(b.center(), Vec3::new(1.0, 2.0, 3.0), 1e-6));
    assert!(vec3_approx_eq(b.extent(), Vec3::new(2.0, 4.0, 6.0), 1e-6));
}

#[test]
fn aabb_union_contains_both() {
    let a = Aabb::new(Vec3::new(-1.0, 0.0, 1.0), Vec3::new(2.0, 3.0, 4.0));
    let b = Aabb::new(Vec3::new(0.0, -2.0, 2.0), Vec3::new(1.0, 1.0, 9.0));
    let u = a.union(b);
    assert!(vec3_approx_eq(u.min, Vec3::new(-1.0, -2.0, 1.0), 1e-6));
    assert!(vec3_approx_eq(u.max, Vec3::new(2.0, 3.0, 9.0), 1e-6));
}

#[test]
fn aabb_intersects_overlap_and_touch() {
    let a = Aabb::from_center_size(Vec3::ZERO, Vec3::ONE);
    let b = Aabb::from_center_size(Vec3::new(0.5, 0.0, 0.0), Vec3::ONE);
    let touching = Aabb::from_center_size(Vec3::new(1.0, 0.0, 0.0), Vec3::ONE);
    let apart = Aabb::from_center_size(Vec3::new(2.5, 0.0, 0.0), Vec3::ONE);
    assert!(a.intersects(b));
    assert!(b.intersects(a));
    // Shared face counts as contact
    assert!(a.intersects(touching));
    assert!(!a.intersects(apart));
}
