use keel_blocks::{MaterialTier, Rgba};
use keel_geom::Vec3;

/// Growable CPU-side mesh buffers. `pos` and `norm` hold xyz triples, `col`
/// holds rgba bytes, `mat` one material tier byte, all per vertex; `idx` is
/// the triangle list. Vertices are never deduplicated.
#[derive(Default, Clone)]
pub struct MeshBuild {
    pub pos: Vec<f32>,
    pub norm: Vec<f32>,
    pub col: Vec<u8>,
    pub mat: Vec<u8>,
    pub idx: Vec<u32>,
}

impl MeshBuild {
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.pos.len() / 3
    }

    #[inline]
    pub fn index_count(&self) -> usize {
        self.idx.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.idx.len() / 3
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.idx.is_empty()
    }

    /// Clears all arrays but retains capacity for reuse across rebuilds.
    #[inline]
    pub fn clear_keep_capacity(&mut self) {
        self.pos.clear();
        self.norm.clear();
        self.col.clear();
        self.mat.clear();
        self.idx.clear();
    }

    /// Pre-reserve capacity for approximately `n_quads` quads worth of data.
    #[inline]
    pub fn reserve_quads(&mut self, n_quads: usize) {
        // 4 vertices per quad
        self.pos.reserve(n_quads * 4 * 3);
        self.norm.reserve(n_quads * 4 * 3);
        self.col.reserve(n_quads * 4 * 4);
        self.mat.reserve(n_quads * 4);
        self.idx.reserve(n_quads * 6);
    }

    #[inline]
    fn push_vertex(&mut self, v: Vec3, n: Vec3, rgba: Rgba, tier: MaterialTier) {
        self.pos.extend_from_slice(&[v.x, v.y, v.z]);
        self.norm.extend_from_slice(&[n.x, n.y, n.z]);
        self.col.extend_from_slice(&rgba);
        self.mat.push(tier.index() as u8);
    }

    /// Appends a quad as two triangles `(0,1,2)` and `(0,2,3)`. The vertex
    /// order is checked against `n` via cross product and flipped when it
    /// would wind clockwise, so output triangles are always CCW from outside.
    pub fn add_quad(
        &mut self,
        a: Vec3,
        b: Vec3,
        c: Vec3,
        d: Vec3,
        n: Vec3,
        rgba: Rgba,
        tier: MaterialTier,
    ) {
        let base = (self.pos.len() / 3) as u32;
        let mut vs = [a, b, c, d];
        let e1 = vs[1] - vs[0];
        let e2 = vs[2] - vs[0];
        if e1.cross(e2).dot(n) < 0.0 {
            vs.swap(1, 3);
        }
        for v in vs {
            self.push_vertex(v, n, rgba, tier);
        }
        self.idx
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    /// Appends one triangle with the same winding guarantee as [`add_quad`].
    ///
    /// [`add_quad`]: MeshBuild::add_quad
    pub fn add_tri(
        &mut self,
        a: Vec3,
        b: Vec3,
        c: Vec3,
        n: Vec3,
        rgba: Rgba,
        tier: MaterialTier,
    ) {
        let base = (self.pos.len() / 3) as u32;
        let mut vs = [a, b, c];
        if (vs[1] - vs[0]).cross(vs[2] - vs[0]).dot(n) < 0.0 {
            vs.swap(1, 2);
        }
        for v in vs {
            self.push_vertex(v, n, rgba, tier);
        }
        self.idx.extend_from_slice(&[base, base + 1, base + 2]);
    }

    /// Triangle whose normal is taken from its winding; `a,b,c` must already
    /// be CCW when seen from the outside.
    pub fn add_tri_flat(&mut self, a: Vec3, b: Vec3, c: Vec3, rgba: Rgba, tier: MaterialTier) {
        let n = (b - a).cross(c - a).normalized();
        self.add_tri(a, b, c, n, rgba, tier);
    }
}
