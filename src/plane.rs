// plane
//
// Oriented half-space plane `n . x <= d`, plus tagging for provenance
// (component D). A TaggedPlane's tag encodes where a face in the resulting
// polyhedron came from: a non-negative tag is a row index into the
// NeighborTable; negative sentinels mark box walls and cap directions (see
// `tessellate`).

use crate::vec::Vec3;

/// Sentinel tag base for the six box-wall planes (spec §4.4): wall k uses
/// `WALL_TAG_BASE - k` for `k` in `0..6`.
pub const WALL_TAG_BASE: i64 = -1000;

/// Sentinel tag base for cap-direction planes: direction k uses
/// `CAP_TAG_BASE - k`.
pub const CAP_TAG_BASE: i64 = -3000;

/// Unit-normal plane `{x : n . x <= d}`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub n: Vec3,
    pub d: f64,
}

impl Plane {
    /// Signed distance from `x` to the plane; `<= 0` means inside the
    /// half-space.
    pub fn signed_distance(&self, x: Vec3) -> f64 {
        self.n.dot(&x) - self.d
    }

    /// Build the half-space `{x : n . x <= n . p}` through point `p` with
    /// (not necessarily unit) normal `n`.
    pub fn from_point_normal(p: Vec3, n: Vec3) -> Self {
        let len = n.norm();
        let nh = if len > 0.0 { n / len } else { Vec3::new(1.0, 0.0, 0.0) };
        Plane { n: nh, d: nh.dot(&p) }
    }
}

/// A `Plane` together with an integer provenance tag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaggedPlane {
    pub plane: Plane,
    pub tag: i64,
}
