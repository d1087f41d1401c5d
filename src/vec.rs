// vector/matrix primitives
//
// Thin aliases over `nalgebra` types, in the style the wider gchemol-rs
// ecosystem uses `vecfx`: short names for the 3-vector/3x3-matrix types that
// show up everywhere in this crate, plus a couple of free functions that
// don't belong on `Lattice` or `Plane`.

use nalgebra::{Matrix3, Vector3};

/// Cartesian 3-vector.
pub type Vec3 = Vector3<f64>;

/// 3x3 matrix, columns are basis vectors unless noted otherwise.
pub type Mat3 = Matrix3<f64>;

/// Solve `[a; b; c] * x = (da, db, dc)` by cofactor inversion, returning
/// `None` if the three normals are (near) coplanar.
///
/// This is the O(1) linear solve at the core of triple-plane intersection
/// (spec §4.3 step 1); it is split out so `polyhedron::halfspace_intersection`
/// reads as "for each triple, solve, then test membership".
pub(crate) fn solve3x3(a: Vec3, b: Vec3, c: Vec3, rhs: Vec3, eps: f64) -> Option<Vec3> {
    #[rustfmt::skip]
    let m = Mat3::new(
        a.x, a.y, a.z,
        b.x, b.y, b.z,
        c.x, c.y, c.z,
    );
    let det = m.determinant();
    if det.abs() < eps {
        return None;
    }
    m.try_inverse().map(|inv| inv * rhs)
}

/// Pick an orthonormal basis (u, v) for the plane with unit normal `n`, with
/// `u = n x e` for `e` chosen to avoid near-parallel degeneracy, and `v = n x
/// u`. Used to project 3D face vertices into a local 2D frame.
pub(crate) fn orthonormal_basis(n: Vec3) -> (Vec3, Vec3) {
    let e = if n.x.abs() < 0.9 {
        Vec3::new(1.0, 0.0, 0.0)
    } else {
        Vec3::new(0.0, 1.0, 0.0)
    };
    let mut u = n.cross(&e);
    let mut len = u.norm();
    if len == 0.0 {
        u = n.cross(&Vec3::new(0.0, 0.0, 1.0));
        len = u.norm();
    }
    let u = u / len;
    let v = n.cross(&u);
    (u, v)
}
