// lattice
//
// Triclinic cell from (a, b, c, alpha, beta, gamma); fractional <-> cartesian
// conversion; minimum-image displacement under a per-axis periodicity mask.
// Adapted from the teacher crate's `Lattice` (gchemol-lattice), generalized
// from "always fully periodic" to the mask-aware minimum image convention
// this spec requires (component B).

use serde::{Deserialize, Serialize};

use crate::vec::{Mat3, Vec3};

/// Triclinic periodic cell.
///
/// Invariant: `matrix` is right-handed with `det(matrix) > 0`, and
/// `inv_matrix * matrix == I` within floating-point tolerance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Lattice {
    matrix: Mat3,
    inv_matrix: Mat3,
}

impl Default for Lattice {
    fn default() -> Self {
        let matrix = Mat3::identity();
        Lattice {
            matrix,
            inv_matrix: matrix,
        }
    }
}

impl Lattice {
    /// Construct from three lattice vectors (columns of the cell matrix).
    pub fn new(vectors: [Vec3; 3]) -> Self {
        let matrix = Mat3::from_columns(&vectors);
        Self::from_matrix(matrix)
    }

    /// Construct from the raw 3x3 cell matrix.
    pub fn from_matrix(matrix: Mat3) -> Self {
        let inv_matrix = matrix.try_inverse().expect("singular lattice matrix");
        Lattice { matrix, inv_matrix }
    }

    /// Construct from conventional lattice parameters (lengths in the same
    /// unit as positions, angles in degrees). Builds `A` in the canonical
    /// orientation: `a` along x, `b` in the xy-plane, `c` derived from the
    /// angle constraints (spec §4.1).
    pub fn from_params(a: f64, b: f64, c: f64, alpha: f64, beta: f64, gamma: f64) -> Self {
        let alpha = alpha.to_radians();
        let beta = beta.to_radians();
        let gamma = gamma.to_radians();

        let ca = alpha.cos();
        let cb = beta.cos();
        let cg = gamma.cos();
        let sg = gamma.sin();

        let a1 = Vec3::new(a, 0.0, 0.0);
        let a2 = Vec3::new(b * cg, b * sg, 0.0);
        let cx = c * cb;
        let cy = c * (ca - cb * cg) / sg;
        let cz = (c * c - cx * cx - cy * cy).max(0.0).sqrt();
        let a3 = Vec3::new(cx, cy, cz);

        Lattice::new([a1, a2, a3])
    }

    pub fn matrix(&self) -> Mat3 {
        self.matrix
    }

    pub fn inv_matrix(&self) -> Mat3 {
        self.inv_matrix
    }

    pub fn vector_a(&self) -> Vec3 {
        self.matrix.column(0).into()
    }

    pub fn vector_b(&self) -> Vec3 {
        self.matrix.column(1).into()
    }

    pub fn vector_c(&self) -> Vec3 {
        self.matrix.column(2).into()
    }

    pub fn vectors(&self) -> [Vec3; 3] {
        [self.vector_a(), self.vector_b(), self.vector_c()]
    }

    pub fn lengths(&self) -> [f64; 3] {
        [
            self.vector_a().norm(),
            self.vector_b().norm(),
            self.vector_c().norm(),
        ]
    }

    pub fn angles(&self) -> [f64; 3] {
        let (va, vb, vc) = (self.vector_a(), self.vector_b(), self.vector_c());
        [
            vb.angle(&vc).to_degrees(),
            va.angle(&vc).to_degrees(),
            va.angle(&vb).to_degrees(),
        ]
    }

    /// Volume of the unit cell, `det(A)`.
    pub fn volume(&self) -> f64 {
        let (va, vb, vc) = (self.vector_a(), self.vector_b(), self.vector_c());
        va.dot(&vb.cross(&vc))
    }

    pub fn is_orthorhombic(&self) -> bool {
        let m = self.matrix;
        let diag = Mat3::from_diagonal(&m.diagonal());
        m == diag
    }

    /// Cartesian coordinates of fractional coordinates `f`.
    pub fn to_cart(&self, f: Vec3) -> Vec3 {
        self.matrix * f
    }

    /// Fractional coordinates of cartesian coordinates `r`.
    pub fn to_frac(&self, r: Vec3) -> Vec3 {
        self.inv_matrix * r
    }

    /// Wrap fractional coordinates into `[0, 1)` on periodic axes, leaving
    /// non-periodic axes untouched.
    pub fn wrap_frac(&self, f: Vec3, periodic: [bool; 3]) -> Vec3 {
        Vec3::new(
            if periodic[0] { f.x - f.x.floor() } else { f.x },
            if periodic[1] { f.y - f.y.floor() } else { f.y },
            if periodic[2] { f.z - f.z.floor() } else { f.z },
        )
    }

    /// Minimum-image displacement from `ri` to `rj` under `periodic`: the
    /// cartesian vector and the integer image triple applied to `rj` (spec
    /// §4.1). On non-periodic axes the image component is always 0.
    pub fn min_image_disp(&self, ri: Vec3, rj: Vec3, periodic: [bool; 3]) -> (Vec3, [i32; 3]) {
        let fi = self.to_frac(ri);
        let fj = self.to_frac(rj);
        let mut df = fj - fi;
        let mut image = [0i32; 3];
        for k in 0..3 {
            if periodic[k] {
                let s = df[k].round();
                df[k] -= s;
                image[k] = -s as i32;
            }
        }
        (self.to_cart(df), image)
    }
}
