// polyhedron + half-space intersector
//
// Triple-intersection convex-hull builder, face attributes, pruning, volume
// and centroid (component F). This is the hard part of the engine: §4.3 of
// the spec, implemented in three steps (candidate vertices, dedup, face
// assembly) exactly as described, followed by the two independent
// volume/centroid computations kept as a cross-check (spec §4.3 "An
// alternative face-based volume ... is retained for cross-validation").

use log::trace;

use crate::config::Config;
use crate::plane::{Plane, TaggedPlane};
use crate::vec::{orthonormal_basis, solve3x3, Vec3};

/// A convex polyhedron built from half-space intersection.
///
/// Invariants (spec §3): every vertex lies within `2 * eps_in` of every
/// supporting half-space; each face is planar within `2 * eps_in` of its
/// originating plane; face loops are CCW around the face's outward normal;
/// faces with area below `min_face_area` are pruned before this value is
/// returned.
#[derive(Debug, Clone, Default)]
pub struct Polyhedron {
    pub vertices: Vec<Vec3>,
    /// Each face is a CCW cycle of vertex indices, length >= 3.
    pub faces: Vec<Vec<usize>>,
    pub face_normal: Vec<Vec3>,
    pub face_area: Vec<f64>,
    pub face_centroid: Vec<Vec3>,
    /// The originating TaggedPlane's tag, one per face.
    pub face_tag: Vec<i64>,
}

impl Polyhedron {
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }
}

/// Build the convex intersection of the given half-spaces.
///
/// Step 1 enumerates every unordered triple of planes and solves the 3x3
/// system for the point where all three are tight, keeping it only if every
/// plane in the full set is satisfied within `eps_in`. Step 2 quantizes and
/// deduplicates the surviving candidates. Step 3 gathers, for each plane,
/// the vertices lying on it, sorts them by angle around the plane's local
/// 2D frame, and records the CCW loop as a face.
///
/// Returns an empty `Polyhedron` (no faces, possibly no vertices) if the
/// half-space set is infeasible or degenerate — this is the
/// `DegenerateGeometry` outcome of spec §7, reported by the result rather
/// than an error value.
pub fn halfspace_intersection(planes: &[TaggedPlane], cfg: &Config) -> Polyhedron {
    let mut poly = Polyhedron::default();
    let n = planes.len();
    if n < 4 {
        return poly;
    }

    let eps_in = cfg.eps_in();

    // Step 1: candidate vertices from every unordered plane triple.
    let mut candidates = Vec::new();
    for a in 0..n {
        for b in (a + 1)..n {
            for c in (b + 1)..n {
                let rhs = Vec3::new(planes[a].plane.d, planes[b].plane.d, planes[c].plane.d);
                let Some(x) = solve3x3(planes[a].plane.n, planes[b].plane.n, planes[c].plane.n, rhs, cfg.eps_angle.max(1e-14))
                else {
                    continue;
                };
                let inside = planes
                    .iter()
                    .all(|p| p.plane.signed_distance(x) <= eps_in);
                if inside {
                    candidates.push(x);
                }
            }
        }
    }

    // Step 2: quantized vertex dedup.
    let q = cfg.quant_grid();
    let key = |v: &Vec3| -> (i64, i64, i64) {
        (
            (v.x / q).round() as i64,
            (v.y / q).round() as i64,
            (v.z / q).round() as i64,
        )
    };
    let mut seen = std::collections::HashMap::new();
    let mut verts: Vec<Vec3> = Vec::new();
    for v in &candidates {
        let k = key(v);
        seen.entry(k).or_insert_with(|| {
            verts.push(*v);
            verts.len() - 1
        });
    }
    if verts.len() < 4 {
        trace!("halfspace_intersection: only {} unique vertices, rejecting", verts.len());
        return poly;
    }
    poly.vertices = verts;

    // Step 3: face assembly, one face per plane with >= 3 incident vertices.
    for tp in planes {
        let pl = &tp.plane;
        let on_plane: Vec<usize> = poly
            .vertices
            .iter()
            .enumerate()
            .filter(|(_, v)| pl.signed_distance(**v).abs() <= eps_in * 2.0)
            .map(|(idx, _)| idx)
            .collect();
        if on_plane.len() < 3 {
            continue;
        }
        let (u, v) = orthonormal_basis(pl.n);
        let centroid3d: Vec3 = on_plane
            .iter()
            .fold(Vec3::zeros(), |acc, &idx| acc + poly.vertices[idx])
            / on_plane.len() as f64;
        let mut ordered: Vec<(usize, f64)> = on_plane
            .iter()
            .map(|&idx| {
                let d = poly.vertices[idx] - centroid3d;
                let ang = d.dot(&v).atan2(d.dot(&u));
                (idx, ang)
            })
            .collect();
        ordered.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap());
        let loop_: Vec<usize> = ordered.into_iter().map(|(idx, _)| idx).collect();
        poly.faces.push(loop_);
        poly.face_tag.push(tp.tag);
    }

    compute_face_attributes(&mut poly);
    prune_small_faces(&mut poly, cfg.min_face_area);
    poly
}

/// Compute per-face normal (Newell's method), area, and centroid.
///
/// The normal comes first from summed triangle cross-products (Newell),
/// then a local (u, v) frame built from that normal is used for a
/// fan-triangulated shoelace area anchored at the vertex-average centroid
/// (spec §4.3).
pub fn compute_face_attributes(poly: &mut Polyhedron) {
    poly.face_normal.clear();
    poly.face_area.clear();
    poly.face_centroid.clear();
    for loop_ in &poly.faces {
        let m = loop_.len();
        let mut n = Vec3::zeros();
        let mut sum = Vec3::zeros();
        for k in 0..m {
            let a = poly.vertices[loop_[k]];
            let b = poly.vertices[loop_[(k + 1) % m]];
            n.x += (a.y - b.y) * (a.z + b.z);
            n.y += (a.z - b.z) * (a.x + b.x);
            n.z += (a.x - b.x) * (a.y + b.y);
            sum += a;
        }
        let len = n.norm();
        let nu = if len > 0.0 { n / len } else { Vec3::new(0.0, 0.0, 1.0) };
        let centroid = sum / m as f64;

        let (u, v) = orthonormal_basis(nu);
        let mut area2 = 0.0;
        for k in 0..m {
            let a3 = poly.vertices[loop_[k]];
            let b3 = poly.vertices[loop_[(k + 1) % m]];
            let da = a3 - centroid;
            let db = b3 - centroid;
            let (ax, ay) = (da.dot(&u), da.dot(&v));
            let (bx, by) = (db.dot(&u), db.dot(&v));
            area2 += ax * by - bx * ay;
        }
        poly.face_normal.push(nu);
        poly.face_area.push(0.5 * area2.abs());
        poly.face_centroid.push(centroid);
    }
}

/// Drop faces with area below `min_area`, compacting all parallel arrays.
pub fn prune_small_faces(poly: &mut Polyhedron, min_area: f64) {
    let keep: Vec<bool> = poly.face_area.iter().map(|&a| a >= min_area).collect();
    let mut i = 0;
    poly.faces.retain(|_| {
        let k = keep[i];
        i += 1;
        k
    });
    let mut i = 0;
    poly.face_tag.retain(|_| {
        let k = keep[i];
        i += 1;
        k
    });
    let mut i = 0;
    poly.face_normal.retain(|_| {
        let k = keep[i];
        i += 1;
        k
    });
    let mut i = 0;
    poly.face_area.retain(|_| {
        let k = keep[i];
        i += 1;
        k
    });
    let mut i = 0;
    poly.face_centroid.retain(|_| {
        let k = keep[i];
        i += 1;
        k
    });
}

/// Volume and centroid by signed-tetrahedron decomposition from the origin,
/// fanned from each face's *first* vertex (spec §4.3 "Volume and
/// centroid"). This is deliberately a different fan anchor than
/// `compute_face_attributes`'s centroid-anchored fan, so the two can be
/// cross-checked against each other (spec §4.3, §8).
pub fn volume_centroid_from_origin(poly: &Polyhedron) -> (f64, Vec3) {
    let mut signed_vol = 0.0;
    let mut weighted = Vec3::zeros();
    for loop_ in &poly.faces {
        if loop_.len() < 3 {
            continue;
        }
        let v0 = poly.vertices[loop_[0]];
        for k in 1..(loop_.len() - 1) {
            let vk = poly.vertices[loop_[k]];
            let vk1 = poly.vertices[loop_[k + 1]];
            let vol = v0.dot(&vk.cross(&vk1)) / 6.0;
            signed_vol += vol;
            weighted += (v0 + vk + vk1) * vol / 4.0;
        }
    }
    if signed_vol == 0.0 {
        return (0.0, Vec3::zeros());
    }
    (signed_vol.abs(), weighted / signed_vol)
}

/// Alternative volume from the face-area/normal/centroid triples, retained
/// for cross-validation against `volume_centroid_from_origin` (spec §4.3).
pub fn volume_from_faces(poly: &Polyhedron) -> f64 {
    let mut v = 0.0;
    for f in 0..poly.faces.len() {
        v += poly.face_area[f] * poly.face_normal[f].dot(&poly.face_centroid[f]) / 3.0;
    }
    v.abs()
}
