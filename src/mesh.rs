// global mesh stitcher
//
// Deduplicates vertices via quantized keys, canonicalizes face loops, links
// faces to shared entities, and builds edges (component I). Unlike the
// per-cell polyhedron builder, this owns one pass across *all* cells and
// grows its tables in place (spec §5: "single pass that exclusively owns
// its growing tables").

use std::collections::HashMap;

use crate::config::Config;
use crate::neighbor::NeighborTable;
use crate::tessellate::CellResult;
use crate::vec::Vec3;

/// One face of the stitched mesh. `j == -1` marks a wall/cap face with no
/// neighboring cell.
#[derive(Debug, Clone)]
pub struct MeshFace {
    pub loop_: Vec<usize>,
    pub i: usize,
    pub j: i64,
    pub img: [i32; 3],
    pub area: f64,
    pub centroid: Vec3,
    pub normal: Vec3,
}

/// One cell of the stitched mesh, referencing its faces by id (cells do not
/// own faces — spec §3 "Ownership").
#[derive(Debug, Clone)]
pub struct MeshCell {
    pub atom_id: usize,
    pub face_ids: Vec<usize>,
    pub volume: f64,
    pub centroid: Vec3,
}

/// The stitched mesh: unique vertices, deduplicated faces, their derived
/// edges, and per-atom cells referencing faces by id.
#[derive(Debug, Clone, Default)]
pub struct GlobalMesh {
    pub vertices: Vec<Vec3>,
    pub edges: Vec<(usize, usize)>,
    pub faces: Vec<MeshFace>,
    pub cells: Vec<MeshCell>,
}

type VKey = (i64, i64, i64);

fn quantize(v: Vec3, q: f64) -> VKey {
    ((v.x / q).round() as i64, (v.y / q).round() as i64, (v.z / q).round() as i64)
}

/// Rotate/reflect `loop_` to its canonical form: the minimum-id vertex
/// first, then whichever of the forward or reversed traversal is
/// lexicographically smaller (spec §4.5, §8 "Canonical cycles").
fn canonical_cycle(loop_: &[usize]) -> Vec<usize> {
    let n = loop_.len();
    if n == 0 {
        return Vec::new();
    }
    let min_pos = loop_
        .iter()
        .enumerate()
        .min_by_key(|&(_, &v)| v)
        .map(|(idx, _)| idx)
        .unwrap();
    let forward: Vec<usize> = (0..n).map(|k| loop_[(min_pos + k) % n]).collect();

    let mut reversed = loop_.to_vec();
    reversed.reverse();
    let rev_min_pos = reversed.iter().position(|&v| v == loop_[min_pos]).unwrap();
    let backward: Vec<usize> = (0..n).map(|k| reversed[(rev_min_pos + k) % n]).collect();

    if backward < forward {
        backward
    } else {
        forward
    }
}

/// Newell's-method normal of a global-id loop, used to decide whether a
/// translated face loop needs reversing to agree with the i->j direction.
fn newell_normal(loop_: &[usize], vertices: &[Vec3]) -> Vec3 {
    let m = loop_.len();
    let mut n = Vec3::zeros();
    for k in 0..m {
        let a = vertices[loop_[k]];
        let b = vertices[loop_[(k + 1) % m]];
        n.x += (a.y - b.y) * (a.z + b.z);
        n.y += (a.z - b.z) * (a.x + b.x);
        n.z += (a.x - b.x) * (a.y + b.y);
    }
    let len = n.norm();
    if len > 0.0 {
        n / len
    } else {
        Vec3::new(0.0, 0.0, 1.0)
    }
}

/// Strip consecutive duplicate vertices (and a closing duplicate) from a
/// translated face loop. Face loops shouldn't normally carry duplicates,
/// but quantized vertex merges can collapse two originally-distinct local
/// vertices onto the same global id.
fn collapse_duplicates(loop_: &[usize]) -> Vec<usize> {
    let mut out: Vec<usize> = Vec::with_capacity(loop_.len());
    for &v in loop_ {
        if out.last() != Some(&v) {
            out.push(v);
        }
    }
    if out.len() > 1 && out.first() == out.last() {
        out.pop();
    }
    out
}

/// Stitch per-cell polyhedra into one mesh with shared vertices, faces, and
/// edges (spec §4.5). `table` maps a neighbor-row face tag back to the
/// `(j, image)` of the pair it separates.
///
/// Atom positions are not threaded through separately: `table.disp` already
/// carries the oriented, image-shifted displacement for every row, which is
/// all the orientation step below needs.
pub fn stitch_global(table: &NeighborTable, cells: &[CellResult], cfg: &Config) -> GlobalMesh {
    let mut mesh = GlobalMesh::default();
    let q = cfg.quant_grid();
    let mut vertex_keys: HashMap<VKey, usize> = HashMap::new();
    let mut face_index: HashMap<Vec<usize>, usize> = HashMap::new();

    for cell in cells {
        let local_to_global: Vec<usize> = cell
            .poly
            .vertices
            .iter()
            .map(|v| {
                let key = quantize(*v, q);
                *vertex_keys.entry(key).or_insert_with(|| {
                    mesh.vertices.push(*v);
                    mesh.vertices.len() - 1
                })
            })
            .collect();

        let mut face_ids = Vec::with_capacity(cell.poly.faces.len());
        for f in 0..cell.poly.faces.len() {
            let global_loop: Vec<usize> = cell.poly.faces[f]
                .iter()
                .map(|&local| local_to_global[local])
                .collect();
            let global_loop = collapse_duplicates(&global_loop);
            if global_loop.len() < 3 {
                continue;
            }
            let canon = canonical_cycle(&global_loop);

            let face_id = *face_index.entry(canon).or_insert_with(|| {
                let tag = cell.poly.face_tag[f];
                let (i_atom, j_atom, img, normal, stored_loop) = if tag >= 0 {
                    let row = tag as usize;
                    let j_atom = table.j[row] as i64;
                    let img = table.img[row];
                    let direction = table.disp[row].normalize();
                    let normal = newell_normal(&global_loop, &mesh.vertices);
                    let (normal, stored_loop) = if normal.dot(&direction) < 0.0 {
                        let mut rev = global_loop.clone();
                        rev.reverse();
                        (-normal, rev)
                    } else {
                        (normal, global_loop.clone())
                    };
                    (cell.atom_id, j_atom, img, normal, stored_loop)
                } else {
                    (cell.atom_id, -1, [0, 0, 0], Vec3::new(0.0, 0.0, 1.0), global_loop.clone())
                };
                mesh.faces.push(MeshFace {
                    loop_: stored_loop,
                    i: i_atom,
                    j: j_atom,
                    img,
                    area: cell.poly.face_area[f],
                    centroid: cell.poly.face_centroid[f],
                    normal,
                });
                mesh.faces.len() - 1
            });
            face_ids.push(face_id);
        }

        mesh.cells.push(MeshCell {
            atom_id: cell.atom_id,
            face_ids,
            volume: cell.volume,
            centroid: cell.centroid,
        });
    }

    let mut edge_set: HashMap<(usize, usize), ()> = HashMap::new();
    for face in &mesh.faces {
        let m = face.loop_.len();
        for k in 0..m {
            let a = face.loop_[k];
            let b = face.loop_[(k + 1) % m];
            let key = if a < b { (a, b) } else { (b, a) };
            edge_set.entry(key).or_insert(());
        }
    }
    mesh.edges = edge_set.into_keys().collect();

    mesh
}
