// data-marshalling boundary
//
// Converts internal structures into the flat, numerical-array-friendly form
// an external binding layer expects (component K, spec §6). These types
// copy out of the engine's owned buffers and never hold references back
// into it (spec §5 "Memory discipline").

use serde::{Deserialize, Serialize};

use crate::mesh::GlobalMesh;
use crate::tessellate::CellResult;

/// Flat, serializable view of a single `CellResult`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CellResultArrays {
    pub atom_id: usize,
    pub volume: f64,
    pub centroid: [f64; 3],
    /// Mx3 vertex coordinates.
    pub vertices: Vec<[f64; 3]>,
    /// Variable-length vertex-index loops, one per face.
    pub faces: Vec<Vec<usize>>,
}

impl From<&CellResult> for CellResultArrays {
    fn from(cell: &CellResult) -> Self {
        CellResultArrays {
            atom_id: cell.atom_id,
            volume: cell.volume,
            centroid: [cell.centroid.x, cell.centroid.y, cell.centroid.z],
            vertices: cell.poly.vertices.iter().map(|v| [v.x, v.y, v.z]).collect(),
            faces: cell.poly.faces.clone(),
        }
    }
}

/// Flat, serializable view of a `GlobalMesh`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalMeshArrays {
    /// Vx3 vertex coordinates.
    pub vertices: Vec<[f64; 3]>,
    /// Ex2 vertex-index pairs.
    pub edges: Vec<[usize; 2]>,
    /// Per-face vertex-index loops.
    pub face_loops: Vec<Vec<usize>>,
    pub face_i: Vec<usize>,
    pub face_j: Vec<i64>,
    pub face_img: Vec<[i32; 3]>,
    pub face_area: Vec<f64>,
    pub face_centroid: Vec<[f64; 3]>,
    pub face_normal_ij: Vec<[f64; 3]>,
    pub cell_atom_id: Vec<usize>,
    pub cell_volume: Vec<f64>,
    pub cell_centroid: Vec<[f64; 3]>,
    pub cell_face_ids: Vec<Vec<usize>>,
}

impl From<&GlobalMesh> for GlobalMeshArrays {
    fn from(mesh: &GlobalMesh) -> Self {
        let n_faces = mesh.faces.len();
        let mut arrays = GlobalMeshArrays {
            vertices: mesh.vertices.iter().map(|v| [v.x, v.y, v.z]).collect(),
            edges: mesh.edges.iter().map(|&(a, b)| [a, b]).collect(),
            face_loops: Vec::with_capacity(n_faces),
            face_i: Vec::with_capacity(n_faces),
            face_j: Vec::with_capacity(n_faces),
            face_img: Vec::with_capacity(n_faces),
            face_area: Vec::with_capacity(n_faces),
            face_centroid: Vec::with_capacity(n_faces),
            face_normal_ij: Vec::with_capacity(n_faces),
            cell_atom_id: Vec::with_capacity(mesh.cells.len()),
            cell_volume: Vec::with_capacity(mesh.cells.len()),
            cell_centroid: Vec::with_capacity(mesh.cells.len()),
            cell_face_ids: Vec::with_capacity(mesh.cells.len()),
        };
        for face in &mesh.faces {
            arrays.face_loops.push(face.loop_.clone());
            arrays.face_i.push(face.i);
            arrays.face_j.push(face.j);
            arrays.face_img.push(face.img);
            arrays.face_area.push(face.area);
            arrays.face_centroid.push([face.centroid.x, face.centroid.y, face.centroid.z]);
            arrays.face_normal_ij.push([face.normal.x, face.normal.y, face.normal.z]);
        }
        for cell in &mesh.cells {
            arrays.cell_atom_id.push(cell.atom_id);
            arrays.cell_volume.push(cell.volume);
            arrays.cell_centroid.push([cell.centroid.x, cell.centroid.y, cell.centroid.z]);
            arrays.cell_face_ids.push(cell.face_ids.clone());
        }
        arrays
    }
}
