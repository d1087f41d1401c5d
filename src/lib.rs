// header
//
//===============================================================================#
//   DESCRIPTION:  Generalized half-space tessellation of 3D point sets
//
//       OPTIONS:  ---
//  REQUIREMENTS:  ---
//         NOTES:  ---
//        AUTHOR:  Wenping Guo <ybyygu@gmail.com>
//       LICENCE:  MIT OR Apache-2.0
//===============================================================================#

//! `voroplex` builds a generalized 3D Voronoi-like tessellation of a set of
//! points ("atoms"), in either an axis-aligned box or a triclinic periodic
//! cell. The bisector between two sites is not fixed at the midpoint: it
//! sits at a user-supplied fractional position along the displacement from
//! one site to the other, one fraction per oriented pair. Surface atoms can
//! be bounded by spherical caps instead of box walls, and per-atom cells
//! stitch into a global mesh with shared vertices, edges, and faces.
//!
//! The crate is organized bottom-up: [`vec`] and [`lattice`] are the
//! geometric substrate; [`container`] holds the two kinds of point sets this
//! engine supports; [`neighbor`] plans which oriented pairs can influence a
//! cell; [`polyhedron`] does the actual half-space intersection;
//! [`tessellate`] assembles per-atom plane lists and invokes it; [`mesh`]
//! stitches per-cell results into one shared mesh; [`marshal`] flattens
//! everything into array-friendly output types.

pub mod config;
pub mod container;
pub mod directions;
pub mod error;
pub mod lattice;
pub mod marshal;
pub mod mesh;
pub mod neighbor;
pub mod plane;
pub mod polyhedron;
pub mod tessellate;
pub mod vec;

pub use config::{CapOptions, Config};
pub use container::{BoxBounds, BoxContainer, TriclinicPBC};
pub use error::{Error, Result};
pub use lattice::Lattice;
pub use marshal::{CellResultArrays, GlobalMeshArrays};
pub use mesh::{stitch_global, GlobalMesh, MeshCell, MeshFace};
pub use neighbor::{plan_neighbors_box, plan_neighbors_pbc, NeighborTable};
pub use plane::{Plane, TaggedPlane};
pub use polyhedron::{halfspace_intersection, Polyhedron};
pub use tessellate::{
    is_surface_atom_box, tessellate_pairs_box, tessellate_pairs_pbc, tessellate_pairs_with_caps,
    CellResult,
};
pub use vec::{Mat3, Vec3};
