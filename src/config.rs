//! Numerical tolerances and planning parameters (component J).

use serde::{Deserialize, Serialize};

/// Tolerances and planning knobs shared by the neighbor planner and the
/// polyhedron engine. Defaults match spec §6.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Geometric position tolerance; seeds `eps_in` and the vertex
    /// quantization grid `q`.
    pub eps_pos: f64,
    /// Threshold for near-parallel-plane rejection in triple intersection.
    pub eps_angle: f64,
    /// Faces with area below this are pruned.
    pub min_face_area: f64,
    /// Lower clamp for the per-pair bisector fraction; also the denominator
    /// in the neighbor search radius.
    pub min_M: f64,
    /// PBC reach multiplier on the estimated nearest-neighbor distance.
    pub reach_factor: f64,
    /// Additive padding on the neighbor search radius.
    pub neighbor_skin: f64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            eps_pos: 1e-10,
            eps_angle: 1e-12,
            min_face_area: 1e-14,
            min_M: 0.1,
            reach_factor: 2.5,
            neighbor_skin: 1e-8,
        }
    }
}

impl Config {
    /// Vertex-membership tolerance (`ε_in` in spec §3/§4.3).
    pub fn eps_in(&self) -> f64 {
        (self.eps_pos * 10.0).max(1e-9)
    }

    /// Vertex-quantization grid size (`q` in spec §3/§4.3/§4.5).
    pub fn quant_grid(&self) -> f64 {
        (self.eps_pos * 100.0).max(1e-9)
    }
}

/// Options controlling spherical "caps" that bound the cells of surface
/// atoms in a box container (spec §6, §4.4).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapOptions {
    pub enabled: bool,
    pub radius: f64,
    pub lebedev_order: i32,
    /// Explicit surface-atom ids. If non-empty, takes precedence over
    /// `auto_surface_margin`.
    pub surface_atom_ids: Vec<usize>,
    /// If `surface_atom_ids` is empty, atoms within this distance of any
    /// wall are treated as surface atoms. Zero disables auto-detection.
    pub auto_surface_margin: f64,
}

impl Default for CapOptions {
    fn default() -> Self {
        CapOptions {
            enabled: false,
            radius: 1.0,
            lebedev_order: 26,
            surface_atom_ids: Vec::new(),
            auto_surface_margin: 0.0,
        }
    }
}
