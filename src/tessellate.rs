// tessellator
//
// Assembles planes per atom (walls or caps + neighbor bisectors), invokes
// the half-space intersector, and returns per-cell results (component H).

use log::debug;

use crate::config::{CapOptions, Config};
use crate::container::{BoxContainer, TriclinicPBC};
use crate::directions::direction_set;
use crate::error::{Error, Result};
use crate::neighbor::NeighborTable;
use crate::plane::{Plane, TaggedPlane, CAP_TAG_BASE, WALL_TAG_BASE};
use crate::polyhedron::{halfspace_intersection, volume_centroid_from_origin, Polyhedron};
use crate::vec::Vec3;

/// The tessellation result for a single atom.
#[derive(Debug, Clone)]
pub struct CellResult {
    pub atom_id: usize,
    pub poly: Polyhedron,
    pub volume: f64,
    pub centroid: Vec3,
}

fn clamp_m(m: f64, cfg: &Config) -> f64 {
    m.max(cfg.min_M).min(1.0 - cfg.min_M)
}

/// Bisector half-space for neighbor row `r`, placed at the per-row fraction
/// `M[r]` along the displacement from `ri` (spec §4.4 step 3). Returns
/// `None` if the displacement has zero length (a row that slipped through
/// with `r2 == 0`), which is skipped rather than treated as an error.
fn bisector_plane(ri: Vec3, disp: Vec3, m: f64, cfg: &Config) -> Option<Plane> {
    let len = disp.norm();
    if len == 0.0 {
        return None;
    }
    let n = disp / len;
    let m = clamp_m(m, cfg);
    let p = ri + disp * m;
    Some(Plane::from_point_normal(p, n))
}

fn neighbor_planes(
    atom: usize,
    ri: Vec3,
    table: &NeighborTable,
    m: &[f64],
    cfg: &Config,
) -> Vec<TaggedPlane> {
    table
        .rows_for_site(atom)
        .into_iter()
        .filter_map(|row| {
            bisector_plane(ri, table.disp[row], m[row], cfg).map(|plane| TaggedPlane {
                plane,
                tag: row as i64,
            })
        })
        .collect()
}

fn box_wall_planes(bounds_lo: Vec3, bounds_hi: Vec3) -> Vec<TaggedPlane> {
    vec![
        TaggedPlane {
            plane: Plane { n: Vec3::new(-1.0, 0.0, 0.0), d: -bounds_lo.x },
            tag: WALL_TAG_BASE,
        },
        TaggedPlane {
            plane: Plane { n: Vec3::new(1.0, 0.0, 0.0), d: bounds_hi.x },
            tag: WALL_TAG_BASE - 1,
        },
        TaggedPlane {
            plane: Plane { n: Vec3::new(0.0, -1.0, 0.0), d: -bounds_lo.y },
            tag: WALL_TAG_BASE - 2,
        },
        TaggedPlane {
            plane: Plane { n: Vec3::new(0.0, 1.0, 0.0), d: bounds_hi.y },
            tag: WALL_TAG_BASE - 3,
        },
        TaggedPlane {
            plane: Plane { n: Vec3::new(0.0, 0.0, -1.0), d: -bounds_lo.z },
            tag: WALL_TAG_BASE - 4,
        },
        TaggedPlane {
            plane: Plane { n: Vec3::new(0.0, 0.0, 1.0), d: bounds_hi.z },
            tag: WALL_TAG_BASE - 5,
        },
    ]
}

fn cap_planes(ri: Vec3, opt: &CapOptions) -> Vec<TaggedPlane> {
    direction_set(opt.lebedev_order)
        .into_iter()
        .enumerate()
        .map(|(k, n)| {
            let p = ri + n * opt.radius;
            TaggedPlane {
                plane: Plane::from_point_normal(p, n),
                tag: CAP_TAG_BASE - k as i64,
            }
        })
        .collect()
}

fn finish_cell(atom_id: usize, planes: Vec<TaggedPlane>, cfg: &Config) -> CellResult {
    let poly = halfspace_intersection(&planes, cfg);
    let (volume, centroid) = volume_centroid_from_origin(&poly);
    if poly.is_empty() {
        debug!("atom {}: degenerate cell (0 faces, volume 0)", atom_id);
    }
    CellResult {
        atom_id,
        poly,
        volume,
        centroid,
    }
}

fn check_m_len(table: &NeighborTable, m: &[f64]) -> Result<()> {
    if m.len() != table.len() {
        return Err(Error::MLengthMismatch {
            expected: table.len(),
            got: m.len(),
        });
    }
    Ok(())
}

/// Tessellate a box container: every atom gets six axis-aligned wall planes
/// plus its neighbor bisectors (spec §4.4, "Box container, interior atom").
pub fn tessellate_pairs_box(
    box_: &BoxContainer,
    table: &NeighborTable,
    m: &[f64],
    cfg: &Config,
) -> Result<Vec<CellResult>> {
    check_m_len(table, m)?;
    let mut out = Vec::with_capacity(box_.len());
    for atom in 0..box_.len() {
        let mut planes = box_wall_planes(box_.bounds.lo, box_.bounds.hi);
        planes.extend(neighbor_planes(atom, box_.positions[atom], table, m, cfg));
        out.push(finish_cell(atom, planes, cfg));
    }
    Ok(out)
}

/// Tessellate a triclinic PBC container: no walls or caps, the cell is
/// bounded entirely by neighbor bisectors (spec §4.4).
pub fn tessellate_pairs_pbc(
    pbc: &TriclinicPBC,
    table: &NeighborTable,
    m: &[f64],
    cfg: &Config,
) -> Result<Vec<CellResult>> {
    check_m_len(table, m)?;
    let mut out = Vec::with_capacity(pbc.len());
    for atom in 0..pbc.len() {
        let planes = neighbor_planes(atom, pbc.positions[atom], table, m, cfg);
        out.push(finish_cell(atom, planes, cfg));
    }
    Ok(out)
}

/// A site is a surface atom if it is in `opt.surface_atom_ids` (when
/// non-empty), else if `opt.auto_surface_margin > 0` and any coordinate
/// lies within that margin of a wall (spec §4.4 "Surface detection").
pub fn is_surface_atom_box(box_: &BoxContainer, i: usize, opt: &CapOptions) -> bool {
    if !opt.enabled {
        return false;
    }
    if !opt.surface_atom_ids.is_empty() {
        return opt.surface_atom_ids.contains(&i);
    }
    if opt.auto_surface_margin > 0.0 {
        let r = box_.positions[i];
        let m = opt.auto_surface_margin;
        let b = &box_.bounds;
        return (r.x - b.lo.x) < m
            || (b.hi.x - r.x) < m
            || (r.y - b.lo.y) < m
            || (b.hi.y - r.y) < m
            || (r.z - b.lo.z) < m
            || (b.hi.z - r.z) < m;
    }
    false
}

/// Tessellate a box container with cap support: surface atoms (per
/// `is_surface_atom_box`) get a spherical cap in place of box walls, other
/// atoms keep the ordinary wall planes (spec §4.4, §9 "replace, not
/// augment").
pub fn tessellate_pairs_with_caps(
    box_: &BoxContainer,
    table: &NeighborTable,
    m: &[f64],
    opt: &CapOptions,
    cfg: &Config,
) -> Result<Vec<CellResult>> {
    check_m_len(table, m)?;
    if opt.enabled && opt.radius <= 0.0 {
        return Err(Error::InvalidCapRadius(opt.radius));
    }
    if opt.enabled && opt.lebedev_order <= 0 {
        return Err(Error::InvalidDirectionOrder(opt.lebedev_order));
    }

    let mut out = Vec::with_capacity(box_.len());
    for atom in 0..box_.len() {
        let ri = box_.positions[atom];
        let mut planes = if is_surface_atom_box(box_, atom, opt) {
            cap_planes(ri, opt)
        } else {
            box_wall_planes(box_.bounds.lo, box_.bounds.hi)
        };
        planes.extend(neighbor_planes(atom, ri, table, m, cfg));
        out.push(finish_cell(atom, planes, cfg));
    }
    Ok(out)
}
