// containers
//
// BoxContainer (axis-aligned bounds + points) and TriclinicPBC (lattice +
// periodicity mask + points) — component C. These own their point positions
// and are read-only once built; the neighbor planner and tessellator borrow
// from them but never retain references (spec §5).

use crate::error::{Error, Result};
use crate::lattice::Lattice;
use crate::vec::Vec3;

/// Axis-aligned bounds, `hi` strictly greater than `lo` componentwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxBounds {
    pub lo: Vec3,
    pub hi: Vec3,
}

/// An axis-aligned box holding an ordered sequence of atom positions.
#[derive(Debug, Clone)]
pub struct BoxContainer {
    pub bounds: BoxBounds,
    pub positions: Vec<Vec3>,
}

impl BoxContainer {
    /// Construct an empty box container. Fails if `hi` is not strictly
    /// greater than `lo` on every axis.
    pub fn new(lo: Vec3, hi: Vec3) -> Result<Self> {
        if hi.x <= lo.x || hi.y <= lo.y || hi.z <= lo.z {
            return Err(Error::InvalidBounds {
                lo: [lo.x, lo.y, lo.z],
                hi: [hi.x, hi.y, hi.z],
            });
        }
        Ok(BoxContainer {
            bounds: BoxBounds { lo, hi },
            positions: Vec::new(),
        })
    }

    pub fn add_atoms(&mut self, positions: impl IntoIterator<Item = Vec3>) {
        self.positions.extend(positions);
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Maximum distance from `self.positions[i]` to any of the eight box
    /// corners; the "safe reach bound" `R_i` used by the neighbor planner
    /// (spec §4.2).
    pub fn farthest_corner_radius(&self, i: usize) -> f64 {
        let r = self.positions[i];
        let mut max_d = 0.0_f64;
        for cx in [self.bounds.lo.x, self.bounds.hi.x] {
            for cy in [self.bounds.lo.y, self.bounds.hi.y] {
                for cz in [self.bounds.lo.z, self.bounds.hi.z] {
                    let corner = Vec3::new(cx, cy, cz);
                    let d = (corner - r).norm();
                    if d > max_d {
                        max_d = d;
                    }
                }
            }
        }
        max_d
    }
}

/// A triclinic periodic cell holding an ordered sequence of atom positions.
/// Positions are not required to lie inside the primitive cell.
#[derive(Debug, Clone)]
pub struct TriclinicPBC {
    pub lattice: Lattice,
    pub periodic: [bool; 3],
    pub positions: Vec<Vec3>,
}

impl TriclinicPBC {
    pub fn new(lattice: Lattice, periodic: [bool; 3]) -> Self {
        TriclinicPBC {
            lattice,
            periodic,
            positions: Vec::new(),
        }
    }

    pub fn add_atoms(&mut self, positions: impl IntoIterator<Item = Vec3>) {
        self.positions.extend(positions);
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
