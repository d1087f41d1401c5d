//! Error taxonomy surfaced at the API boundary (spec §7).
//!
//! Only `InvalidArgument` conditions are reported as hard failures; per-cell
//! degeneracies (`DegenerateGeometry`) and numeric-tolerance skips are not
//! errors — they show up as zero-volume cells or a skipped triple, and are
//! logged at `debug`/`trace` level instead (see `polyhedron` and
//! `tessellate`).

use thiserror::Error;

/// Fatal, descriptive failures detected at API entry, before any work begins.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("box bounds are invalid: hi must be > lo componentwise, got lo={lo:?} hi={hi:?}")]
    InvalidBounds { lo: [f64; 3], hi: [f64; 3] },

    #[error("M array length {got} does not match neighbor table size {expected}")]
    MLengthMismatch { expected: usize, got: usize },

    #[error("cap radius must be positive, got {0}")]
    InvalidCapRadius(f64),

    #[error("direction-set order must be positive, got {0}")]
    InvalidDirectionOrder(i32),
}

pub type Result<T> = std::result::Result<T, Error>;
