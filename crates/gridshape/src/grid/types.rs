//! Basic grid types: integer vertices, bounding extremes, integer affine maps.
//!
//! - `Vertex`: immutable `(row, col)` lattice point with value equality.
//! - `Extremes`: axis-aligned bounding box of a vertex list.
//! - `GridAffine`: `v ↦ M v + t` over `i64`, used by every dihedral step.
//!
//! Code cross-refs: `transform::{Step, apply_step}`, `canonical::canonical_forms`

use std::fmt;

use nalgebra::{Matrix2, Vector2};

/// Integer point on the drawing grid. Rows grow downward, columns rightward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Vertex {
    pub row: i64,
    pub col: i64,
}

impl Vertex {
    #[inline]
    pub const fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }

    #[inline]
    pub fn to_vector(self) -> Vector2<i64> {
        Vector2::new(self.row, self.col)
    }

    #[inline]
    pub fn from_vector(v: Vector2<i64>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<(i64, i64)> for Vertex {
    #[inline]
    fn from((row, col): (i64, i64)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Bounding box of a non-empty vertex list (inclusive).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Extremes {
    pub min_row: i64,
    pub max_row: i64,
    pub min_col: i64,
    pub max_col: i64,
}

/// Extremes of `points`, or `None` for an empty slice.
pub fn extremes(points: &[Vertex]) -> Option<Extremes> {
    let (first, rest) = points.split_first()?;
    let mut ext = Extremes {
        min_row: first.row,
        max_row: first.row,
        min_col: first.col,
        max_col: first.col,
    };
    for p in rest {
        ext.min_row = ext.min_row.min(p.row);
        ext.max_row = ext.max_row.max(p.row);
        ext.min_col = ext.min_col.min(p.col);
        ext.max_col = ext.max_col.max(p.col);
    }
    Some(ext)
}

/// Integer affine map on `(row, col)` vectors: `v ↦ M v + t`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridAffine {
    pub m: Matrix2<i64>,
    pub t: Vector2<i64>,
}

impl GridAffine {
    #[inline]
    pub fn identity() -> Self {
        Self {
            m: Matrix2::identity(),
            t: Vector2::zeros(),
        }
    }

    #[inline]
    pub fn translation(t: Vector2<i64>) -> Self {
        Self {
            m: Matrix2::identity(),
            t,
        }
    }

    #[inline]
    pub fn apply(&self, v: Vertex) -> Vertex {
        Vertex::from_vector(self.m * v.to_vector() + self.t)
    }

    /// Composition `self ∘ other` (apply `other` first).
    #[inline]
    pub fn compose(&self, other: &Self) -> Self {
        Self {
            m: self.m * other.m,
            t: self.m * other.t + self.t,
        }
    }

    /// Map every point, preserving order.
    pub fn apply_all(&self, points: &[Vertex]) -> Vec<Vertex> {
        points.iter().map(|&p| self.apply(p)).collect()
    }
}
