//! Translation, reflection and quarter-turn of vertex lists.
//!
//! Every primitive re-derives the extremes of the list it is applied to, so a
//! chain like `[Rotate, FlipRows]` flips against the rotated bounding box, not
//! the original one. The eight chains in `DIHEDRAL` span the symmetry group of
//! the square.
//!
//! Rotate does not re-normalize: for a non-square bounding box the `[Rotate]`
//! and `[Rotate, FlipRows]` images are offset from the origin. Equality only
//! needs one shared image, so this is left as is.

use nalgebra::{matrix, Vector2};

use super::types::{extremes, Extremes, GridAffine, Vertex};

/// Shift `points` so the bounding box's minimum corner sits at `(0, 0)`.
pub fn normalize(points: &[Vertex]) -> Vec<Vertex> {
    match extremes(points) {
        Some(ext) => {
            GridAffine::translation(Vector2::new(-ext.min_row, -ext.min_col)).apply_all(points)
        }
        None => Vec::new(),
    }
}

/// A single bounding-box-relative primitive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Step {
    /// `row ↦ max_row − row`
    FlipRows,
    /// `col ↦ max_col − col`
    FlipCols,
    /// `(row, col) ↦ (col, max_col − row)`
    Rotate,
}

impl Step {
    /// The affine map this step denotes against the given extremes.
    pub fn affine(self, ext: &Extremes) -> GridAffine {
        match self {
            Step::FlipRows => GridAffine {
                m: matrix![-1, 0; 0, 1],
                t: Vector2::new(ext.max_row, 0),
            },
            Step::FlipCols => GridAffine {
                m: matrix![1, 0; 0, -1],
                t: Vector2::new(0, ext.max_col),
            },
            Step::Rotate => GridAffine {
                m: matrix![0, 1; -1, 0],
                t: Vector2::new(0, ext.max_col),
            },
        }
    }
}

/// Re-derive the extremes of `points`, then apply `step`.
pub fn apply_step(points: &[Vertex], step: Step) -> Vec<Vertex> {
    match extremes(points) {
        Some(ext) => step.affine(&ext).apply_all(points),
        None => Vec::new(),
    }
}

/// Apply a chain of steps left to right.
pub fn apply_chain(points: &[Vertex], chain: &[Step]) -> Vec<Vertex> {
    chain
        .iter()
        .fold(points.to_vec(), |acc, &step| apply_step(&acc, step))
}

/// The eight dihedral chains, identity first.
pub const DIHEDRAL: [&[Step]; 8] = [
    &[],
    &[Step::FlipRows],
    &[Step::FlipCols],
    &[Step::FlipRows, Step::FlipCols],
    &[Step::Rotate],
    &[Step::Rotate, Step::FlipRows],
    &[Step::Rotate, Step::FlipCols],
    &[Step::Rotate, Step::FlipRows, Step::FlipCols],
];

/// All eight images of a (normalized) list, each in original vertex order.
pub fn dihedral_images(normalized: &[Vertex]) -> Vec<Vec<Vertex>> {
    DIHEDRAL
        .iter()
        .map(|chain| apply_chain(normalized, chain))
        .collect()
}
