//! Start-vertex and traversal-direction relabelings of a closed vertex cycle.

use super::types::Vertex;

/// The `n` forward rotations of `seq`, followed by the `n` rotations of its
/// reversal. Empty input yields no orderings.
pub fn cyclic_orderings(seq: &[Vertex]) -> Vec<Vec<Vertex>> {
    let n = seq.len();
    let reversed: Vec<Vertex> = seq.iter().rev().copied().collect();
    let mut out = Vec::with_capacity(2 * n);
    for base in [seq, reversed.as_slice()] {
        for start in 0..n {
            out.push(rotate_start(base, start));
        }
    }
    out
}

/// `seq` relabeled so that index `start` comes first.
#[inline]
pub fn rotate_start(seq: &[Vertex], start: usize) -> Vec<Vertex> {
    let n = seq.len();
    (0..n).map(|j| seq[(j + start) % n]).collect()
}
