//! Removal of vertices that sit between two grid-axis-colinear neighbours.

use super::types::Vertex;

/// Drop every vertex lying on a straight row or column run through both of
/// its cyclic neighbours.
///
/// Scans `i` over `0..n` and looks back at `p = i-1`, `pp = i-2` (mod n); `seq[p]`
/// is emitted unless `i, p, pp` share a column or a row. The output therefore
/// opens with `seq[n-1]` whenever that vertex survives. Inputs shorter than three
/// vertices come back unchanged; a fully colinear cycle filters to nothing.
pub fn drop_redundant(seq: &[Vertex]) -> Vec<Vertex> {
    let n = seq.len();
    if n < 3 {
        return seq.to_vec();
    }
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let p = (i + n - 1) % n;
        let pp = (i + n - 2) % n;
        let (a, b, c) = (seq[i], seq[p], seq[pp]);
        let same_col = a.col == b.col && a.col == c.col;
        let same_row = a.row == b.row && a.row == c.row;
        if !(same_col || same_row) {
            out.push(b);
        }
    }
    out
}

/// True if `drop_redundant` would remove at least one vertex.
pub fn has_redundant(seq: &[Vertex]) -> bool {
    drop_redundant(seq).len() < seq.len()
}
