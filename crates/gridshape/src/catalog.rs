//! Distinct grid triangles anchored on the axes.
//!
//! Enumerates triangles with corners `(k, k)`, `(r, 0)` and `(0, c)` for
//! `k < size`, `r ≤ size`, `r ≤ c ≤ size`, drops degenerate ones, and keeps the
//! first polygon of each shape class. Useful as a reference count of how many
//! different triangles fit such a board.

use tracing::debug;

use crate::grid::Vertex;
use crate::polygon::Polygon;

/// Candidate corner triples in enumeration order (may contain duplicates).
pub fn triangle_candidates(size: i64) -> impl Iterator<Item = [Vertex; 3]> {
    (0..size.max(0)).flat_map(move |k| {
        (0..=size).flat_map(move |r| {
            (r..=size).map(move |c| [Vertex::new(k, k), Vertex::new(r, 0), Vertex::new(0, c)])
        })
    })
}

/// One closed polygon per distinct non-degenerate triangle shape.
pub fn triangle_catalog(size: i64) -> Vec<Polygon> {
    let mut unique: Vec<Polygon> = Vec::new();
    let mut seen = 0usize;
    for corners in triangle_candidates(size) {
        seen += 1;
        let Ok(poly) = Polygon::from_vertices(corners.to_vec()) else {
            continue;
        };
        if poly.area() == 0.0 {
            continue;
        }
        if !unique.iter().any(|u| u.same_shape(&poly)) {
            unique.push(poly);
        }
    }
    debug!(size, candidates = seen, unique = unique.len(), "triangle catalog");
    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polygon::polygons_equal;

    #[test]
    fn candidate_count_matches_loop_bounds() {
        // size 2: k in {0,1}; (r, c) pairs with r <= c <= 2 -> 6
        assert_eq!(triangle_candidates(2).count(), 12);
        assert_eq!(triangle_candidates(0).count(), 0);
    }

    #[test]
    fn catalog_entries_are_pairwise_distinct() {
        let cat = triangle_catalog(3);
        assert!(!cat.is_empty());
        for (i, a) in cat.iter().enumerate() {
            assert!(a.is_closed());
            assert!(a.area() > 0.0);
            for b in &cat[i + 1..] {
                assert!(!polygons_equal(a, b));
            }
        }
    }

    #[test]
    fn size_one_has_single_right_triangle() {
        // only k = 0 exists; the single non-degenerate candidate is (0,0),(1,0),(0,1)
        let cat = triangle_catalog(1);
        assert_eq!(cat.len(), 1);
        assert_eq!(cat[0].area(), 0.5);
    }
}
