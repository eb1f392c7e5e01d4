//! Property checks for normalization, area and shape equality.

use proptest::prelude::*;

use crate::canonical::canonical_forms;
use crate::grid::{apply_chain, extremes, normalize, rotate_start, Vertex, DIHEDRAL};
use crate::polygon::{polygons_equal, shoelace_area, Polygon};

fn any_points() -> impl Strategy<Value = Vec<Vertex>> {
    prop::collection::vec((-50i64..50, -50i64..50), 1..12)
        .prop_map(|pts| pts.into_iter().map(Vertex::from).collect())
}

/// Distinct vertices, at least three, on a small board so shapes repeat often.
fn distinct_cycle() -> impl Strategy<Value = Vec<Vertex>> {
    prop::collection::vec((0i64..6, 0i64..6), 3..9)
        .prop_map(|pts| {
            let mut out: Vec<Vertex> = Vec::with_capacity(pts.len());
            for p in pts.into_iter().map(Vertex::from) {
                if !out.contains(&p) {
                    out.push(p);
                }
            }
            out
        })
        .prop_filter("need three distinct vertices", |vs| vs.len() >= 3)
}

proptest! {
    #[test]
    fn normalized_minimum_is_origin(pts in any_points()) {
        let ext = extremes(&normalize(&pts)).unwrap();
        prop_assert_eq!((ext.min_row, ext.min_col), (0, 0));
    }

    #[test]
    fn area_ignores_start_and_direction(pts in any_points(), shift in 0usize..12) {
        let base = shoelace_area(&pts);
        let k = shift % pts.len();
        prop_assert_eq!(shoelace_area(&rotate_start(&pts, k)), base);
        let reversed: Vec<Vertex> = pts.iter().rev().copied().collect();
        prop_assert_eq!(shoelace_area(&reversed), base);
        prop_assert!(base >= 0.0);
    }

    #[test]
    fn transformed_copies_share_a_form(
        vs in distinct_cycle(),
        chain in 0usize..8,
        shift in 0usize..9,
        reverse in any::<bool>(),
        dr in -20i64..20,
        dc in -20i64..20,
    ) {
        let mut copy: Vec<Vertex> = apply_chain(&vs, DIHEDRAL[chain])
            .into_iter()
            .map(|p| Vertex::new(p.row + dr, p.col + dc))
            .collect();
        if reverse {
            copy.reverse();
        }
        let copy = rotate_start(&copy, shift % copy.len());
        prop_assert!(canonical_forms(&copy).intersects(&canonical_forms(&vs)));

        let a = Polygon::from_vertices(vs).unwrap();
        let b = Polygon::from_vertices(copy).unwrap();
        prop_assert!(polygons_equal(&a, &b));
    }

    #[test]
    fn equality_is_reflexive(vs in distinct_cycle()) {
        let p = Polygon::from_vertices(vs).unwrap();
        prop_assert!(polygons_equal(&p, &p));
    }

    #[test]
    fn canonicalization_is_deterministic(vs in distinct_cycle()) {
        prop_assert_eq!(canonical_forms(&vs), canonical_forms(&vs));
    }
}
