//! Drawn polygon: an Open vertex list that freezes into a Closed shape.
//!
//! State machine
//! - `Open` (created with one starting vertex) → `Closed` (terminal).
//! - Re-adding the first vertex once at least three vertices exist closes the
//!   polygon. The closing repeat is not stored.
//! - On close the canonical-form set is computed exactly once and cached.
//!
//! Area and equality assume a simple (non-self-crossing) polygon; crossings
//! are not detected.
//!
//! Code cross-refs: `canonical::{canonical_forms, FormCache}`, `api`

use std::fmt;

use crate::canonical::{canonical_forms, CanonicalForms, FormCache};
use crate::grid::Vertex;

/// Minimum number of distinct vertices a closed polygon needs.
pub const MIN_CLOSED_VERTICES: usize = 3;

/// Build state of a polygon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PolygonState {
    Open,
    Closed,
}

/// Errors surfaced by polygon construction and queries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PolygonError {
    /// The polygon is already closed; its vertices are frozen.
    InvalidState,
    /// The vertex is already part of the open list (includes a premature
    /// repeat of the first vertex).
    DuplicateVertex(Vertex),
    /// Canonical forms were requested before the polygon was closed.
    NotReady,
    /// A closed polygon was requested from too few vertices.
    TooFewVertices { count: usize },
}

impl fmt::Display for PolygonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolygonError::InvalidState => write!(f, "polygon is closed; vertices are frozen"),
            PolygonError::DuplicateVertex(v) => {
                write!(f, "vertex {v} is already part of the polygon")
            }
            PolygonError::NotReady => write!(f, "polygon is still open (no canonical forms yet)"),
            PolygonError::TooFewVertices { count } => write!(
                f,
                "closed polygon needs at least {MIN_CLOSED_VERTICES} vertices, got {count}"
            ),
        }
    }
}

impl std::error::Error for PolygonError {}

/// Ordered vertex sequence plus its build state.
///
/// Invariants:
/// - No vertex appears twice.
/// - `forms.is_some()` iff the polygon is Closed.
#[derive(Clone, Debug)]
pub struct Polygon {
    vertices: Vec<Vertex>,
    forms: Option<CanonicalForms>,
}

impl Polygon {
    /// Open polygon holding just `first`.
    pub fn new(first: Vertex) -> Self {
        Self {
            vertices: vec![first],
            forms: None,
        }
    }

    /// Closed polygon from a complete vertex list (no closing repeat).
    pub fn from_vertices(vertices: Vec<Vertex>) -> Result<Self, PolygonError> {
        if vertices.len() < MIN_CLOSED_VERTICES {
            return Err(PolygonError::TooFewVertices {
                count: vertices.len(),
            });
        }
        for (i, v) in vertices.iter().enumerate() {
            if vertices[..i].contains(v) {
                return Err(PolygonError::DuplicateVertex(*v));
            }
        }
        let forms = canonical_forms(&vertices);
        Ok(Self {
            vertices,
            forms: Some(forms),
        })
    }

    /// Add `v`, closing the polygon when `v` repeats the first vertex and at
    /// least three vertices are present.
    pub fn add_vertex(&mut self, v: Vertex) -> Result<PolygonState, PolygonError> {
        self.push(v, canonical_forms)
    }

    /// Like `add_vertex`, but closes through a shared memo table.
    pub fn add_vertex_cached(
        &mut self,
        v: Vertex,
        cache: &mut FormCache,
    ) -> Result<PolygonState, PolygonError> {
        self.push(v, |vs| cache.get_or_compute(vs))
    }

    fn push<F>(&mut self, v: Vertex, close: F) -> Result<PolygonState, PolygonError>
    where
        F: FnOnce(&[Vertex]) -> CanonicalForms,
    {
        if self.is_closed() {
            return Err(PolygonError::InvalidState);
        }
        if self.vertices[0] == v && self.vertices.len() >= MIN_CLOSED_VERTICES {
            self.forms = Some(close(&self.vertices));
            return Ok(PolygonState::Closed);
        }
        if self.vertices.contains(&v) {
            return Err(PolygonError::DuplicateVertex(v));
        }
        self.vertices.push(v);
        Ok(PolygonState::Open)
    }

    #[inline]
    pub fn state(&self) -> PolygonState {
        if self.forms.is_some() {
            PolygonState::Closed
        } else {
            PolygonState::Open
        }
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.forms.is_some()
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn first_vertex(&self) -> Option<Vertex> {
        self.vertices.first().copied()
    }

    #[inline]
    pub fn last_vertex(&self) -> Option<Vertex> {
        self.vertices.last().copied()
    }

    /// Second-to-last vertex, if any.
    #[inline]
    pub fn previous_vertex(&self) -> Option<Vertex> {
        let n = self.vertices.len();
        (n >= 2).then(|| self.vertices[n - 2])
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Shoelace area over the current list, wrapping last → first.
    ///
    /// Returns 0.0 below three vertices. Wrong for self-crossing outlines.
    pub fn area(&self) -> f64 {
        shoelace_area(&self.vertices)
    }

    /// Cached canonical-form set; `NotReady` while Open.
    pub fn canonical_forms(&self) -> Result<&CanonicalForms, PolygonError> {
        self.forms.as_ref().ok_or(PolygonError::NotReady)
    }

    /// Same shape as `other`: both Closed and their canonical forms intersect.
    pub fn same_shape(&self, other: &Polygon) -> bool {
        match (&self.forms, &other.forms) {
            (Some(a), Some(b)) => a.intersects(b),
            _ => false,
        }
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.vertices.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, "]")
    }
}

/// True iff both polygons are Closed and share a canonical form.
#[inline]
pub fn polygons_equal(a: &Polygon, b: &Polygon) -> bool {
    a.same_shape(b)
}

/// `|Σ (x_i·y_{i+1} − x_{i+1}·y_i)| / 2` with `x = col`, `y = row`.
pub fn shoelace_area(vertices: &[Vertex]) -> f64 {
    let n = vertices.len();
    if n < MIN_CLOSED_VERTICES {
        return 0.0;
    }
    let twice: i64 = (0..n)
        .map(|i| {
            let a = vertices[i];
            let b = vertices[(i + 1) % n];
            a.col * b.row - b.col * a.row
        })
        .sum();
    twice.abs() as f64 / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(row: i64, col: i64) -> Vertex {
        Vertex::new(row, col)
    }

    fn closed(pts: &[(i64, i64)]) -> Polygon {
        let mut p = Polygon::new(Vertex::from(pts[0]));
        for &q in &pts[1..] {
            assert_eq!(p.add_vertex(Vertex::from(q)), Ok(PolygonState::Open));
        }
        assert_eq!(p.add_vertex(Vertex::from(pts[0])), Ok(PolygonState::Closed));
        p
    }

    #[test]
    fn new_polygon_is_open_with_one_vertex() {
        let p = Polygon::new(v(2, 3));
        assert_eq!(p.state(), PolygonState::Open);
        assert_eq!(p.vertex_count(), 1);
        assert_eq!(p.first_vertex(), Some(v(2, 3)));
        assert_eq!(p.last_vertex(), Some(v(2, 3)));
        assert_eq!(p.previous_vertex(), None);
        assert_eq!(p.canonical_forms(), Err(PolygonError::NotReady));
    }

    #[test]
    fn closing_repeat_is_not_stored() {
        let p = closed(&[(1, 0), (0, 2), (0, 1), (0, 0)]);
        assert!(p.is_closed());
        assert_eq!(p.vertex_count(), 4);
        assert_eq!(p.last_vertex(), Some(v(0, 0)));
        assert_eq!(p.previous_vertex(), Some(v(0, 1)));
        let forms = p.canonical_forms().unwrap();
        assert!(forms.contains(&[v(1, 0), v(0, 2), v(0, 0)]));
    }

    #[test]
    fn premature_first_repeat_is_a_duplicate() {
        let mut p = Polygon::new(v(0, 0));
        p.add_vertex(v(0, 1)).unwrap();
        assert_eq!(
            p.add_vertex(v(0, 0)),
            Err(PolygonError::DuplicateVertex(v(0, 0)))
        );
        assert_eq!(p.vertex_count(), 2);
        assert!(!p.is_closed());
    }

    #[test]
    fn interior_duplicate_rejected_without_mutation() {
        let mut p = Polygon::new(v(0, 0));
        p.add_vertex(v(0, 1)).unwrap();
        p.add_vertex(v(1, 1)).unwrap();
        assert_eq!(
            p.add_vertex(v(0, 1)),
            Err(PolygonError::DuplicateVertex(v(0, 1)))
        );
        assert_eq!(p.vertices(), &[v(0, 0), v(0, 1), v(1, 1)]);
    }

    #[test]
    fn closed_polygon_rejects_further_vertices() {
        let mut p = closed(&[(0, 0), (0, 2), (2, 0)]);
        let before = p.canonical_forms().unwrap().clone();
        assert_eq!(p.add_vertex(v(5, 5)), Err(PolygonError::InvalidState));
        assert_eq!(p.add_vertex(v(0, 0)), Err(PolygonError::InvalidState));
        assert_eq!(p.vertex_count(), 3);
        assert_eq!(p.canonical_forms().unwrap(), &before);
    }

    #[test]
    fn shoelace_examples() {
        let tri = closed(&[(0, 0), (0, 2), (2, 0)]);
        assert_eq!(tri.area(), 2.0);
        let rect = closed(&[(0, 0), (0, 3), (2, 3), (2, 0)]);
        assert_eq!(rect.area(), 6.0);
        // wraparound applies before formal close
        let mut open = Polygon::new(v(0, 0));
        open.add_vertex(v(0, 2)).unwrap();
        assert_eq!(open.area(), 0.0);
        open.add_vertex(v(2, 0)).unwrap();
        assert_eq!(open.area(), 2.0);
    }

    #[test]
    fn square_equals_its_reversal() {
        let a = closed(&[(0, 0), (0, 2), (2, 2), (2, 0)]);
        let b = closed(&[(0, 0), (2, 0), (2, 2), (0, 2)]);
        assert!(polygons_equal(&a, &b));
        assert!(polygons_equal(&a, &a));
    }

    #[test]
    fn rotated_and_translated_l_shape_is_equal() {
        let l = closed(&[(0, 0), (0, 1), (1, 1), (1, 2), (2, 2), (2, 0)]);
        // quarter turn of the same outline, shifted by (10, 10)
        let turned = closed(&[(10, 12), (11, 12), (11, 11), (12, 11), (12, 10), (10, 10)]);
        assert!(polygons_equal(&l, &turned));
    }

    #[test]
    fn different_shapes_are_not_equal() {
        let tri = closed(&[(0, 0), (0, 2), (2, 0)]);
        let sq = closed(&[(0, 0), (0, 2), (2, 2), (2, 0)]);
        assert!(!polygons_equal(&tri, &sq));
    }

    #[test]
    fn open_polygon_never_equals() {
        let tri = closed(&[(0, 0), (0, 2), (2, 0)]);
        let mut open = Polygon::new(v(0, 0));
        open.add_vertex(v(0, 2)).unwrap();
        open.add_vertex(v(2, 0)).unwrap();
        assert!(!polygons_equal(&tri, &open));
        assert!(!polygons_equal(&open, &open));
    }

    #[test]
    fn extra_colinear_vertex_still_matches() {
        let tri = closed(&[(1, 0), (0, 2), (0, 0)]);
        let with_mid = closed(&[(1, 0), (0, 2), (0, 1), (0, 0)]);
        assert!(polygons_equal(&tri, &with_mid));
    }

    #[test]
    fn diagonal_midpoint_is_not_redundant() {
        // only row/column runs are filtered; a point on a diagonal edge changes the shape
        let tri = closed(&[(0, 0), (0, 2), (2, 0)]);
        let with_diag_mid = closed(&[(0, 0), (0, 2), (1, 1), (2, 0)]);
        assert!(!polygons_equal(&tri, &with_diag_mid));
        assert_eq!(with_diag_mid.area(), tri.area());
    }

    #[test]
    fn degenerate_lines_all_compare_equal() {
        // every vertex of a straight run is filtered, leaving the empty sequence
        let short = closed(&[(0, 0), (0, 1), (0, 2)]);
        let long = closed(&[(4, 0), (5, 0), (6, 0), (7, 0)]);
        assert!(short.canonical_forms().unwrap().contains(&[]));
        assert_eq!(short.canonical_forms().unwrap().len(), 1);
        assert!(polygons_equal(&short, &long));
        assert_eq!(short.area(), 0.0);
    }

    #[test]
    fn from_vertices_validates() {
        assert_eq!(
            Polygon::from_vertices(vec![v(0, 0), v(0, 1)]).unwrap_err(),
            PolygonError::TooFewVertices { count: 2 }
        );
        assert_eq!(
            Polygon::from_vertices(vec![v(0, 0), v(0, 1), v(0, 0)]).unwrap_err(),
            PolygonError::DuplicateVertex(v(0, 0))
        );
        let p = Polygon::from_vertices(vec![v(0, 0), v(0, 2), v(2, 0)]).unwrap();
        assert!(p.is_closed());
        assert!(polygons_equal(&p, &closed(&[(0, 0), (0, 2), (2, 0)])));
    }

    #[test]
    fn cached_close_matches_uncached() {
        let mut cache = FormCache::new();
        let mut p = Polygon::new(v(0, 0));
        for q in [v(0, 3), v(2, 1)] {
            p.add_vertex_cached(q, &mut cache).unwrap();
        }
        assert_eq!(
            p.add_vertex_cached(v(0, 0), &mut cache),
            Ok(PolygonState::Closed)
        );
        assert_eq!(cache.misses(), 1);
        let q = closed(&[(0, 0), (0, 3), (2, 1)]);
        assert_eq!(p.canonical_forms().unwrap(), q.canonical_forms().unwrap());
    }

    #[test]
    fn display_lists_vertices() {
        let p = closed(&[(0, 0), (0, 2), (2, 0)]);
        assert_eq!(p.to_string(), "[(0, 0), (0, 2), (2, 0)]");
        assert_eq!(
            PolygonError::DuplicateVertex(v(1, 2)).to_string(),
            "vertex (1, 2) is already part of the polygon"
        );
    }
}
