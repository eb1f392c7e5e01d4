//! Free-function boundary for presentation layers.
//!
//! A drawing front end only needs these calls; everything else in the crate
//! is reachable through the re-exports below for callers that want more.

pub use crate::canonical::{CanonicalForms, FormCache, VertexSeq};
pub use crate::grid::Vertex;
pub use crate::polygon::{Polygon, PolygonError, PolygonState};

/// Open polygon starting at `first`.
#[inline]
pub fn new_polygon(first: Vertex) -> Polygon {
    Polygon::new(first)
}

/// Add a vertex; returns the state after the call.
#[inline]
pub fn add_vertex(polygon: &mut Polygon, vertex: Vertex) -> Result<PolygonState, PolygonError> {
    polygon.add_vertex(vertex)
}

#[inline]
pub fn is_closed(polygon: &Polygon) -> bool {
    polygon.is_closed()
}

/// Cached canonical-form set; fails with `NotReady` while Open.
#[inline]
pub fn canonical_forms(polygon: &Polygon) -> Result<&CanonicalForms, PolygonError> {
    polygon.canonical_forms()
}

#[inline]
pub fn polygons_equal(a: &Polygon, b: &Polygon) -> bool {
    crate::polygon::polygons_equal(a, b)
}

/// Non-negative Shoelace area.
#[inline]
pub fn area(polygon: &Polygon) -> f64 {
    polygon.area()
}
