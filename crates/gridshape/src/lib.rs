//! Shape recognition for polygons drawn on an integer grid.
//!
//! Two drawings count as the same shape when one maps onto the other by
//! translation, a quarter-turn or reflection, a different starting vertex, or
//! reversed traversal. On close, each polygon computes a canonical-form set
//! once; two polygons are equal iff their sets intersect.
//!
//! Layout
//! - `grid`: vertices, dihedral transforms, relabelings, redundant-vertex filter.
//! - `canonical`: the canonical-form set and its memo table.
//! - `polygon`: Open/Closed state machine, area, equality.
//! - `api`: free-function boundary for front ends.
//! - `sheet`, `palette`: session model of a drawing board (no rendering).
//! - `catalog`: distinct axis-anchored triangles.
//!
//! Self-crossing outlines are not detected; area and equality assume simple
//! polygons.

pub mod api;
pub mod canonical;
pub mod catalog;
pub mod grid;
pub mod palette;
pub mod polygon;
pub mod sheet;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use canonical::{canonical_forms, CanonicalForms, FormCache, VertexSeq};
pub use grid::Vertex;
pub use polygon::{polygons_equal, Polygon, PolygonError, PolygonState};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::canonical::{canonical_forms, CanonicalForms, FormCache};
    pub use crate::catalog::triangle_catalog;
    pub use crate::grid::{Step, Vertex, DIHEDRAL};
    pub use crate::palette::{Color, ColorPolicy, Palette};
    pub use crate::polygon::{polygons_equal, Polygon, PolygonError, PolygonState};
    pub use crate::sheet::{ClickOutcome, Figure, Sheet, SheetCfg, SheetError};
}

#[cfg(test)]
mod tests_props;
