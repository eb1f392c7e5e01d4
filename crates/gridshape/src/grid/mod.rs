//! Integer grid geometry: vertices, dihedral transforms, relabelings, filtering.
//!
//! Purpose
//! - Provide the leaf building blocks of the canonicalization engine as pure
//!   functions over `&[Vertex]`, each testable on its own.
//!
//! Code cross-refs: `canonical::canonical_forms`, `polygon::Polygon`

mod filter;
mod permute;
mod transform;
mod types;

pub use filter::{drop_redundant, has_redundant};
pub use permute::{cyclic_orderings, rotate_start};
pub use transform::{apply_chain, apply_step, dihedral_images, normalize, Step, DIHEDRAL};
pub use types::{extremes, Extremes, GridAffine, Vertex};
