//! Canonical-form sets: the equivalence fingerprint of a closed grid polygon.
//!
//! Purpose
//! - Turn a closed vertex cycle into the set of every filtered relabeling of
//!   every dihedral image of its normalized copy. Two polygons are the same
//!   shape iff their sets share an element.
//!
//! Pipeline
//! - normalize → 8 dihedral images → 2n cyclic/reversed orderings each →
//!   redundant-vertex filter → `BTreeSet`.
//! - `16n` raw candidates, `O(n)` each, so `O(n²)` overall.
//!
//! Code cross-refs: `grid::{normalize, dihedral_images, cyclic_orderings, drop_redundant}`,
//! `polygon::Polygon`

use std::collections::{BTreeSet, HashMap};

use crate::grid::{cyclic_orderings, dihedral_images, drop_redundant, normalize, Vertex};

/// Ordered vertex sequence used as a set element.
pub type VertexSeq = Vec<Vertex>;

/// Set of filtered vertex sequences; structural equality and hashing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CanonicalForms {
    forms: BTreeSet<VertexSeq>,
}

impl CanonicalForms {
    #[inline]
    pub fn len(&self) -> usize {
        self.forms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    #[inline]
    pub fn contains(&self, seq: &[Vertex]) -> bool {
        self.forms.contains(seq)
    }

    pub fn iter(&self) -> impl Iterator<Item = &VertexSeq> {
        self.forms.iter()
    }

    /// True iff the two sets share at least one sequence.
    pub fn intersects(&self, other: &CanonicalForms) -> bool {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small.forms.iter().any(|s| large.forms.contains(s))
    }
}

impl FromIterator<VertexSeq> for CanonicalForms {
    fn from_iter<I: IntoIterator<Item = VertexSeq>>(iter: I) -> Self {
        Self {
            forms: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a CanonicalForms {
    type Item = &'a VertexSeq;
    type IntoIter = std::collections::btree_set::Iter<'a, VertexSeq>;

    fn into_iter(self) -> Self::IntoIter {
        self.forms.iter()
    }
}

/// Canonical-form set of the closed cycle `vertices`.
///
/// Pure and deterministic. Callers guarantee `vertices.len() >= 3`; shorter
/// inputs still produce a (degenerate) set.
pub fn canonical_forms(vertices: &[Vertex]) -> CanonicalForms {
    forms_of_normalized(&normalize(vertices))
}

fn forms_of_normalized(normalized: &[Vertex]) -> CanonicalForms {
    dihedral_images(normalized)
        .iter()
        .flat_map(|image| cyclic_orderings(image))
        .map(|ordering| drop_redundant(&ordering))
        .collect()
}

/// Memo table for `canonical_forms`, keyed by the normalized vertex sequence.
///
/// Translated copies of the same drawing share an entry. Lookups hand out
/// owned clones, so no two polygons alias a set.
#[derive(Clone, Debug, Default)]
pub struct FormCache {
    table: HashMap<VertexSeq, CanonicalForms>,
    hits: u64,
    misses: u64,
}

impl FormCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_compute(&mut self, vertices: &[Vertex]) -> CanonicalForms {
        let key = normalize(vertices);
        if let Some(forms) = self.table.get(&key) {
            self.hits += 1;
            return forms.clone();
        }
        self.misses += 1;
        let forms = forms_of_normalized(&key);
        self.table.insert(key, forms.clone());
        forms
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    #[inline]
    pub fn hits(&self) -> u64 {
        self.hits
    }

    #[inline]
    pub fn misses(&self) -> u64 {
        self.misses
    }
}
