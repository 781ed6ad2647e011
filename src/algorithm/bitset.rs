use bitvec::prelude::*;
use std::fmt;

use crate::spatial::tiles::VariantId;

/// Fixed-size set of variant ids used as a cell's candidate set
///
/// Membership is stored one bit per variant, so intersection never counts a
/// repeated id twice and iteration is always in ascending id order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CandidateSet {
    bits: BitVec,
}

impl CandidateSet {
    /// Create a set with no variants present
    pub fn new(variant_count: usize) -> Self {
        Self {
            bits: bitvec![0; variant_count],
        }
    }

    /// Create a set containing every variant
    pub fn all(variant_count: usize) -> Self {
        Self {
            bits: bitvec![1; variant_count],
        }
    }

    /// Create a set from a list of ids, ignoring duplicates and out-of-range ids
    pub fn from_ids(ids: &[VariantId], variant_count: usize) -> Self {
        let mut set = Self::new(variant_count);
        for &id in ids {
            set.insert(id);
        }
        set
    }

    /// Insert a variant id
    pub fn insert(&mut self, id: VariantId) {
        if id < self.bits.len() {
            self.bits.set(id, true);
        }
    }

    /// Test variant membership
    pub fn contains(&self, id: VariantId) -> bool {
        self.bits.get(id).as_deref() == Some(&true)
    }

    /// Keep only the variants also listed in `ids`
    pub fn retain_listed(&mut self, ids: &[VariantId]) {
        let other = Self::from_ids(ids, self.bits.len());
        self.intersect_with(&other);
    }

    /// Intersect this set with another in-place
    pub fn intersect_with(&mut self, other: &Self) {
        self.bits &= &other.bits;
    }

    /// Create a new set containing the intersection
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.intersect_with(other);
        result
    }

    /// Test if no variants are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count variants in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// The `n`-th member in ascending id order
    pub fn nth(&self, n: usize) -> Option<VariantId> {
        self.bits.iter_ones().nth(n)
    }

    /// Extract all variant ids in ascending order
    pub fn to_vec(&self) -> Vec<VariantId> {
        self.bits.iter_ones().collect()
    }
}

impl fmt::Display for CandidateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CandidateSet({} variants: {:?})",
            self.count(),
            self.to_vec()
        )
    }
}
