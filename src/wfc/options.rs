use bitvec::prelude::*;
use std::fmt;

/// Fixed-size bitset over tile indices
///
/// Tracks which tiles remain possible at a grid position. Indices are
/// zero-based and match positions in the owning catalog. Provides O(1)
/// membership testing and word-wise set operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionSet {
    bits: BitVec,
    tile_count: usize,
}

impl OptionSet {
    /// Create a set with no tiles present
    pub fn new(tile_count: usize) -> Self {
        Self {
            bits: bitvec![0; tile_count],
            tile_count,
        }
    }

    /// Create a set containing every tile index below `tile_count`
    pub fn full(tile_count: usize) -> Self {
        Self {
            bits: bitvec![1; tile_count],
            tile_count,
        }
    }

    /// Insert a tile index
    ///
    /// Indices at or beyond the set capacity are ignored
    pub fn insert(&mut self, tile: usize) {
        if tile < self.tile_count {
            self.bits.set(tile, true);
        }
    }

    /// Test tile membership
    pub fn contains(&self, tile: usize) -> bool {
        self.bits.get(tile).as_deref() == Some(&true)
    }

    /// Remove every tile from the set
    pub fn clear(&mut self) {
        self.bits.fill(false);
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

    /// Merge another set into this one in-place
    pub fn union_with(&mut self, other: &Self) {
        self.bits |= &other.bits;
    }

    /// Test if no tiles are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count tiles in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// The single remaining tile, if exactly one is present
    pub fn sole(&self) -> Option<usize> {
        if self.count() == 1 {
            self.bits.first_one()
        } else {
            None
        }
    }

    /// Extract all tile indices in ascending order
    pub fn to_vec(&self) -> Vec<usize> {
        self.bits.iter_ones().collect()
    }
}

impl fmt::Display for OptionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OptionSet({} tiles: {:?})", self.count(), self.to_vec())
    }
}
