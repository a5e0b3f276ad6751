//! Once-per-layout random ordering of shape ids
//!
//! Taking a prefix of a fixed random order gives a selection that grows and
//! shrinks one id at a time as the prefix length changes.

use bitvec::prelude::*;
use rand::Rng;

use crate::partition::engine::BaseShape;

/// Unbiased in-place Fisher-Yates shuffle
///
/// Walks `i` from the last index down to 1 and swaps it with a uniform
/// `j` in `[0, i]`.
pub fn fisher_yates<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

/// Shuffled sequence of shape ids tied to a single layout
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StableIndexOrder {
    ids: Vec<usize>,
}

impl StableIndexOrder {
    /// Shuffle the positions of `shapes` and map them back to shape ids
    pub fn shuffled<R: Rng + ?Sized>(shapes: &[BaseShape], rng: &mut R) -> Self {
        let mut positions: Vec<usize> = (0..shapes.len()).collect();
        fisher_yates(&mut positions, rng);

        let ids = positions
            .iter()
            .filter_map(|&position| shapes.get(position).map(|shape| shape.id))
            .collect();
        Self { ids }
    }

    /// Wrap an explicit id order
    pub const fn from_ids(ids: Vec<usize>) -> Self {
        Self { ids }
    }

    /// All ids in order
    pub fn as_slice(&self) -> &[usize] {
        &self.ids
    }

    /// Number of ids
    pub const fn len(&self) -> usize {
        self.ids.len()
    }

    /// True when the order holds no ids
    pub const fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// The first `count` ids, or all of them if `count` exceeds the length
    pub fn first(&self, count: usize) -> &[usize] {
        self.ids.get(..count).unwrap_or(&self.ids)
    }

    /// Membership mask over ids `0..capacity` for the first `count` ids
    ///
    /// Ids at or beyond `capacity` are ignored.
    pub fn prefix_mask(&self, count: usize, capacity: usize) -> BitVec {
        let mut mask = bitvec![0; capacity];
        for &id in self.first(count) {
            if id < capacity {
                mask.set(id, true);
            }
        }
        mask
    }
}
