//! Weighted random sampling without replacement
//!
//! Each pick walks the cumulative weights once, so a pick costs O(n). Radio
//! pools are capped at a few thousand songs, which keeps this well below the
//! cost of fetching the pool in the first place.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{RadioError, RadioResult};

#[derive(Debug)]
struct Entry<T> {
    item: T,
    weight: u32,
}

/// Draws items with probability proportional to their weight, removing each
/// drawn item from the pool
///
/// Items added with weight zero are kept but can never be drawn. [`len`]
/// and [`is_empty`] count only drawable items.
///
/// [`len`]: WeightedChooser::len
/// [`is_empty`]: WeightedChooser::is_empty
#[derive(Debug)]
pub struct WeightedChooser<T, R = StdRng> {
    entries: Vec<Entry<T>>,
    total_weight: u64,
    selectable: usize,
    rng: R,
}

impl<T> WeightedChooser<T, StdRng> {
    /// Create an empty chooser seeded from OS entropy
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl<T> Default for WeightedChooser<T, StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, R: Rng> WeightedChooser<T, R> {
    /// Create an empty chooser drawing from the given random source
    pub fn with_rng(rng: R) -> Self {
        Self {
            entries: Vec::new(),
            total_weight: 0,
            selectable: 0,
            rng,
        }
    }

    /// Create an empty chooser with room for `capacity` items
    pub fn with_capacity(capacity: usize, rng: R) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            ..Self::with_rng(rng)
        }
    }

    pub fn add(&mut self, item: T, weight: u32) {
        if weight > 0 {
            self.total_weight += u64::from(weight);
            self.selectable += 1;
        }
        self.entries.push(Entry { item, weight });
    }

    /// Remove and return one item, chosen proportionally to its weight
    ///
    /// # Errors
    /// Returns `RadioError::EmptyPool` once every drawable item has been picked.
    pub fn pick(&mut self) -> RadioResult<T> {
        if self.total_weight == 0 {
            return Err(RadioError::EmptyPool);
        }

        let target = self.rng.gen_range(0..self.total_weight);
        let mut cumulative = 0u64;
        let index = self
            .entries
            .iter()
            .position(|entry| {
                cumulative += u64::from(entry.weight);
                target < cumulative
            })
            .ok_or(RadioError::EmptyPool)?;

        let entry = self.entries.remove(index);
        self.total_weight -= u64::from(entry.weight);
        self.selectable -= 1;
        Ok(entry.item)
    }

    /// Number of items that can still be picked
    pub fn len(&self) -> usize {
        self.selectable
    }

    pub fn is_empty(&self) -> bool {
        self.selectable == 0
    }

    /// Sum of the weights of all remaining items
    pub fn total_weight(&self) -> u64 {
        self.total_weight
    }
}
