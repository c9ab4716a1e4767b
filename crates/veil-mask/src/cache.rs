//! FIFO-bounded pool of generated mask bitmaps.

use std::sync::Arc;

use indexmap::IndexMap;

use crate::bitmap::MaskBitmap;
use crate::key::MaskKey;

/// A bounded pool of generated bitmaps keyed by [`MaskKey`].
///
/// Eviction is insertion-order FIFO, not LRU: when the pool is full the
/// **earliest-inserted** entry is removed, regardless of how recently it
/// was hit. This trades hit-rate optimality for a trivially correct
/// bound — the accepted tradeoff for this pipeline, where keys churn
/// with emitter movement anyway.
///
/// Entries are `Arc`-shared: a consumer holding a bitmap keeps it alive
/// after eviction.
#[derive(Debug)]
pub struct MaskCache {
    entries: IndexMap<MaskKey, Arc<MaskBitmap>>,
    capacity: usize,
    hits: u64,
    misses: u64,
    evictions: u64,
}

impl MaskCache {
    /// Create a cache bounded to `capacity` entries (minimum 1).
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: IndexMap::new(),
            capacity: capacity.max(1),
            hits: 0,
            misses: 0,
            evictions: 0,
        }
    }

    /// Look up a bitmap, counting the hit or miss.
    pub fn get(&mut self, key: &MaskKey) -> Option<Arc<MaskBitmap>> {
        match self.entries.get(key) {
            Some(bitmap) => {
                self.hits += 1;
                Some(Arc::clone(bitmap))
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    /// Insert a freshly generated bitmap, evicting the oldest entry if
    /// the pool is at capacity.
    ///
    /// Re-inserting an existing key replaces the value without changing
    /// the key's insertion position.
    pub fn insert(&mut self, key: MaskKey, bitmap: Arc<MaskBitmap>) {
        if !self.entries.contains_key(&key) && self.entries.len() >= self.capacity {
            // shift_remove preserves the insertion order of the rest,
            // keeping FIFO semantics intact for future evictions.
            self.entries.shift_remove_index(0);
            self.evictions += 1;
        }
        self.entries.insert(key, bitmap);
    }

    /// Number of cached bitmaps.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the pool is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The configured capacity bound.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether a key is currently cached, without counting a hit.
    pub fn contains(&self, key: &MaskKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Drop every entry. Counters are preserved.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Cumulative lookup hits.
    pub fn hit_count(&self) -> u64 {
        self.hits
    }

    /// Cumulative lookup misses.
    pub fn miss_count(&self) -> u64 {
        self.misses
    }

    /// Cumulative FIFO evictions.
    pub fn eviction_count(&self) -> u64 {
        self.evictions
    }
}
