use crate::core::geo::TileCoord;
use lru::LruCache;
use std::num::NonZeroUsize;

/// In-memory tile store with LRU eviction.
///
/// Generic over the stored value so the widget can keep GPU textures while
/// tests keep plain bytes.
pub struct TileCache<T> {
    cache: LruCache<TileCoord, T>,
}

impl<T> TileCache<T> {
    /// A capacity of zero is bumped to one
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: LruCache::new(capacity),
        }
    }

    /// Looks up a tile and marks it recently used
    pub fn get(&mut self, coord: &TileCoord) -> Option<&T> {
        self.cache.get(coord)
    }

    /// Looks up a tile without touching its recency
    pub fn peek(&self, coord: &TileCoord) -> Option<&T> {
        self.cache.peek(coord)
    }

    /// Stores a tile; returns the coordinate evicted to make room, if any
    pub fn insert(&mut self, coord: TileCoord, value: T) -> Option<TileCoord> {
        match self.cache.push(coord, value) {
            Some((evicted, _)) if evicted != coord => Some(evicted),
            _ => None,
        }
    }

    pub fn contains(&self, coord: &TileCoord) -> bool {
        self.cache.contains(coord)
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.cache.cap().get()
    }

    pub fn clear(&mut self) {
        self.cache.clear();
    }
}
