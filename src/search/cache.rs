//! Best-move cache keyed by board snapshot
//!
//! Remembers which column the search last preferred at each position it
//! visited. Entries only reorder exploration: a hit moves the cached column
//! to the front of the candidate list, it never replaces scoring.
//!
//! # Example
//!
//! ```
//! use connect4::board::{Board, Cell};
//! use connect4::search::MoveCache;
//!
//! let mut cache = MoveCache::new();
//! let mut board = Board::new();
//! board.drop(3, Cell::Human).unwrap();
//!
//! cache.store(board.snapshot(), 2);
//! assert_eq!(cache.best_move(board.snapshot()), Some(2));
//! ```

use std::collections::HashMap;

use crate::board::Snapshot;

/// Position → best column map.
///
/// Grows for the lifetime of its owner and is never evicted; a single game
/// explores a small state space compared to available memory. Call
/// [`MoveCache::clear`] to start over.
#[derive(Debug, Default, Clone)]
pub struct MoveCache {
    entries: HashMap<Snapshot, usize>,
    probes: u64,
    hits: u64,
}

impl MoveCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the best column recorded for a position.
    pub fn best_move(&mut self, snapshot: Snapshot) -> Option<usize> {
        self.probes += 1;
        let hit = self.entries.get(&snapshot).copied();
        if hit.is_some() {
            self.hits += 1;
        }
        hit
    }

    /// Record the best column for a position, replacing any older entry.
    pub fn store(&mut self, snapshot: Snapshot, column: usize) {
        self.entries.insert(snapshot, column);
    }

    /// Number of positions cached
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry and reset counters
    pub fn clear(&mut self) {
        self.entries.clear();
        self.probes = 0;
        self.hits = 0;
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.len(),
            probes: self.probes,
            hits: self.hits,
        }
    }
}

/// Statistics about cache usage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Positions currently cached
    pub entries: usize,
    /// Lookups performed
    pub probes: u64,
    /// Lookups that found a column
    pub hits: u64,
}

impl CacheStats {
    /// Hit rate in percent
    pub fn hit_rate(&self) -> f64 {
        if self.probes == 0 {
            0.0
        } else {
            self.hits as f64 / self.probes as f64 * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Cell};

    #[test]
    fn test_store_and_probe() {
        let mut cache = MoveCache::new();
        let board = Board::new();

        assert_eq!(cache.best_move(board.snapshot()), None);
        cache.store(board.snapshot(), 3);
        assert_eq!(cache.best_move(board.snapshot()), Some(3));

        let stats = cache.stats();
        assert_eq!(stats.entries, 1);
        assert_eq!(stats.probes, 2);
        assert_eq!(stats.hits, 1);
        assert!((stats.hit_rate() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_store_overwrites() {
        let mut cache = MoveCache::new();
        let snapshot = Board::new().snapshot();
        cache.store(snapshot, 3);
        cache.store(snapshot, 5);
        assert_eq!(cache.best_move(snapshot), Some(5));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_transposed_positions_share_entry() {
        let mut cache = MoveCache::new();

        let mut a = Board::new();
        a.drop(2, Cell::Human).unwrap();
        a.drop(4, Cell::Computer).unwrap();
        cache.store(a.snapshot(), 6);

        let mut b = Board::new();
        b.drop(4, Cell::Computer).unwrap();
        b.drop(2, Cell::Human).unwrap();
        assert_eq!(cache.best_move(b.snapshot()), Some(6));
    }

    #[test]
    fn test_clear() {
        let mut cache = MoveCache::new();
        cache.store(Board::new().snapshot(), 3);
        assert!(!cache.is_empty());

        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.stats().probes, 0);
    }

    #[test]
    fn test_hit_rate_without_probes() {
        let cache = MoveCache::new();
        assert_eq!(cache.stats().hit_rate(), 0.0);
    }
}
