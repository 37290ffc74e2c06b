//! Transposition Table for caching search results
//!
//! The transposition table stores search results indexed by board hash,
//! enabling reuse of previous search results for positions we've seen before.
//!
//! # Example
//!
//! ```
//! use othello::board::Pos;
//! use othello::search::{EntryType, TranspositionTable};
//!
//! let mut tt = TranspositionTable::new(1 << 12);
//!
//! // Store a search result
//! let hash = 0x123456789ABCDEF0;
//! tt.store(hash, 5, 100, EntryType::Exact, Some(Pos::new(2, 3)));
//!
//! // Probe for the result
//! assert_eq!(tt.probe(hash, 5, -1000, 1000), Some(100));
//! assert_eq!(tt.best_move(hash), Some(Pos::new(2, 3)));
//! ```

use crate::board::Pos;

/// Entry type for score interpretation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryType {
    /// Exact score - the search completed inside the window
    Exact,
    /// Lower bound - score >= stored value (beta cutoff)
    LowerBound,
    /// Upper bound - score <= stored value (alpha fail-low)
    UpperBound,
}

/// Transposition table entry
#[derive(Debug, Clone, Copy)]
pub struct TTEntry {
    /// Zobrist hash of the position
    pub hash: u64,
    /// Remaining search depth for this entry
    pub depth: i8,
    /// Evaluation score from the side to move
    pub score: i32,
    /// Type of score (exact, lower bound, upper bound)
    pub entry_type: EntryType,
    /// Best move found for this position
    pub best_move: Option<Pos>,
    /// Search generation that wrote the entry
    pub generation: u8,
}

/// Transposition table for caching search results.
///
/// Direct-mapped: each hash maps to exactly one slot. Scores are only
/// trusted from the current search generation; entries left by earlier
/// searches still supply best moves for ordering.
pub struct TranspositionTable {
    entries: Vec<Option<TTEntry>>,
    size: usize,
    generation: u8,
}

impl TranspositionTable {
    /// Create a table with `capacity` slots (at least one).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let size = capacity.max(1);
        Self {
            entries: vec![None; size],
            size,
            generation: 0,
        }
    }

    #[inline]
    fn index(&self, hash: u64) -> usize {
        (hash % self.size as u64) as usize
    }

    /// Number of slots
    #[inline]
    pub fn capacity(&self) -> usize {
        self.size
    }

    /// Current search generation
    #[inline]
    pub fn generation(&self) -> u8 {
        self.generation
    }

    /// Start a new search: entries written so far become stale.
    ///
    /// When the counter wraps, old entries would carry a current-looking
    /// generation again, so the table is emptied.
    pub fn new_search(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            self.entries.fill(None);
        }
    }

    /// Entry stored for exactly this hash, from any generation.
    #[must_use]
    pub fn lookup(&self, hash: u64) -> Option<&TTEntry> {
        self.entries[self.index(hash)]
            .as_ref()
            .filter(|e| e.hash == hash)
    }

    /// Probe for a score usable at `depth` within `(alpha, beta)`.
    ///
    /// Returns the stored score only if the entry belongs to the current
    /// generation, was searched at least as deep, and its bound permits
    /// a cutoff against the window.
    #[must_use]
    pub fn probe(&self, hash: u64, depth: i8, alpha: i32, beta: i32) -> Option<i32> {
        let entry = self.lookup(hash)?;
        if entry.generation != self.generation || entry.depth < depth {
            return None;
        }

        match entry.entry_type {
            EntryType::Exact => Some(entry.score),
            EntryType::LowerBound if entry.score >= beta => Some(entry.score),
            EntryType::UpperBound if entry.score <= alpha => Some(entry.score),
            _ => None,
        }
    }

    /// Best move from the table for move ordering.
    ///
    /// Unlike [`probe`](Self::probe) this ignores depth and generation.
    #[must_use]
    pub fn best_move(&self, hash: u64) -> Option<Pos> {
        self.lookup(hash).and_then(|e| e.best_move)
    }

    /// Store a position in the table.
    ///
    /// Same position: replaced iff the new depth is at least the stored one.
    /// Different position in the slot: replaced iff the resident entry is
    /// from an older generation or the new depth is at least as deep.
    pub fn store(
        &mut self,
        hash: u64,
        depth: i8,
        score: i32,
        entry_type: EntryType,
        best_move: Option<Pos>,
    ) {
        let idx = self.index(hash);
        let generation = self.generation;

        let should_replace = match &self.entries[idx] {
            None => true,
            Some(e) if e.hash == hash => depth >= e.depth || e.generation != generation,
            Some(e) => e.generation != generation || depth >= e.depth,
        };

        if should_replace {
            self.entries[idx] = Some(TTEntry {
                hash,
                depth,
                score,
                entry_type,
                best_move,
                generation,
            });
        }
    }

    /// Clear all entries in the table.
    ///
    /// Called when starting a new game.
    pub fn clear(&mut self) {
        self.entries.fill(None);
        self.generation = 0;
    }

    /// Statistics about table usage.
    #[must_use]
    pub fn stats(&self) -> TTStats {
        let used = self.entries.iter().filter(|e| e.is_some()).count();
        TTStats {
            size: self.size,
            used,
            usage_percent: (used as f64 / self.size as f64 * 100.0) as u8,
        }
    }
}

/// Statistics about transposition table usage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TTStats {
    /// Total number of slots in the table
    pub size: usize,
    /// Number of slots currently occupied
    pub used: usize,
    /// Percentage of table in use (0-100)
    pub usage_percent: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tt_store_probe_exact() {
        let mut tt = TranspositionTable::new(1024);
        let hash = 0xDEAD_BEEF;

        tt.store(hash, 4, 42, EntryType::Exact, Some(Pos::new(2, 3)));
        assert_eq!(tt.probe(hash, 4, -100, 100), Some(42));
        assert_eq!(tt.probe(hash, 3, -100, 100), Some(42));
    }

    #[test]
    fn test_tt_depth_requirement() {
        let mut tt = TranspositionTable::new(1024);
        let hash = 12345;

        tt.store(hash, 3, 10, EntryType::Exact, None);
        assert_eq!(tt.probe(hash, 4, -100, 100), None);
    }

    #[test]
    fn test_tt_lower_bound_cutoff() {
        let mut tt = TranspositionTable::new(1024);
        let hash = 999;

        tt.store(hash, 5, 80, EntryType::LowerBound, None);
        // 80 >= beta(50): usable
        assert_eq!(tt.probe(hash, 5, -50, 50), Some(80));
        // 80 < beta(100): not usable
        assert_eq!(tt.probe(hash, 5, -100, 100), None);
    }

    #[test]
    fn test_tt_upper_bound_cutoff() {
        let mut tt = TranspositionTable::new(1024);
        let hash = 777;

        tt.store(hash, 5, -80, EntryType::UpperBound, None);
        assert_eq!(tt.probe(hash, 5, -50, 50), Some(-80));
        assert_eq!(tt.probe(hash, 5, -100, 100), None);
    }

    #[test]
    fn test_tt_hash_mismatch() {
        let mut tt = TranspositionTable::new(16);
        tt.store(3, 5, 7, EntryType::Exact, Some(Pos::new(0, 0)));

        // 19 maps to the same slot but is a different position
        assert!(tt.lookup(19).is_none());
        assert_eq!(tt.probe(19, 1, -100, 100), None);
        assert_eq!(tt.best_move(19), None);
    }

    #[test]
    fn test_tt_replacement_same_hash() {
        let mut tt = TranspositionTable::new(1024);
        let hash = 42;

        tt.store(hash, 5, 10, EntryType::Exact, None);
        tt.store(hash, 3, 20, EntryType::Exact, None);
        assert_eq!(tt.lookup(hash).unwrap().score, 10, "shallower must not replace");

        tt.store(hash, 5, 30, EntryType::Exact, None);
        assert_eq!(tt.lookup(hash).unwrap().score, 30, "equal depth replaces");

        tt.store(hash, 7, 40, EntryType::Exact, None);
        assert_eq!(tt.lookup(hash).unwrap().score, 40);
    }

    #[test]
    fn test_tt_replacement_collision() {
        let mut tt = TranspositionTable::new(16);

        tt.store(1, 6, 10, EntryType::Exact, None);
        tt.store(17, 2, 20, EntryType::Exact, None);
        assert!(tt.lookup(1).is_some(), "deeper resident survives");

        tt.new_search();
        tt.store(17, 2, 20, EntryType::Exact, None);
        assert!(tt.lookup(1).is_none(), "stale resident is evicted");
        assert_eq!(tt.lookup(17).unwrap().score, 20);
    }

    #[test]
    fn test_tt_stale_scores_not_trusted() {
        let mut tt = TranspositionTable::new(1024);
        tt.store(5, 8, 50, EntryType::Exact, Some(Pos::new(4, 5)));
        tt.new_search();

        assert_eq!(tt.probe(5, 1, -100, 100), None);
        assert_eq!(tt.best_move(5), Some(Pos::new(4, 5)));
    }

    #[test]
    fn test_tt_generation_wrap_empties_table() {
        let mut tt = TranspositionTable::new(1024);
        tt.store(5, 8, 50, EntryType::Exact, Some(Pos::new(4, 5)));
        let written = tt.generation();

        for _ in 0..256 {
            tt.new_search();
        }
        assert_eq!(tt.generation(), written);
        assert_eq!(tt.probe(5, 1, -100, 100), None);
        assert!(tt.lookup(5).is_none());
    }

    #[test]
    fn test_tt_clear() {
        let mut tt = TranspositionTable::new(1024);
        tt.store(1, 1, 1, EntryType::Exact, None);
        tt.store(2, 1, 2, EntryType::Exact, None);
        tt.clear();

        assert!(tt.lookup(1).is_none());
        assert_eq!(tt.stats().used, 0);
        assert_eq!(tt.generation(), 0);
    }

    #[test]
    fn test_tt_stats() {
        let mut tt = TranspositionTable::new(100);
        for h in 0..25 {
            tt.store(h, 1, 0, EntryType::Exact, None);
        }
        let stats = tt.stats();
        assert_eq!(stats.size, 100);
        assert_eq!(stats.used, 25);
        assert_eq!(stats.usage_percent, 25);
    }

    #[test]
    fn test_tt_minimum_size() {
        let tt = TranspositionTable::new(0);
        assert_eq!(tt.capacity(), 1);
    }
}
