//! Position keys and the repetition table.

use std::collections::HashMap;

use tracing::debug;

use crate::board::Board;
use crate::color::Color;
use crate::square::Square;

const KEY_LEN: usize = Square::COUNT * 2 + 2;

/// Total serialization of a position: every cell, the side to move, and the
/// castling flags. Equal boards with equal side and rights give equal keys.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PositionKey([u8; KEY_LEN]);

impl PositionKey {
    /// Build the key for `board` with `side` to move.
    pub fn new(board: &Board, side: Color) -> PositionKey {
        let mut bytes = [0u8; KEY_LEN];
        for sq in Square::all() {
            let [a, b] = board.cell(sq).key_bytes();
            bytes[sq.index() * 2] = a;
            bytes[sq.index() * 2 + 1] = b;
        }
        bytes[KEY_LEN - 2] = side.tag();
        bytes[KEY_LEN - 1] = board.castling().bits();
        PositionKey(bytes)
    }
}

impl std::fmt::Debug for PositionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cells = String::from_utf8_lossy(&self.0[..KEY_LEN - 2]);
        write!(
            f,
            "PositionKey({cells}|{}|{:04b})",
            self.0[KEY_LEN - 2] as char,
            self.0[KEY_LEN - 1]
        )
    }
}

/// Occurrence counts per position key. Counts only grow.
#[derive(Debug, Clone, Default)]
pub struct RepetitionTable {
    counts: HashMap<PositionKey, u32>,
}

impl RepetitionTable {
    /// Maximum number of distinct keys tracked. Once full, new keys are not
    /// recorded; existing keys keep counting.
    pub const CAPACITY: usize = 8192;

    pub fn new() -> RepetitionTable {
        RepetitionTable::default()
    }

    /// Number of times `key` has been recorded.
    #[inline]
    pub fn count(&self, key: &PositionKey) -> u32 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Record one more occurrence of `key` and return the new count.
    pub fn increment(&mut self, key: PositionKey) -> u32 {
        if let Some(count) = self.counts.get_mut(&key) {
            *count += 1;
            return *count;
        }
        if self.counts.len() >= Self::CAPACITY {
            debug!(capacity = Self::CAPACITY, "repetition table full, key not recorded");
            return 0;
        }
        self.counts.insert(key, 1);
        1
    }

    /// Number of distinct keys recorded.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
