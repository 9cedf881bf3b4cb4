//! Game state: marks, locks and penalties.
//!
//! `GameState` is an immutable value. Rule transitions never modify a
//! state in place; they return a new one. Mark sequences use `im`
//! persistent vectors, so cloning a state is O(1) and the previous
//! state stays valid for the caller to keep or discard.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::color::{ColorMap, RowColor};

/// Marked values of one row, in the order they were marked.
pub type RowMarks = Vector<u8>;

/// Marks, locks and penalty count of a scorecard.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    marks: ColorMap<RowMarks>,
    locks: ColorMap<bool>,
    penalties: u8,
}

impl GameState {
    /// Create an empty scorecard: no marks, no locks, no penalties.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // === Queries ===

    /// Marked values of a row, in marking order.
    #[must_use]
    pub fn marks(&self, color: RowColor) -> &RowMarks {
        &self.marks[color]
    }

    /// Number of marks in a row (lock bonus not included).
    #[must_use]
    pub fn mark_count(&self, color: RowColor) -> usize {
        self.marks[color].len()
    }

    /// Whether `value` is marked in a row.
    #[must_use]
    pub fn is_marked(&self, color: RowColor, value: u8) -> bool {
        self.marks[color].contains(&value)
    }

    /// The most recently marked value of a row.
    #[must_use]
    pub fn last_mark(&self, color: RowColor) -> Option<u8> {
        self.marks[color].last().copied()
    }

    /// Whether a row is locked.
    #[must_use]
    pub fn is_locked(&self, color: RowColor) -> bool {
        self.locks[color]
    }

    /// Number of locked rows.
    #[must_use]
    pub fn locked_count(&self) -> usize {
        self.locks.values().filter(|&&locked| locked).count()
    }

    /// Number of penalty marks.
    #[must_use]
    pub fn penalties(&self) -> u8 {
        self.penalties
    }

    /// Whether nothing has been marked, locked or penalized yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.penalties == 0
            && self.marks.values().all(Vector::is_empty)
            && self.locks.values().all(|&locked| !locked)
    }

    // === Transitions (crate-internal; legality is the rule engine's job) ===

    pub(crate) fn with_mark(&self, color: RowColor, value: u8) -> Self {
        let mut next = self.clone();
        next.marks[color].push_back(value);
        next
    }

    pub(crate) fn without_last_mark(&self, color: RowColor) -> Self {
        let mut next = self.clone();
        next.marks[color].pop_back();
        next
    }

    pub(crate) fn with_lock(&self, color: RowColor, locked: bool) -> Self {
        let mut next = self.clone();
        next.locks[color] = locked;
        next
    }

    pub(crate) fn with_penalties(&self, penalties: u8) -> Self {
        let mut next = self.clone();
        next.penalties = penalties;
        next
    }
}
