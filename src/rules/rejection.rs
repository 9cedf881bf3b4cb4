//! Rejected transitions.
//!
//! A rule violation is never a crash: the engine returns a `Rejection`
//! and the caller keeps its current state. Every variant carries enough
//! context for the presentation layer to explain the refusal.

use thiserror::Error;

use crate::core::RowColor;

/// Why the rule engine refused an action.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("{color} row is locked")]
    RowLocked { color: RowColor },

    #[error("{value} is not part of the {color} row")]
    UnknownValue { color: RowColor, value: u8 },

    #[error("{value} is already marked in the {color} row")]
    AlreadyMarked { color: RowColor, value: u8 },

    #[error("{value} lies left of {rightmost}, the rightmost mark in the {color} row")]
    OutOfOrder { color: RowColor, value: u8, rightmost: u8 },

    #[error("{value} is not marked in the {color} row")]
    NotMarked { color: RowColor, value: u8 },

    #[error("only the last mark ({last}) of the {color} row can be removed, not {value}")]
    NotLastMark { color: RowColor, value: u8, last: u8 },

    #[error("{color} row is already locked")]
    AlreadyLocked { color: RowColor },

    #[error("{color} row is not locked")]
    NotLocked { color: RowColor },

    #[error("{color} row needs at least {required} marks to lock, it has {marks}")]
    InsufficientMarks { color: RowColor, marks: usize, required: usize },

    #[error("{color} row cannot lock before its end value {end_value} is marked")]
    EndValueNotMarked { color: RowColor, end_value: u8 },

    #[error("{color} row was locked for good")]
    LockIsPermanent { color: RowColor },

    #[error("{color} row locks and unlocks through its end value")]
    LockingIsAutomatic { color: RowColor },

    #[error("penalty count {current} cannot change by {delta} (allowed 0..={max})")]
    PenaltyOutOfRange { current: u8, delta: i8, max: u8 },

    #[error("there is no penalty box {slot} (boxes are 1..={max})")]
    InvalidPenaltySlot { slot: u8, max: u8 },
}

impl Rejection {
    /// The row involved, if the rejection concerns a single row.
    #[must_use]
    pub fn color(&self) -> Option<RowColor> {
        match *self {
            Rejection::RowLocked { color }
            | Rejection::UnknownValue { color, .. }
            | Rejection::AlreadyMarked { color, .. }
            | Rejection::OutOfOrder { color, .. }
            | Rejection::NotMarked { color, .. }
            | Rejection::NotLastMark { color, .. }
            | Rejection::AlreadyLocked { color }
            | Rejection::NotLocked { color }
            | Rejection::InsufficientMarks { color, .. }
            | Rejection::EndValueNotMarked { color, .. }
            | Rejection::LockIsPermanent { color }
            | Rejection::LockingIsAutomatic { color } => Some(color),
            Rejection::PenaltyOutOfRange { .. } | Rejection::InvalidPenaltySlot { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let out_of_order = Rejection::OutOfOrder { color: RowColor::Red, value: 4, rightmost: 9 };
        assert_eq!(
            out_of_order.to_string(),
            "4 lies left of 9, the rightmost mark in the red row"
        );

        let insufficient = Rejection::InsufficientMarks { color: RowColor::Blue, marks: 3, required: 5 };
        assert_eq!(
            insufficient.to_string(),
            "blue row needs at least 5 marks to lock, it has 3"
        );

        let penalty = Rejection::PenaltyOutOfRange { current: 4, delta: 1, max: 4 };
        assert_eq!(penalty.to_string(), "penalty count 4 cannot change by 1 (allowed 0..=4)");
    }

    #[test]
    fn test_color() {
        assert_eq!(Rejection::RowLocked { color: RowColor::Green }.color(), Some(RowColor::Green));
        assert_eq!(Rejection::InvalidPenaltySlot { slot: 9, max: 4 }.color(), None);
    }
}
