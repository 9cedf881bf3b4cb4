//! Action representation.
//!
//! Every input from the presentation layer is a discrete `Action`. The
//! rule engine maps an action onto the current state and either accepts
//! it (yielding a new state) or rejects it (leaving the state unchanged).

use serde::{Deserialize, Serialize};

use super::color::RowColor;
use super::config::Variant;

/// A single scorecard action.
///
/// ## Example
///
/// ```
/// use qwixx_scorecard::core::{Action, RowColor};
///
/// let mark = Action::Mark { color: RowColor::Red, value: 5 };
/// assert_eq!(mark.color(), Some(RowColor::Red));
/// assert!(Action::Reset.color().is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Action {
    /// Cross off a value.
    Mark { color: RowColor, value: u8 },
    /// Remove the most recent mark of a row.
    Unmark { color: RowColor, value: u8 },
    /// Close a row.
    Lock { color: RowColor },
    /// Reopen a row.
    Unlock { color: RowColor },
    /// Add (positive) or remove (negative) penalties.
    AdjustPenalty { delta: i8 },
    /// Start a new game with the same variant.
    Reset,
    /// Start a new game with another variant.
    SelectVariant { variant: Variant },
}

impl Action {
    /// The row this action targets, if any.
    #[must_use]
    pub fn color(&self) -> Option<RowColor> {
        match *self {
            Action::Mark { color, .. }
            | Action::Unmark { color, .. }
            | Action::Lock { color }
            | Action::Unlock { color } => Some(color),
            Action::AdjustPenalty { .. } | Action::Reset | Action::SelectVariant { .. } => None,
        }
    }

    /// Whether the action replaces the whole game state.
    #[must_use]
    pub fn is_new_game(&self) -> bool {
        matches!(self, Action::Reset | Action::SelectVariant { .. })
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Mark { color, value } => write!(f, "mark {color} {value}"),
            Action::Unmark { color, value } => write!(f, "unmark {color} {value}"),
            Action::Lock { color } => write!(f, "lock {color}"),
            Action::Unlock { color } => write!(f, "unlock {color}"),
            Action::AdjustPenalty { delta } => write!(f, "penalty {delta:+}"),
            Action::Reset => f.write_str("reset"),
            Action::SelectVariant { variant } => write!(f, "variant {variant}"),
        }
    }
}

/// A recorded action with its outcome, for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The action requested.
    pub action: Action,

    /// Whether the engine accepted it.
    pub accepted: bool,

    /// Sequence number within the session (for ordering).
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(action: Action, accepted: bool, sequence: u32) -> Self {
        Self {
            action,
            accepted,
            sequence,
        }
    }
}
