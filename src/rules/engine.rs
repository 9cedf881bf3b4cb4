//! Rule engine: legality of marks, unmarks, locks and penalties.
//!
//! The engine holds the session's row definitions and rules
//! configuration, both injected at construction. Every transition is a
//! pure function of the current `GameState`:
//! - accepted actions return a new state
//! - rejected actions return a `Rejection` and touch nothing

use smallvec::SmallVec;

use crate::core::{
    Action, GameState, LockPolicy, RowColor, RulesConfig, MAX_PENALTIES, MIN_MARKS_TO_LOCK,
};
use crate::rows::{RowSet, ROW_LEN};

use super::rejection::Rejection;

/// Values of a row that can currently be marked.
pub type Markable = SmallVec<[u8; ROW_LEN]>;

/// Validates and applies scorecard actions.
///
/// ## Example
///
/// ```
/// use qwixx_scorecard::core::{GameState, RowColor, RulesConfig};
/// use qwixx_scorecard::rows::standard_rows;
/// use qwixx_scorecard::rules::{Rejection, RuleEngine};
///
/// let engine = RuleEngine::new(standard_rows(), RulesConfig::new());
/// let state = GameState::new();
///
/// let state = engine.mark_value(&state, RowColor::Red, 9).unwrap();
/// assert_eq!(
///     engine.mark_value(&state, RowColor::Red, 4),
///     Err(Rejection::OutOfOrder { color: RowColor::Red, value: 4, rightmost: 9 })
/// );
/// ```
#[derive(Clone, Debug)]
pub struct RuleEngine {
    rows: RowSet,
    config: RulesConfig,
}

impl RuleEngine {
    /// Create an engine for the given rows and rules.
    #[must_use]
    pub fn new(rows: RowSet, config: RulesConfig) -> Self {
        Self { rows, config }
    }

    /// Row definitions in force.
    #[must_use]
    pub fn rows(&self) -> &RowSet {
        &self.rows
    }

    /// Rules configuration in force.
    #[must_use]
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    fn auto_lock(&self) -> bool {
        self.config.lock_policy() == LockPolicy::AutoOnEndMark
    }

    // === Marks ===

    /// Check whether `value` could be marked, without marking it.
    ///
    /// Unlike [`mark_value`](Self::mark_value), an already-marked value
    /// is reported as [`Rejection::AlreadyMarked`] instead of being
    /// routed to an unmark.
    pub fn check_mark(&self, state: &GameState, color: RowColor, value: u8) -> Result<(), Rejection> {
        if state.is_locked(color) {
            return Err(Rejection::RowLocked { color });
        }

        let row = &self.rows[color];
        let idx = row
            .position_of(value)
            .ok_or(Rejection::UnknownValue { color, value })?;

        if state.is_marked(color, value) {
            return Err(Rejection::AlreadyMarked { color, value });
        }

        // Rightmost by position, not by recency.
        let rightmost = state
            .marks(color)
            .iter()
            .filter_map(|&marked| row.position_of(marked).map(|pos| (pos, marked)))
            .max();
        if let Some((pos, rightmost)) = rightmost {
            if pos > idx {
                return Err(Rejection::OutOfOrder { color, value, rightmost });
            }
        }

        if self.auto_lock() && row.is_end_value(value) {
            let marks = state.mark_count(color);
            let required = MIN_MARKS_TO_LOCK;
            if marks < required {
                return Err(Rejection::InsufficientMarks { color, marks, required });
            }
        }

        Ok(())
    }

    /// Whether `value` could be marked right now.
    #[must_use]
    pub fn is_markable(&self, state: &GameState, color: RowColor, value: u8) -> bool {
        self.check_mark(state, color, value).is_ok()
    }

    /// Values of a row that could be marked right now, in row order.
    #[must_use]
    pub fn markable_values(&self, state: &GameState, color: RowColor) -> Markable {
        self.rows[color]
            .values()
            .iter()
            .copied()
            .filter(|&value| self.is_markable(state, color, value))
            .collect()
    }

    /// Mark `value` in a row.
    ///
    /// An already-marked value is treated as a request to unmark it.
    /// Under [`LockPolicy::AutoOnEndMark`], marking the end value also
    /// locks the row.
    pub fn mark_value(&self, state: &GameState, color: RowColor, value: u8) -> Result<GameState, Rejection> {
        if state.is_marked(color, value) {
            return self.unmark_value(state, color, value);
        }

        self.check_mark(state, color, value)?;

        let next = state.with_mark(color, value);
        if self.auto_lock() && self.rows[color].is_end_value(value) {
            log::debug!("{color} row locked by marking its end value {value}");
            return Ok(next.with_lock(color, true));
        }
        Ok(next)
    }

    /// Remove the most recent mark of a row.
    pub fn unmark_value(&self, state: &GameState, color: RowColor, value: u8) -> Result<GameState, Rejection> {
        if !state.is_marked(color, value) {
            return Err(Rejection::NotMarked { color, value });
        }

        match state.last_mark(color) {
            Some(last) if last == value => {}
            Some(last) => return Err(Rejection::NotLastMark { color, value, last }),
            None => return Err(Rejection::NotMarked { color, value }),
        }

        if state.is_locked(color) {
            if self.auto_lock() && self.rows[color].is_end_value(value) {
                log::debug!("{color} row unlocked by removing its end value {value}");
                return Ok(state.without_last_mark(color).with_lock(color, false));
            }
            return Err(Rejection::RowLocked { color });
        }

        Ok(state.without_last_mark(color))
    }

    /// Unmark `value` if it is marked, otherwise mark it.
    pub fn toggle_value(&self, state: &GameState, color: RowColor, value: u8) -> Result<GameState, Rejection> {
        if state.is_marked(color, value) {
            self.unmark_value(state, color, value)
        } else {
            self.mark_value(state, color, value)
        }
    }

    // === Locks ===

    /// Close a row.
    ///
    /// Requires `MIN_MARKS_TO_LOCK` marks including the end value.
    pub fn try_lock(&self, state: &GameState, color: RowColor) -> Result<GameState, Rejection> {
        if !self.config.lock_policy().has_explicit_lock() {
            return Err(Rejection::LockingIsAutomatic { color });
        }
        if state.is_locked(color) {
            return Err(Rejection::AlreadyLocked { color });
        }

        let marks = state.mark_count(color);
        let required = MIN_MARKS_TO_LOCK;
        if marks < required {
            return Err(Rejection::InsufficientMarks { color, marks, required });
        }

        let end_value = self.rows[color].end_value();
        if !state.is_marked(color, end_value) {
            return Err(Rejection::EndValueNotMarked { color, end_value });
        }

        Ok(state.with_lock(color, true))
    }

    /// Reopen a locked row.
    pub fn try_unlock(&self, state: &GameState, color: RowColor) -> Result<GameState, Rejection> {
        match self.config.lock_policy() {
            LockPolicy::AutoOnEndMark => Err(Rejection::LockingIsAutomatic { color }),
            _ if !state.is_locked(color) => Err(Rejection::NotLocked { color }),
            LockPolicy::Permanent => Err(Rejection::LockIsPermanent { color }),
            LockPolicy::Explicit => Ok(state.with_lock(color, false)),
        }
    }

    // === Penalties ===

    /// Add or remove penalties, keeping the count within `0..=MAX_PENALTIES`.
    pub fn adjust_penalty(&self, state: &GameState, delta: i8) -> Result<GameState, Rejection> {
        let current = state.penalties();
        let max = MAX_PENALTIES;

        let next = i16::from(current) + i16::from(delta);
        match u8::try_from(next) {
            Ok(count) if count <= max => Ok(state.with_penalties(count)),
            _ => Err(Rejection::PenaltyOutOfRange { current, delta, max }),
        }
    }

    /// Click on penalty box `slot` (1-based).
    ///
    /// A filled box removes a penalty, an empty box adds one.
    pub fn toggle_penalty_slot(&self, state: &GameState, slot: u8) -> Result<GameState, Rejection> {
        let max = MAX_PENALTIES;
        if slot == 0 || slot > max {
            return Err(Rejection::InvalidPenaltySlot { slot, max });
        }

        let delta = if slot <= state.penalties() { -1 } else { 1 };
        self.adjust_penalty(state, delta)
    }

    // === Actions ===

    /// Apply an action to a state.
    ///
    /// `Reset` and `SelectVariant` yield an empty state; regenerating
    /// row definitions for them is the session's job.
    pub fn apply(&self, state: &GameState, action: &Action) -> Result<GameState, Rejection> {
        match *action {
            Action::Mark { color, value } => self.mark_value(state, color, value),
            Action::Unmark { color, value } => self.unmark_value(state, color, value),
            Action::Lock { color } => self.try_lock(state, color),
            Action::Unlock { color } => self.try_unlock(state, color),
            Action::AdjustPenalty { delta } => self.adjust_penalty(state, delta),
            Action::Reset | Action::SelectVariant { .. } => Ok(GameState::new()),
        }
    }

    /// Enumerate every row and penalty action currently accepted.
    ///
    /// `Reset` is always legal and listed last; variant switches are
    /// left to the caller.
    #[must_use]
    pub fn legal_actions(&self, state: &GameState) -> Vec<Action> {
        let mut actions = Vec::new();

        for color in RowColor::all() {
            for value in self.markable_values(state, color) {
                actions.push(Action::Mark { color, value });
            }
            if let Some(value) = state.last_mark(color) {
                if self.unmark_value(state, color, value).is_ok() {
                    actions.push(Action::Unmark { color, value });
                }
            }
            if self.try_lock(state, color).is_ok() {
                actions.push(Action::Lock { color });
            }
            if self.try_unlock(state, color).is_ok() {
                actions.push(Action::Unlock { color });
            }
        }

        for delta in [1, -1] {
            if self.adjust_penalty(state, delta).is_ok() {
                actions.push(Action::AdjustPenalty { delta });
            }
        }

        actions.push(Action::Reset);
        actions
    }

    /// Check every state invariant against this engine's rows and rules.
    ///
    /// States produced by this engine always pass; the check exists for
    /// states that arrive from elsewhere (deserialized, hand-built).
    #[must_use]
    pub fn is_consistent(&self, state: &GameState) -> bool {
        if state.penalties() > MAX_PENALTIES {
            return false;
        }

        RowColor::all().all(|color| {
            let row = &self.rows[color];
            let positions: Option<SmallVec<[usize; ROW_LEN]>> =
                state.marks(color).iter().map(|&v| row.position_of(v)).collect();

            let Some(positions) = positions else {
                return false;
            };
            let ordered = positions.windows(2).all(|w| w[0] < w[1]);
            let lock_ok = !state.is_locked(color)
                || (state.mark_count(color) >= MIN_MARKS_TO_LOCK
                    && state.is_marked(color, row.end_value()));

            ordered && lock_ok
        })
    }
}
