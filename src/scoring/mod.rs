//! Score calculation.
//!
//! A row scores the triangular number of its marks, where a locked row
//! counts one extra mark. Each penalty costs 5 points. The total is the
//! sum of the row scores minus the penalty score and may be negative.

use serde::{Deserialize, Serialize};

use crate::core::{ColorMap, GameState, RowColor};

/// Points deducted per penalty.
pub const PENALTY_POINTS: u32 = 5;

/// Score of a row with `mark_count` marks (lock bonus already included).
///
/// ```
/// use qwixx_scorecard::scoring::row_score;
///
/// assert_eq!(row_score(0), 0);
/// assert_eq!(row_score(5), 15);
/// assert_eq!(row_score(6), 21);
/// ```
#[must_use]
pub const fn row_score(mark_count: u32) -> u32 {
    let n = mark_count as u64;
    let score = n * (n + 1) / 2;
    if score > u32::MAX as u64 {
        u32::MAX
    } else {
        score as u32
    }
}

/// Points lost to `penalty_count` penalties.
#[must_use]
pub const fn penalty_score(penalty_count: u32) -> u32 {
    penalty_count.saturating_mul(PENALTY_POINTS)
}

/// Sum of the row scores minus the penalty score.
#[must_use]
pub fn total_score(row_scores: [u32; RowColor::COUNT], penalty_score: u32) -> i32 {
    let rows: i64 = row_scores.iter().map(|&s| i64::from(s)).sum();
    let total = rows - i64::from(penalty_score);
    i32::try_from(total).unwrap_or(if total < 0 { i32::MIN } else { i32::MAX })
}

/// Marks a row scores for: its marks plus one if locked.
#[must_use]
pub fn scoring_marks(state: &GameState, color: RowColor) -> u32 {
    let marks = u32::try_from(state.mark_count(color)).unwrap_or(u32::MAX);
    marks.saturating_add(u32::from(state.is_locked(color)))
}

/// Every score shown on the card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSheet {
    /// Score of each row, lock bonus included.
    pub rows: ColorMap<u32>,

    /// Points lost to penalties.
    pub penalty: u32,

    /// Row scores minus penalty points.
    pub total: i32,
}

impl ScoreSheet {
    /// Score of one row.
    #[must_use]
    pub fn row(&self, color: RowColor) -> u32 {
        self.rows[color]
    }
}

/// Display renders the footer breakdown, e.g. `(3 + 0 + 21 + 1) - 10 = 15`.
impl std::fmt::Display for ScoreSheet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [red, yellow, green, blue] = RowColor::ALL.map(|c| self.rows[c]);
        write!(
            f,
            "({red} + {yellow} + {green} + {blue}) - {} = {}",
            self.penalty, self.total
        )
    }
}

/// Compute every score for a state.
#[must_use]
pub fn compute_scores(state: &GameState) -> ScoreSheet {
    let rows = ColorMap::new(|color| row_score(scoring_marks(state, color)));
    let penalty = penalty_score(u32::from(state.penalties()));
    let total = total_score(RowColor::ALL.map(|c| rows[c]), penalty);

    ScoreSheet { rows, penalty, total }
}
