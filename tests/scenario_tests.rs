//! Scorecard scenario tests.
//!
//! These tests drive a `Session` the way the presentation layer does and
//! check marks, locks, scores and variant handling end to end.

use qwixx_scorecard::core::{Action, LockPolicy, RowColor, RulesConfig, Variant};
use qwixx_scorecard::rules::Rejection;
use qwixx_scorecard::scoring::{compute_scores, penalty_score, row_score, total_score};
use qwixx_scorecard::session::{Session, SessionBuilder};

fn standard() -> Session {
    SessionBuilder::new().variant(Variant::Standard).seed(42).build()
}

fn with_policy(policy: LockPolicy) -> Session {
    SessionBuilder::new()
        .rules(RulesConfig::new().with_lock_policy(policy))
        .seed(42)
        .build()
}

fn red_marks(session: &Session) -> Vec<u8> {
    session.state().marks(RowColor::Red).iter().copied().collect()
}

// =============================================================================
// Marking Order
// =============================================================================

/// Mark 2, 5, 9; 4 is refused; removing 9 makes 4 legal again.
#[test]
fn test_red_row_scenario() {
    let mut session = standard();

    for value in [2, 5, 9] {
        assert!(session.mark_value(RowColor::Red, value).is_ok(), "{value} should be accepted");
    }

    assert_eq!(
        session.mark_value(RowColor::Red, 4),
        Err(Rejection::OutOfOrder { color: RowColor::Red, value: 4, rightmost: 9 })
    );
    assert_eq!(red_marks(&session), vec![2, 5, 9]);

    session.unmark_value(RowColor::Red, 9).unwrap();
    session.mark_value(RowColor::Red, 4).unwrap();

    assert_eq!(red_marks(&session), vec![2, 5, 4]);
}

#[test]
fn test_unmark_only_last() {
    let mut session = standard();
    session.mark_value(RowColor::Yellow, 3).unwrap();
    session.mark_value(RowColor::Yellow, 8).unwrap();

    assert_eq!(
        session.unmark_value(RowColor::Yellow, 3),
        Err(Rejection::NotLastMark { color: RowColor::Yellow, value: 3, last: 8 })
    );
    assert!(session.unmark_value(RowColor::Yellow, 8).is_ok());
    assert!(session.unmark_value(RowColor::Yellow, 3).is_ok());
    assert!(session.state().is_empty());
}

#[test]
fn test_two_unmarks_undo_two_marks() {
    let mut session = standard();
    session.mark_value(RowColor::Blue, 11).unwrap();
    let before = session.state().clone();

    session.mark_value(RowColor::Blue, 9).unwrap();
    session.mark_value(RowColor::Blue, 4).unwrap();
    session.unmark_value(RowColor::Blue, 4).unwrap();
    session.unmark_value(RowColor::Blue, 9).unwrap();

    assert_eq!(session.state(), &before);
}

#[test]
fn test_rows_are_independent() {
    let mut session = standard();
    session.mark_value(RowColor::Red, 12).unwrap();

    // A far-right red mark does not constrain the other rows.
    assert!(session.mark_value(RowColor::Yellow, 2).is_ok());
    assert!(session.mark_value(RowColor::Green, 12).is_ok());
}

// =============================================================================
// Locking
// =============================================================================

#[test]
fn test_lock_below_threshold_is_reported() {
    let mut session = standard();
    for value in [2, 3, 12] {
        session.mark_value(RowColor::Red, value).unwrap();
    }

    let err = session.try_lock(RowColor::Red).unwrap_err();
    assert_eq!(
        err,
        Rejection::InsufficientMarks { color: RowColor::Red, marks: 3, required: 5 }
    );
    assert!(!session.state().is_locked(RowColor::Red));
    assert_eq!(session.history().last().map(|r| r.accepted), Some(false));
}

#[test]
fn test_lock_then_everything_rejected_until_unlock() {
    let mut session = standard();
    for value in [12, 10, 7, 5, 2] {
        session.mark_value(RowColor::Green, value).unwrap();
    }
    session.try_lock(RowColor::Green).unwrap();

    assert_eq!(
        session.mark_value(RowColor::Green, 3),
        Err(Rejection::RowLocked { color: RowColor::Green })
    );
    assert_eq!(
        session.unmark_value(RowColor::Green, 2),
        Err(Rejection::RowLocked { color: RowColor::Green })
    );
    assert!(!session.is_markable(RowColor::Green, 3));

    session.try_unlock(RowColor::Green).unwrap();
    assert!(session.unmark_value(RowColor::Green, 2).is_ok());
}

#[test]
fn test_permanent_lock_policy() {
    let mut session = with_policy(LockPolicy::Permanent);
    for value in [2, 4, 6, 8, 12] {
        session.mark_value(RowColor::Red, value).unwrap();
    }
    session.try_lock(RowColor::Red).unwrap();

    assert_eq!(
        session.try_unlock(RowColor::Red),
        Err(Rejection::LockIsPermanent { color: RowColor::Red })
    );
    assert!(session.state().is_locked(RowColor::Red));
}

#[test]
fn test_auto_lock_policy() {
    let mut session = with_policy(LockPolicy::AutoOnEndMark);
    for value in [2, 3, 4, 5] {
        session.mark_value(RowColor::Red, value).unwrap();
    }

    // Four prior marks are not enough to close the row.
    assert_eq!(
        session.toggle_value(RowColor::Red, 12),
        Err(Rejection::InsufficientMarks { color: RowColor::Red, marks: 4, required: 5 })
    );

    session.mark_value(RowColor::Red, 6).unwrap();
    let locked = session.toggle_value(RowColor::Red, 12).unwrap();
    assert!(locked.is_locked(RowColor::Red));
    assert_eq!(session.scores().row(RowColor::Red), row_score(7));

    let reopened = session.toggle_value(RowColor::Red, 12).unwrap();
    assert!(!reopened.is_locked(RowColor::Red));
    assert_eq!(reopened.mark_count(RowColor::Red), 5);
}

// =============================================================================
// Scoring
// =============================================================================

#[test]
fn test_score_examples() {
    assert_eq!(row_score(0), 0);
    assert_eq!(row_score(1), 1);
    assert_eq!(row_score(2), 3);
    assert_eq!(row_score(5), 15);
    assert_eq!(row_score(6), 21);
    assert_eq!(total_score([0; 4], penalty_score(2)), -10);
}

#[test]
fn test_lock_bonus_scores_as_extra_mark() {
    let mut session = standard();
    for value in [2, 3, 4, 5, 12] {
        session.mark_value(RowColor::Red, value).unwrap();
    }
    assert_eq!(session.scores().row(RowColor::Red), 15);

    session.try_lock(RowColor::Red).unwrap();
    assert_eq!(session.scores().row(RowColor::Red), 21);
}

#[test]
fn test_full_card_scores() {
    let mut session = standard();
    for value in [2, 4] {
        session.mark_value(RowColor::Red, value).unwrap();
    }
    session.mark_value(RowColor::Yellow, 7).unwrap();
    for value in [12, 11, 10] {
        session.mark_value(RowColor::Blue, value).unwrap();
    }
    session.adjust_penalty(1).unwrap();

    let sheet = compute_scores(session.state());
    assert_eq!(sheet, session.scores());
    assert_eq!(sheet.to_string(), "(3 + 1 + 0 + 6) - 5 = 5");
}

#[test]
fn test_penalties_clamped() {
    let mut session = standard();

    assert!(session.adjust_penalty(-1).is_err());
    for _ in 0..4 {
        session.adjust_penalty(1).unwrap();
    }
    assert!(session.adjust_penalty(1).is_err());
    assert_eq!(session.state().penalties(), 4);
    assert_eq!(session.scores().total, -20);
}

// =============================================================================
// Variants
// =============================================================================

#[test]
fn test_dynamic_reset_regenerates_rows() {
    let mut session = SessionBuilder::new().variant(Variant::DynamicRandom).seed(7).build();
    let first = session.rows().clone();

    session.reset_game();
    let second = session.rows().clone();

    assert!(RowColor::all().any(|c| first[c] != second[c]));
}

#[test]
fn test_unknown_variant_is_standard() {
    let mut session = SessionBuilder::new().variant(Variant::FixedRandom).seed(7).build();

    session.select_variant("bogus");

    assert_eq!(session.variant(), Variant::Standard);
    assert_eq!(session.rows()[RowColor::Red].end_value(), 12);
    assert_eq!(session.rows()[RowColor::Green].end_value(), 2);
}

#[test]
fn test_fixed_random_order_is_enforced() {
    let mut session = SessionBuilder::new().variant(Variant::FixedRandom).seed(7).build();
    let red = session.rows()[RowColor::Red].clone();
    let values = red.values();

    session.mark_value(RowColor::Red, values[5]).unwrap();
    assert!(matches!(
        session.mark_value(RowColor::Red, values[2]),
        Err(Rejection::OutOfOrder { .. })
    ));
    assert!(session.mark_value(RowColor::Red, values[6]).is_ok());
}

#[test]
fn test_apply_replays_history() {
    let mut original = standard();
    original.mark_value(RowColor::Red, 3).unwrap();
    let _ = original.mark_value(RowColor::Red, 2);
    original.adjust_penalty(1).unwrap();
    original.apply(Action::Mark { color: RowColor::Blue, value: 9 }).unwrap();

    let mut replay = standard();
    for record in original.history().iter() {
        assert_eq!(replay.apply(record.action).is_ok(), record.accepted);
    }

    assert_eq!(replay.state(), original.state());
}
