//! Rule engine for scorecard transitions.
//!
//! `RuleEngine` decides:
//! - Whether a value may be marked or unmarked
//! - Whether a row may be locked or unlocked
//! - Whether the penalty count may change
//!
//! Rejected actions are reported as `Rejection` values and never
//! modify state.

pub mod engine;
pub mod rejection;

pub use engine::{Markable, RuleEngine};
pub use rejection::Rejection;
