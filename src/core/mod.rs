//! Core scorecard types: colors, state, actions, RNG, configuration.
//!
//! These are the building blocks the rule engine and the session
//! operate on. None of them knows about marking rules.

pub mod color;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use color::{ColorMap, RowColor};
pub use rng::{GameRng, GameRngState};
pub use config::{LockPolicy, RulesConfig, UnknownVariant, Variant, MAX_PENALTIES, MIN_MARKS_TO_LOCK};
pub use action::{Action, ActionRecord};
pub use state::{GameState, RowMarks};
