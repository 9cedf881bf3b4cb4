//! # qwixx-scorecard
//!
//! Rule validation and scoring for a single-player Qwixx scorecard.
//!
//! ## Design Principles
//!
//! 1. **Immutable States**: Every accepted action yields a new `GameState`;
//!    a rejected action returns a `Rejection` and leaves the old one alone.
//!
//! 2. **Injected Configuration**: Row definitions, rules and randomness are
//!    handed to the engine at session start. There are no global tables.
//!
//! 3. **No Surprises**: Every input is either accepted or cleanly rejected.
//!    Nothing in the engine panics on user input.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) state cloning via `im-rs`, so the
//!   presentation layer can keep old states around for free.
//!
//! - **Deterministic Shuffles**: The `dynamic-random` variant draws from a
//!   seedable ChaCha8 `GameRng`.
//!
//! ## Modules
//!
//! - `core`: Colors, state, actions, RNG, configuration
//! - `rows`: Row definitions and the variant generator
//! - `rules`: The rule engine and its rejections
//! - `scoring`: Row, penalty and total scores
//! - `session`: The stateful surface the UI calls
//! - `prefs`: Theme and fullscreen preferences

pub mod core;
pub mod rows;
pub mod rules;
pub mod scoring;
pub mod session;
pub mod prefs;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, ColorMap, GameRng, GameRngState, GameState, LockPolicy, RowColor, RulesConfig,
    Variant,
};

pub use crate::rows::{row_definitions_for, DefinitionError, RowDefinition, RowSet};

pub use crate::rules::{Rejection, RuleEngine};

pub use crate::scoring::{compute_scores, penalty_score, row_score, total_score, ScoreSheet};

pub use crate::session::{Session, SessionBuilder};

pub use crate::prefs::{MemoryStore, PreferenceStore, Preferences, StoreError, Theme};
