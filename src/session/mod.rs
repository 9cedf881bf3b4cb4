//! Scorecard session: the surface the presentation layer calls.
//!
//! A `Session` owns everything one open scorecard needs:
//! - the selected `Variant` and the rows generated for it
//! - the `RuleEngine` built from those rows and the rules config
//! - the injected `GameRng` used by `dynamic-random`
//! - the current `GameState` and an action history
//!
//! Each transition returns the new state on acceptance, or a
//! `Rejection` with the current state left untouched.

use im::Vector;

use crate::core::{Action, ActionRecord, GameRng, GameRngState, GameState, RowColor, RulesConfig, Variant};
use crate::rows::{row_definitions_for, RowSet};
use crate::rules::{Markable, Rejection, RuleEngine};
use crate::scoring::{compute_scores, ScoreSheet};

/// Builder for creating a Session.
///
/// ```
/// use qwixx_scorecard::core::{LockPolicy, RulesConfig, Variant};
/// use qwixx_scorecard::session::SessionBuilder;
///
/// let session = SessionBuilder::new()
///     .variant(Variant::DynamicRandom)
///     .rules(RulesConfig::new().with_lock_policy(LockPolicy::Permanent))
///     .seed(42)
///     .build();
///
/// assert_eq!(session.variant(), Variant::DynamicRandom);
/// assert!(session.state().is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct SessionBuilder {
    variant: Variant,
    rules: RulesConfig,
    seed: Option<u64>,
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn rules(mut self, rules: RulesConfig) -> Self {
        self.rules = rules;
        self
    }

    /// Fix the RNG seed. Without one the session seeds from entropy.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the session and its first game.
    pub fn build(self) -> Session {
        let rng = self.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Session::with_rng(self.variant, self.rules, rng)
    }
}

/// One open scorecard.
#[derive(Clone, Debug)]
pub struct Session {
    variant: Variant,
    engine: RuleEngine,
    rng: GameRng,
    state: GameState,
    history: Vector<ActionRecord>,
    next_sequence: u32,
}

impl Session {
    /// Create a session with standard rules and an entropy-seeded RNG.
    #[must_use]
    pub fn new(variant: Variant) -> Self {
        SessionBuilder::new().variant(variant).build()
    }

    /// Create a session with an explicit RNG.
    #[must_use]
    pub fn with_rng(variant: Variant, rules: RulesConfig, mut rng: GameRng) -> Self {
        let rows = row_definitions_for(variant, &mut rng);
        log::info!("new {variant} game (rng seed {})", rng.seed());

        Self {
            variant,
            engine: RuleEngine::new(rows, rules),
            rng,
            state: GameState::new(),
            history: Vector::new(),
            next_sequence: 0,
        }
    }

    // === Queries ===

    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// The current state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Row definitions of the current game.
    #[must_use]
    pub fn rows(&self) -> &RowSet {
        self.engine.rows()
    }

    #[must_use]
    pub fn rules(&self) -> &RulesConfig {
        self.engine.config()
    }

    #[must_use]
    pub fn engine(&self) -> &RuleEngine {
        &self.engine
    }

    /// Actions requested in the current game, accepted or not.
    ///
    /// A reset or variant switch starts a new history whose first record
    /// is that action. Sequence numbers keep counting across games.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// RNG state, for reproducing the next shuffles.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Scores of the current state.
    #[must_use]
    pub fn scores(&self) -> ScoreSheet {
        compute_scores(&self.state)
    }

    #[must_use]
    pub fn is_markable(&self, color: RowColor, value: u8) -> bool {
        self.engine.is_markable(&self.state, color, value)
    }

    #[must_use]
    pub fn markable_values(&self, color: RowColor) -> Markable {
        self.engine.markable_values(&self.state, color)
    }

    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        self.engine.legal_actions(&self.state)
    }

    // === Transitions ===

    pub fn mark_value(&mut self, color: RowColor, value: u8) -> Result<GameState, Rejection> {
        let result = self.engine.mark_value(&self.state, color, value);
        self.commit(Action::Mark { color, value }, result)
    }

    pub fn unmark_value(&mut self, color: RowColor, value: u8) -> Result<GameState, Rejection> {
        let result = self.engine.unmark_value(&self.state, color, value);
        self.commit(Action::Unmark { color, value }, result)
    }

    /// Unmark if marked, otherwise mark: a click on a number cell.
    pub fn toggle_value(&mut self, color: RowColor, value: u8) -> Result<GameState, Rejection> {
        let action = if self.state.is_marked(color, value) {
            Action::Unmark { color, value }
        } else {
            Action::Mark { color, value }
        };
        let result = self.engine.toggle_value(&self.state, color, value);
        self.commit(action, result)
    }

    pub fn try_lock(&mut self, color: RowColor) -> Result<GameState, Rejection> {
        let result = self.engine.try_lock(&self.state, color);
        self.commit(Action::Lock { color }, result)
    }

    pub fn try_unlock(&mut self, color: RowColor) -> Result<GameState, Rejection> {
        let result = self.engine.try_unlock(&self.state, color);
        self.commit(Action::Unlock { color }, result)
    }

    pub fn adjust_penalty(&mut self, delta: i8) -> Result<GameState, Rejection> {
        let result = self.engine.adjust_penalty(&self.state, delta);
        self.commit(Action::AdjustPenalty { delta }, result)
    }

    /// Click on penalty box `slot` (1-based).
    pub fn toggle_penalty_slot(&mut self, slot: u8) -> Result<GameState, Rejection> {
        let delta = if slot <= self.state.penalties() { -1 } else { 1 };
        let result = self.engine.toggle_penalty_slot(&self.state, slot);
        self.commit(Action::AdjustPenalty { delta }, result)
    }

    /// Start a new game with the same variant.
    ///
    /// `dynamic-random` draws fresh rows; other variants keep theirs.
    pub fn reset_game(&mut self) -> GameState {
        if self.variant.reshuffles_on_reset() {
            self.regenerate_rows();
        }
        log::info!("{} game reset", self.variant);
        self.start_new_game(Action::Reset)
    }

    /// Switch to the variant named `variant_id` and start a new game.
    ///
    /// Unknown ids select `standard`.
    pub fn select_variant(&mut self, variant_id: &str) -> GameState {
        self.select(Variant::from_id_or_default(variant_id))
    }

    /// Switch to `variant` and start a new game.
    pub fn select(&mut self, variant: Variant) -> GameState {
        self.variant = variant;
        self.regenerate_rows();
        log::info!("switched to {variant}");
        self.start_new_game(Action::SelectVariant { variant })
    }

    /// Apply any action.
    pub fn apply(&mut self, action: Action) -> Result<GameState, Rejection> {
        match action {
            Action::Mark { color, value } => self.mark_value(color, value),
            Action::Unmark { color, value } => self.unmark_value(color, value),
            Action::Lock { color } => self.try_lock(color),
            Action::Unlock { color } => self.try_unlock(color),
            Action::AdjustPenalty { delta } => self.adjust_penalty(delta),
            Action::Reset => Ok(self.reset_game()),
            Action::SelectVariant { variant } => Ok(self.select(variant)),
        }
    }

    // === Internals ===

    fn regenerate_rows(&mut self) {
        let rows = row_definitions_for(self.variant, &mut self.rng);
        self.engine = RuleEngine::new(rows, self.engine.config().clone());
    }

    fn start_new_game(&mut self, action: Action) -> GameState {
        self.state = GameState::new();
        self.history.clear();
        self.record(action, true);
        self.state.clone()
    }

    fn commit(&mut self, action: Action, result: Result<GameState, Rejection>) -> Result<GameState, Rejection> {
        match &result {
            Ok(next) => {
                log::debug!("accepted {action}");
                self.state = next.clone();
            }
            Err(rejection) => log::debug!("rejected {action}: {rejection}"),
        }
        self.record(action, result.is_ok());
        result
    }

    fn record(&mut self, action: Action, accepted: bool) {
        self.history
            .push_back(ActionRecord::new(action, accepted, self.next_sequence));
        self.next_sequence += 1;
    }
}
