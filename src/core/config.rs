//! Game configuration types.
//!
//! Sessions configure the engine at startup by providing:
//! - `Variant`: Which marking order each row uses
//! - `LockPolicy`: How rows are closed and reopened
//! - `RulesConfig`: The lock policy in force
//!
//! The lock threshold and penalty cap are constants.
//!
//! Row definitions are derived from the variant and injected into the
//! rule engine; nothing here is a global table.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Rule set determining each row's marking order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Red and yellow ascend 2..12, green and blue descend 12..2.
    #[default]
    Standard,
    /// One hard-coded permutation per color, identical every game.
    FixedRandom,
    /// A fresh random permutation per color every game and every reset.
    DynamicRandom,
}

impl Variant {
    /// All variants in menu order.
    pub const ALL: [Variant; 3] = [Variant::Standard, Variant::FixedRandom, Variant::DynamicRandom];

    /// Stable identifier used by the presentation layer.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Variant::Standard => "standard",
            Variant::FixedRandom => "fixed-random",
            Variant::DynamicRandom => "dynamic-random",
        }
    }

    /// Parse an identifier, returning `None` for unknown ids.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.id() == id)
    }

    /// Parse an identifier, falling back to `Standard` for unknown ids.
    #[must_use]
    pub fn from_id_or_default(id: &str) -> Self {
        Self::from_id(id).unwrap_or_else(|| {
            log::warn!("unknown variant id {id:?}, falling back to standard");
            Variant::Standard
        })
    }

    /// Whether row definitions are regenerated on every reset.
    #[must_use]
    pub const fn reshuffles_on_reset(self) -> bool {
        matches!(self, Variant::DynamicRandom)
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Error returned when parsing a variant identifier strictly.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown variant id {0:?}")]
pub struct UnknownVariant(pub String);

impl FromStr for Variant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s).ok_or_else(|| UnknownVariant(s.to_string()))
    }
}

/// How rows are closed and reopened.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LockPolicy {
    /// Locking and unlocking are separate explicit actions.
    /// An unlock is accepted any time the row is locked.
    #[default]
    Explicit,
    /// Locking is an explicit action and cannot be undone.
    Permanent,
    /// Marking the end value locks the row; removing it unlocks.
    /// There are no explicit lock or unlock actions.
    AutoOnEndMark,
}

impl LockPolicy {
    /// Whether `try_lock` / `try_unlock` are available at all.
    #[must_use]
    pub const fn has_explicit_lock(self) -> bool {
        !matches!(self, LockPolicy::AutoOnEndMark)
    }
}

/// Marks a row needs, end value included, before it may be locked.
pub const MIN_MARKS_TO_LOCK: usize = 5;

/// Penalty boxes on the card.
pub const MAX_PENALTIES: u8 = 4;

/// Rules configuration for a session.
///
/// Only the lock semantics vary between tables. The lock threshold and
/// the penalty cap are fixed by the game ([`MIN_MARKS_TO_LOCK`],
/// [`MAX_PENALTIES`]).
///
/// ```
/// use qwixx_scorecard::core::{LockPolicy, RulesConfig};
///
/// let config = RulesConfig::new().with_lock_policy(LockPolicy::Permanent);
/// assert_eq!(config.lock_policy(), LockPolicy::Permanent);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RulesConfig {
    lock_policy: LockPolicy,
}

impl RulesConfig {
    /// Create the standard rules configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the lock policy.
    #[must_use]
    pub fn with_lock_policy(mut self, policy: LockPolicy) -> Self {
        self.lock_policy = policy;
        self
    }

    /// Lock/unlock semantics.
    #[must_use]
    pub fn lock_policy(&self) -> LockPolicy {
        self.lock_policy
    }
}
