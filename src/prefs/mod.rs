//! UI preferences: theme and fullscreen.
//!
//! The two scalars live in a key-value store supplied by the embedding
//! application. Writes are fire-and-forget: a failing store is logged
//! and otherwise ignored, never surfacing into the game.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Store key of the theme preference.
pub const THEME_KEY: &str = "qwixx.theme";

/// Store key of the fullscreen preference.
pub const FULLSCREEN_KEY: &str = "qwixx.fullscreen";

/// Color theme of the card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        })
    }
}

impl FromStr for Theme {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(StoreError::InvalidValue {
                key: THEME_KEY.to_string(),
                value: other.to_string(),
            }),
        }
    }
}

/// Preference store failures.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("preference store is read-only")]
    ReadOnly,
    #[error("invalid value {value:?} stored under {key}")]
    InvalidValue { key: String, value: String },
    #[error("preference store failed: {0}")]
    Backend(String),
}

/// A string key-value store (browser local storage, a config file, ...).
pub trait PreferenceStore {
    /// Read a value. Missing keys are `Ok(None)`.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write a value.
    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError>;
}

/// In-memory store, for tests and for hosts without persistence.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: FxHashMap<String, String>,
    read_only: bool,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that rejects every write.
    #[must_use]
    pub fn read_only() -> Self {
        Self {
            entries: FxHashMap::default(),
            read_only: true,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        if self.read_only {
            return Err(StoreError::ReadOnly);
        }
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}

/// The persisted UI preferences.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub theme: Theme,
    pub fullscreen: bool,
}

impl Preferences {
    /// Read preferences, using defaults for anything missing or unreadable.
    pub fn load(store: &impl PreferenceStore) -> Self {
        let defaults = Self::default();
        Self {
            theme: read(store, THEME_KEY, |s| s.parse().ok()).unwrap_or(defaults.theme),
            fullscreen: read(store, FULLSCREEN_KEY, |s| s.parse().ok()).unwrap_or(defaults.fullscreen),
        }
    }

    /// Write both preferences. Failures are logged, not returned.
    pub fn persist(&self, store: &mut impl PreferenceStore) {
        write(store, THEME_KEY, self.theme.to_string());
        write(store, FULLSCREEN_KEY, self.fullscreen.to_string());
    }

    /// Change the theme and persist it.
    pub fn set_theme(&mut self, theme: Theme, store: &mut impl PreferenceStore) {
        self.theme = theme;
        write(store, THEME_KEY, theme.to_string());
    }

    /// Flip fullscreen and persist it.
    pub fn toggle_fullscreen(&mut self, store: &mut impl PreferenceStore) {
        self.fullscreen = !self.fullscreen;
        write(store, FULLSCREEN_KEY, self.fullscreen.to_string());
    }
}

fn read<T>(store: &impl PreferenceStore, key: &str, parse: impl Fn(&str) -> Option<T>) -> Option<T> {
    match store.get(key) {
        Ok(Some(raw)) => {
            let parsed = parse(&raw);
            if parsed.is_none() {
                log::warn!("ignoring unreadable preference {key}={raw:?}");
            }
            parsed
        }
        Ok(None) => None,
        Err(err) => {
            log::warn!("could not read preference {key}: {err}");
            None
        }
    }
}

fn write(store: &mut impl PreferenceStore, key: &str, value: String) {
    if let Err(err) = store.set(key, value) {
        log::warn!("could not persist preference {key}: {err}");
    }
}
