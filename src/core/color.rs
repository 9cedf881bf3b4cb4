//! Row colors and per-color data storage.
//!
//! ## RowColor
//!
//! The four fixed rows of a Qwixx card, in display order.
//!
//! ## ColorMap
//!
//! Per-row data storage backed by a fixed array for O(1) access.
//! Supports iteration and indexing by `RowColor`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the four colored rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowColor {
    Red,
    Yellow,
    Green,
    Blue,
}

impl RowColor {
    /// Number of rows on a card.
    pub const COUNT: usize = 4;

    /// All colors in display order.
    pub const ALL: [RowColor; Self::COUNT] =
        [RowColor::Red, RowColor::Yellow, RowColor::Green, RowColor::Blue];

    /// Get the 0-based display index.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            RowColor::Red => 0,
            RowColor::Yellow => 1,
            RowColor::Green => 2,
            RowColor::Blue => 3,
        }
    }

    /// Lowercase name used in identifiers and logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            RowColor::Red => "red",
            RowColor::Yellow => "yellow",
            RowColor::Green => "green",
            RowColor::Blue => "blue",
        }
    }

    /// Iterate over all colors in display order.
    ///
    /// ```
    /// use qwixx_scorecard::core::RowColor;
    ///
    /// let colors: Vec<_> = RowColor::all().collect();
    /// assert_eq!(colors.len(), 4);
    /// assert_eq!(colors[0], RowColor::Red);
    /// assert_eq!(colors[3], RowColor::Blue);
    /// ```
    pub fn all() -> impl Iterator<Item = RowColor> {
        Self::ALL.into_iter()
    }
}

impl std::fmt::Display for RowColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-color data storage with O(1) access.
///
/// Use `ColorMap::new()` to create with a factory function,
/// or `ColorMap::with_value()` to initialize all rows to the same value.
///
/// ## Example
///
/// ```
/// use qwixx_scorecard::core::{ColorMap, RowColor};
///
/// let mut locked: ColorMap<bool> = ColorMap::with_value(false);
/// locked[RowColor::Green] = true;
///
/// assert!(locked[RowColor::Green]);
/// assert!(!locked[RowColor::Red]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorMap<T> {
    data: [T; RowColor::COUNT],
}

impl<T> ColorMap<T> {
    /// Create a new ColorMap with values from a factory function.
    pub fn new(factory: impl Fn(RowColor) -> T) -> Self {
        Self {
            data: RowColor::ALL.map(factory),
        }
    }

    /// Create a new ColorMap with all entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a new ColorMap with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a row's data.
    #[must_use]
    pub fn get(&self, color: RowColor) -> &T {
        &self.data[color.index()]
    }

    /// Get a mutable reference to a row's data.
    pub fn get_mut(&mut self, color: RowColor) -> &mut T {
        &mut self.data[color.index()]
    }

    /// Iterate over (RowColor, &T) pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (RowColor, &T)> {
        RowColor::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over values in display order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Build a new map by applying `f` to every entry.
    pub fn map<U>(&self, f: impl Fn(RowColor, &T) -> U) -> ColorMap<U> {
        ColorMap::new(|color| f(color, self.get(color)))
    }
}

impl<T: Default> Default for ColorMap<T> {
    fn default() -> Self {
        Self::with_default()
    }
}

impl<T> Index<RowColor> for ColorMap<T> {
    type Output = T;

    fn index(&self, color: RowColor) -> &Self::Output {
        self.get(color)
    }
}

impl<T> IndexMut<RowColor> for ColorMap<T> {
    fn index_mut(&mut self, color: RowColor) -> &mut Self::Output {
        self.get_mut(color)
    }
}
