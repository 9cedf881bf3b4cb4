//! Row definitions: the marking order of each colored row.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{ColorMap, RowColor};

/// Number of markable values in a row.
pub const ROW_LEN: usize = 11;

/// Smallest markable value (lowest two-dice sum).
pub const MIN_VALUE: u8 = 2;

/// Largest markable value (highest two-dice sum).
pub const MAX_VALUE: u8 = 12;

/// Why a sequence of values cannot be a row.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DefinitionError {
    #[error("{color} row has {len} values, expected 11")]
    WrongLength { color: RowColor, len: usize },
    #[error("{color} row contains {value}, outside 2..=12")]
    OutOfRange { color: RowColor, value: u8 },
    #[error("{color} row contains {value} more than once")]
    Duplicate { color: RowColor, value: u8 },
    #[error("{color} row stored in the {slot} slot")]
    Misfiled { slot: RowColor, color: RowColor },
}

/// The left-to-right marking order of one row.
///
/// Always a permutation of 2..=12.
///
/// ```
/// use qwixx_scorecard::core::RowColor;
/// use qwixx_scorecard::rows::RowDefinition;
///
/// let green = RowDefinition::descending(RowColor::Green);
/// assert_eq!(green.end_value(), 2);
/// assert_eq!(green.position_of(12), Some(0));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawRowDefinition")]
pub struct RowDefinition {
    color: RowColor,
    values: [u8; ROW_LEN],
}

impl RowDefinition {
    /// Validate and build a row definition.
    pub fn new(color: RowColor, values: &[u8]) -> Result<Self, DefinitionError> {
        let values: [u8; ROW_LEN] = values
            .try_into()
            .map_err(|_| DefinitionError::WrongLength { color, len: values.len() })?;

        let mut seen = [false; MAX_VALUE as usize + 1];
        for &value in &values {
            if !(MIN_VALUE..=MAX_VALUE).contains(&value) {
                return Err(DefinitionError::OutOfRange { color, value });
            }
            if std::mem::replace(&mut seen[usize::from(value)], true) {
                return Err(DefinitionError::Duplicate { color, value });
            }
        }

        Ok(Self { color, values })
    }

    /// Build from values already known to be a permutation of 2..=12.
    pub(super) fn from_permutation(color: RowColor, values: [u8; ROW_LEN]) -> Self {
        debug_assert!(Self::new(color, &values).is_ok());
        Self { color, values }
    }

    /// 2, 3, ..., 12.
    #[must_use]
    pub fn ascending(color: RowColor) -> Self {
        Self {
            color,
            values: std::array::from_fn(|i| MIN_VALUE + i as u8),
        }
    }

    /// 12, 11, ..., 2.
    #[must_use]
    pub fn descending(color: RowColor) -> Self {
        Self {
            color,
            values: std::array::from_fn(|i| MAX_VALUE - i as u8),
        }
    }

    /// The row's color.
    #[must_use]
    pub fn color(&self) -> RowColor {
        self.color
    }

    /// Values in marking order.
    #[must_use]
    pub fn values(&self) -> &[u8; ROW_LEN] {
        &self.values
    }

    /// The rightmost value; it must be marked before the row can lock.
    #[must_use]
    pub fn end_value(&self) -> u8 {
        self.values[ROW_LEN - 1]
    }

    /// Index of `value` in marking order.
    #[must_use]
    pub fn position_of(&self, value: u8) -> Option<usize> {
        self.values.iter().position(|&v| v == value)
    }

    /// Whether `value` belongs to this row.
    #[must_use]
    pub fn contains(&self, value: u8) -> bool {
        self.position_of(value).is_some()
    }

    /// Whether `value` is the row's end value.
    #[must_use]
    pub fn is_end_value(&self, value: u8) -> bool {
        self.end_value() == value
    }

    /// Whether the row reads 2..12 left to right.
    #[must_use]
    pub fn is_ascending(&self) -> bool {
        self.values.windows(2).all(|w| w[0] < w[1])
    }

    /// Whether the row reads 12..2 left to right.
    #[must_use]
    pub fn is_descending(&self) -> bool {
        self.values.windows(2).all(|w| w[0] > w[1])
    }
}

/// Unvalidated wire form of a `RowDefinition`.
#[derive(Deserialize)]
struct RawRowDefinition {
    color: RowColor,
    values: Vec<u8>,
}

impl TryFrom<RawRowDefinition> for RowDefinition {
    type Error = DefinitionError;

    fn try_from(raw: RawRowDefinition) -> Result<Self, Self::Error> {
        Self::new(raw.color, &raw.values)
    }
}

/// Row definitions for all four colors.
///
/// Injected into the rule engine at session start and immutable for the
/// rest of the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRowSet")]
pub struct RowSet {
    rows: ColorMap<RowDefinition>,
}

/// Wire form of a `RowSet`; each row is validated, the slots are not.
#[derive(Deserialize)]
struct RawRowSet {
    rows: ColorMap<RowDefinition>,
}

impl TryFrom<RawRowSet> for RowSet {
    type Error = DefinitionError;

    fn try_from(raw: RawRowSet) -> Result<Self, Self::Error> {
        if let Some((slot, row)) = raw.rows.iter().find(|(slot, row)| row.color != *slot) {
            return Err(DefinitionError::Misfiled { slot, color: row.color });
        }
        Ok(Self { rows: raw.rows })
    }
}

impl RowSet {
    /// Build a row set from one definition per color.
    ///
    /// Each definition is stored under its own color, so
    /// `from_fn` callers need not care about ordering.
    #[must_use]
    pub fn from_fn(f: impl Fn(RowColor) -> RowDefinition) -> Self {
        Self {
            rows: ColorMap::new(|color| {
                let row = f(color);
                debug_assert_eq!(row.color, color);
                row
            }),
        }
    }

    /// Validate raw value tables, one per color.
    pub fn from_tables(tables: &ColorMap<Vec<u8>>) -> Result<Self, DefinitionError> {
        let mut rows = Vec::with_capacity(RowColor::COUNT);
        for (color, values) in tables.iter() {
            rows.push(RowDefinition::new(color, values)?);
        }
        Ok(Self::from_fn(|color| rows[color.index()].clone()))
    }

    /// Get one row's definition.
    #[must_use]
    pub fn get(&self, color: RowColor) -> &RowDefinition {
        &self.rows[color]
    }

    /// Iterate over all rows in display order.
    pub fn iter(&self) -> impl Iterator<Item = &RowDefinition> {
        self.rows.values()
    }
}

impl std::ops::Index<RowColor> for RowSet {
    type Output = RowDefinition;

    fn index(&self, color: RowColor) -> &Self::Output {
        self.get(color)
    }
}
