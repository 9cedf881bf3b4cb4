//! Variant generator: per-color row definitions for each variant.
//!
//! - `standard`: red/yellow ascend, green/blue descend, every game
//! - `fixed-random`: the permutations in [`FIXED_RANDOM_TABLE`], every game
//! - `dynamic-random`: a fresh shuffle of 2..=12 per color, drawn from
//!   the injected [`GameRng`]

use crate::core::{GameRng, RowColor, Variant};

use super::definition::{RowDefinition, RowSet, ROW_LEN};

/// The hard-coded permutations of the `fixed-random` variant,
/// in display order (red, yellow, green, blue).
pub const FIXED_RANDOM_TABLE: [[u8; ROW_LEN]; RowColor::COUNT] = [
    [7, 3, 10, 5, 12, 2, 9, 6, 11, 4, 8],
    [4, 9, 2, 11, 6, 8, 12, 3, 7, 10, 5],
    [10, 6, 12, 3, 8, 5, 2, 11, 9, 7, 4],
    [5, 11, 8, 2, 9, 12, 4, 7, 3, 6, 10],
];

/// Row definitions for a variant.
///
/// Only `DynamicRandom` draws from `rng`; the other variants leave it
/// untouched, so switching to them never perturbs a seeded sequence.
///
/// ```
/// use qwixx_scorecard::core::{GameRng, RowColor, Variant};
/// use qwixx_scorecard::rows::row_definitions_for;
///
/// let mut rng = GameRng::new(1);
/// let rows = row_definitions_for(Variant::Standard, &mut rng);
/// assert_eq!(rows[RowColor::Red].end_value(), 12);
/// assert_eq!(rows[RowColor::Blue].end_value(), 2);
/// ```
pub fn row_definitions_for(variant: Variant, rng: &mut GameRng) -> RowSet {
    match variant {
        Variant::Standard => standard_rows(),
        Variant::FixedRandom => fixed_random_rows(),
        Variant::DynamicRandom => shuffled_rows(rng),
    }
}

/// Two ascending rows followed by two descending rows.
#[must_use]
pub fn standard_rows() -> RowSet {
    RowSet::from_fn(|color| match color {
        RowColor::Red | RowColor::Yellow => RowDefinition::ascending(color),
        RowColor::Green | RowColor::Blue => RowDefinition::descending(color),
    })
}

#[must_use]
pub fn fixed_random_rows() -> RowSet {
    RowSet::from_fn(|color| RowDefinition::from_permutation(color, FIXED_RANDOM_TABLE[color.index()]))
}

/// An independent uniform permutation of 2..=12 for every color.
pub fn shuffled_rows(rng: &mut GameRng) -> RowSet {
    // Shuffle in display order so a seed maps to one fixed set of rows.
    let shuffled: Vec<RowDefinition> = RowColor::all().map(|color| shuffled_row(color, rng)).collect();
    RowSet::from_fn(|color| shuffled[color.index()].clone())
}

/// A uniform permutation of 2..=12 for one row.
pub fn shuffled_row(color: RowColor, rng: &mut GameRng) -> RowDefinition {
    let mut values = *RowDefinition::ascending(color).values();
    rng.shuffle(&mut values);
    RowDefinition::from_permutation(color, values)
}
