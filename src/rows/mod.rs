//! Row system: marking-order definitions and the variant generator.
//!
//! ## Key Types
//!
//! - `RowDefinition`: The validated left-to-right order of one row
//! - `RowSet`: One definition per color, injected into the rule engine
//! - `row_definitions_for`: Builds a `RowSet` for a `Variant`

pub mod definition;
pub mod variant;

pub use definition::{DefinitionError, RowDefinition, RowSet, MAX_VALUE, MIN_VALUE, ROW_LEN};
pub use variant::{fixed_random_rows, row_definitions_for, shuffled_rows, standard_rows, FIXED_RANDOM_TABLE};
