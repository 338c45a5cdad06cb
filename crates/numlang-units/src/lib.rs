//! Static unit and plural tables consumed by the numlang tokenizer.

pub mod plural;
pub mod unit;

pub use plural::{is_abbreviation, to_plural, to_singular};
pub use unit::{UnitType, abbreviate_unit, expand_unit, is_compound_unit, unit_type};
