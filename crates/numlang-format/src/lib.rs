//! Number → English words.
//!
//! [`to_words`] renders cardinals ("one thousand two hundred thirty-four"),
//! [`to_ordinal`] renders numerals with a suffix ("21st") and
//! [`to_words_ordinal`] renders ordinal words ("twenty-first").

pub mod cardinal;
pub mod ordinal;

pub use cardinal::{integer_words, render_cardinal, to_words};
pub use ordinal::{ordinal_suffix, to_ordinal, to_words_ordinal};

pub use numlang_common::{FormattingConfig, NumberInput, NumericValue, NumlangError};
