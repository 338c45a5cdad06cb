//! Meta crate that re-exports the numlang building blocks. Each layer sits
//! behind a feature flag (`format`, `parse`, `units`, all on by default);
//! the underlying crates stay reachable for deeper integration.
//!
//! ```
//! # #[cfg(all(feature = "format", feature = "parse"))] {
//! use numlang::{FormattingConfig, from_words, to_words};
//!
//! let words = to_words(1001, &FormattingConfig::default()).unwrap();
//! assert_eq!(words, "one thousand one");
//! assert_eq!(from_words(&words), Ok(1001.0));
//! # }
//! ```

pub use numlang_common as common;
pub use numlang_common::{
    ErrorKind, FormattingConfig, NumberInput, NumericValue, NumlangError,
};

#[cfg(feature = "format")]
pub use numlang_format as format;

#[cfg(feature = "format")]
pub use numlang_format::{to_ordinal, to_words, to_words_ordinal};

#[cfg(feature = "parse")]
pub use numlang_parse as parse;

#[cfg(feature = "parse")]
pub use numlang_parse::{
    Parser, Token, TokenKind, TokenSpan, Tokenizer, from_string, from_words, tokenise,
};

#[cfg(feature = "units")]
pub use numlang_units as units;

#[cfg(feature = "units")]
pub use numlang_units::{
    UnitType, abbreviate_unit, expand_unit, is_abbreviation, to_plural, to_singular, unit_type,
};
