use once_cell::sync::Lazy;
use regex::Regex;

/// Optionally signed integer or decimal, nothing else.
pub(crate) static NUMERAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?[0-9]+(?:\.[0-9]+)?$").expect("numeral pattern"));

/// Unsigned number immediately followed by 1-4 letters ("3.5kg", "200g").
pub(crate) static VALUE_UNIT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]+(?:\.[0-9]+)?)([A-Za-z]{1,4})$").expect("value+unit pattern")
});

/// Leading unsigned number of a piece, used to peel it off a compound unit.
pub(crate) static NUMERIC_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+(?:\.[0-9]+)?").expect("numeric prefix pattern"));
