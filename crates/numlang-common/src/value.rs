use std::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::NumlangError;

/// Exclusive upper bound of `u128` as an `f64` (2^128).
const U128_LIMIT: f64 = 340_282_366_920_938_463_463_374_607_431_768_211_456.0;

/// Default number of decimals assumed for a float whose rendering has no `.`.
const DEFAULT_FLOAT_DECIMALS: usize = 2;

/// Anything an entry point accepts as a number.
///
/// Integers, floats and numeric text take separate paths because text keeps
/// its decimal digits verbatim while floats go through precision inference.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum NumberInput {
    Int(i128),
    Float(f64),
    Text(String),
}

impl Display for NumberInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberInput::Int(i) => write!(f, "{i}"),
            NumberInput::Float(x) => write!(f, "{x}"),
            NumberInput::Text(s) => f.write_str(s),
        }
    }
}

macro_rules! int_input {
    ($($t:ty),*) => {
        $(
            impl From<$t> for NumberInput {
                fn from(value: $t) -> Self {
                    NumberInput::Int(value as i128)
                }
            }
        )*
    };
}

int_input!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);

impl From<f64> for NumberInput {
    fn from(value: f64) -> Self {
        NumberInput::Float(value)
    }
}

impl From<f32> for NumberInput {
    fn from(value: f32) -> Self {
        NumberInput::Float(value as f64)
    }
}

impl From<&str> for NumberInput {
    fn from(value: &str) -> Self {
        NumberInput::Text(value.to_string())
    }
}

impl From<String> for NumberInput {
    fn from(value: String) -> Self {
        NumberInput::Text(value)
    }
}

impl From<&String> for NumberInput {
    fn from(value: &String) -> Self {
        NumberInput::Text(value.clone())
    }
}

/// A signed decimal split into its integer magnitude and verbatim fractional digits.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NumericValue {
    pub negative: bool,
    pub integer: u128,
    /// Non-empty run of ASCII digits, or `None` for an integer.
    pub fraction: Option<String>,
}

impl NumericValue {
    /// Build a value, checking that `fraction` is a non-empty digit run.
    pub fn new(negative: bool, integer: u128, fraction: Option<&str>) -> Result<Self, NumlangError> {
        if let Some(digits) = fraction {
            if !is_digit_run(digits) {
                return Err(NumlangError::InvalidInput(format!("{integer}.{digits}")));
            }
        }
        Ok(Self {
            negative,
            integer,
            fraction: fraction.map(str::to_string),
        })
    }

    pub fn from_int(value: i128) -> Self {
        Self {
            negative: value < 0,
            integer: value.unsigned_abs(),
            fraction: None,
        }
    }

    /// Convert a float, inferring how many decimals it "naturally" has.
    ///
    /// The precision comes from the shortest round-trip rendering of the
    /// magnitude (`12.34` keeps two digits, `0.1 + 0.2` keeps seventeen).
    /// This is a formatting heuristic for binary floats, not an exact
    /// decimal contract: pass text when the digits matter.
    pub fn from_float(value: f64) -> Result<Self, NumlangError> {
        if !value.is_finite() {
            return Err(NumlangError::InvalidInput(value.to_string()));
        }
        let negative = value < 0.0;
        let magnitude = value.abs();
        if magnitude >= U128_LIMIT {
            return Err(NumlangError::InvalidInput(value.to_string()));
        }
        if magnitude.fract() == 0.0 {
            return Ok(Self {
                negative,
                integer: magnitude as u128,
                fraction: None,
            });
        }

        let rendered = magnitude.to_string();
        let decimals = rendered
            .split_once('.')
            .map(|(_, digits)| digits.len())
            .unwrap_or(DEFAULT_FLOAT_DECIMALS);
        let fixed = format!("{magnitude:.decimals$}");
        let (int_text, frac_text) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
        let integer = int_text
            .parse::<u128>()
            .map_err(|_| NumlangError::InvalidInput(value.to_string()))?;
        Ok(Self {
            negative,
            integer,
            fraction: (!frac_text.is_empty()).then(|| frac_text.to_string()),
        })
    }

    /// Convert numeric text. Plain decimals are split textually so their
    /// digits survive untouched; other numeric spellings (`1e3`) fall back
    /// to the float path.
    pub fn from_text(text: &str) -> Result<Self, NumlangError> {
        let trimmed = text.trim();
        let parsed: f64 = trimmed
            .parse()
            .map_err(|_| NumlangError::InvalidInput(text.to_string()))?;
        if !parsed.is_finite() {
            return Err(NumlangError::InvalidInput(text.to_string()));
        }
        let negative = parsed < 0.0;
        let body = trimmed.strip_prefix('-').unwrap_or(trimmed);

        let textual = match body.split_once('.') {
            Some((int_text, frac_text)) if is_digit_run(frac_text) || frac_text.is_empty() => {
                let integer = if int_text.is_empty() {
                    Some(0)
                } else {
                    int_text.parse::<u128>().ok()
                };
                integer.map(|integer| (integer, (!frac_text.is_empty()).then_some(frac_text)))
            }
            Some(_) => None,
            None => body.parse::<u128>().ok().map(|integer| (integer, None)),
        };

        match textual {
            Some((integer, fraction)) => Ok(Self {
                negative,
                integer,
                fraction: fraction.map(str::to_string),
            }),
            None => Self::from_float(parsed)
                .map_err(|_| NumlangError::InvalidInput(text.to_string())),
        }
    }

    pub fn is_integer(&self) -> bool {
        self.fraction.is_none()
    }

}

impl TryFrom<NumberInput> for NumericValue {
    type Error = NumlangError;

    fn try_from(input: NumberInput) -> Result<Self, Self::Error> {
        match input {
            NumberInput::Int(i) => Ok(Self::from_int(i)),
            NumberInput::Float(x) => Self::from_float(x),
            NumberInput::Text(s) => Self::from_text(&s),
        }
    }
}

impl Display for NumericValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        write!(f, "{}", self.integer)?;
        if let Some(digits) = &self.fraction {
            write!(f, ".{digits}")?;
        }
        Ok(())
    }
}

fn is_digit_run(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
