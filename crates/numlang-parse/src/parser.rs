use numlang_common::NumlangError;
use numlang_common::lexicon::{Lexeme, lexeme};

use crate::patterns::NUMERAL;

/// Powers of ten reachable through scale words, as exact `f64` literals.
fn scale_magnitude(exponent: u32) -> f64 {
    match exponent {
        2 => 1e2,
        3 => 1e3,
        6 => 1e6,
        9 => 1e9,
        12 => 1e12,
        15 => 1e15,
        18 => 1e18,
        21 => 1e21,
        24 => 1e24,
        27 => 1e27,
        30 => 1e30,
        33 => 1e33,
        other => 10f64.powi(other as i32),
    }
}

#[derive(Debug, Default)]
struct Accumulator {
    current: f64,
    total: f64,
    negative: bool,
}

impl Accumulator {
    fn scale(&mut self, exponent: u32) {
        if self.current == 0.0 {
            self.current = 1.0;
        }
        self.current *= scale_magnitude(exponent);
        if exponent >= 3 {
            self.total += self.current;
            self.current = 0.0;
        }
    }

    fn finish(self, digits: &str) -> Result<f64, NumlangError> {
        let total = self.total + self.current;
        let magnitude = if digits.is_empty() {
            total
        } else {
            format!("{total}.{digits}")
                .parse::<f64>()
                .map_err(|_| NumlangError::InvalidDecimalDigit(digits.to_string()))?
        };
        Ok(if self.negative { -magnitude } else { magnitude })
    }
}

/// Word-to-number parser over a normalised phrase.
///
/// Words are lowercase with hyphens already split out; construct through
/// [`Parser::new`] and consume with [`Parser::parse`].
pub struct Parser {
    words: Vec<String>,
    position: usize,
}

impl Parser {
    pub fn new(phrase: &str) -> Self {
        let words = normalise(phrase)
            .split_whitespace()
            .map(str::to_string)
            .collect();
        Parser { words, position: 0 }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    fn next_word(&mut self) -> Option<&str> {
        let word = self.words.get(self.position)?;
        self.position += 1;
        Some(word.as_str())
    }

    pub fn parse(&mut self) -> Result<f64, NumlangError> {
        if self.words.is_empty() {
            return Err(NumlangError::UnknownToken(String::new()));
        }

        let mut acc = Accumulator::default();
        let mut digits = String::new();

        while let Some(word) = self.next_word() {
            match lexeme(word) {
                Some(Lexeme::Negative) => acc.negative = true,
                Some(Lexeme::Point) => {
                    self.decimal_digits(&mut digits)?;
                    break;
                }
                Some(Lexeme::Ones(v)) | Some(Lexeme::Tens(v)) => acc.current += f64::from(v),
                Some(Lexeme::Scale(exponent)) => acc.scale(exponent),
                Some(Lexeme::And) => {}
                Some(Lexeme::Frequency(v)) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(word, "frequency adverb mid-phrase, returning early");
                    return Ok(f64::from(v));
                }
                None => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(word, "rejected word");
                    return Err(NumlangError::UnknownToken(word.to_string()));
                }
            }
        }

        acc.finish(&digits)
    }

    /// Consume every remaining word as a single decimal digit.
    fn decimal_digits(&mut self, digits: &mut String) -> Result<(), NumlangError> {
        while let Some(word) = self.next_word() {
            match lexeme(word) {
                Some(Lexeme::Ones(v)) if v <= 9 => digits.push(char::from(b'0' + v)),
                _ => return Err(NumlangError::InvalidDecimalDigit(word.to_string())),
            }
        }
        Ok(())
    }
}

fn normalise(phrase: &str) -> String {
    phrase.trim().to_lowercase().replace('-', " ")
}

/// Parse an English number phrase (or a plain numeral) into a value.
///
/// ```
/// use numlang_parse::from_words;
///
/// assert_eq!(from_words("one thousand two hundred and thirty-four"), Ok(1234.0));
/// assert_eq!(from_words("negative twelve point three four"), Ok(-12.34));
/// assert_eq!(from_words("Twice"), Ok(2.0));
/// ```
pub fn from_words(phrase: &str) -> Result<f64, NumlangError> {
    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!("from_words", phrase).entered();

    let trimmed = phrase.trim();
    if NUMERAL.is_match(trimmed) {
        #[cfg(feature = "tracing")]
        tracing::trace!("numeral fast path");
        return trimmed
            .parse::<f64>()
            .map_err(|_| NumlangError::InvalidInput(trimmed.to_string()));
    }

    let normalised = normalise(trimmed);
    if let Some(Lexeme::Frequency(v)) = lexeme(normalised.as_str()) {
        return Ok(f64::from(v));
    }

    Parser::new(&normalised).parse()
}

/// Parse a decimal numeral, rejecting anything that is not a finite number.
pub fn from_string(text: &str) -> Result<f64, NumlangError> {
    let trimmed = text.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(NumlangError::InvalidInput(text.to_string())),
    }
}
