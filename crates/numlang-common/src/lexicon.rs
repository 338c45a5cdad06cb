//! English number vocabulary.
//!
//! Pure data: the word tables used by the cardinal/ordinal generators and
//! the classification map used by the tokenizer and the word parser. The
//! map is built once on first use and is read-only afterwards.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

/// Words for 0..=19, indexed by value.
pub const ONES: [&str; 20] = [
    "zero",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

/// Tens words indexed by tens digit; slots 0 and 1 are unused.
pub const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

pub const HUNDRED: &str = "hundred";

/// Scale words indexed by base-1000 chunk position. Slot 0 (units) is empty.
pub const SCALES: [&str; 12] = [
    "",
    "thousand",
    "million",
    "billion",
    "trillion",
    "quadrillion",
    "quintillion",
    "sextillion",
    "septillion",
    "octillion",
    "nonillion",
    "decillion",
];

pub const ORDINAL_ONES: [(&str, &str); 9] = [
    ("one", "first"),
    ("two", "second"),
    ("three", "third"),
    ("four", "fourth"),
    ("five", "fifth"),
    ("six", "sixth"),
    ("seven", "seventh"),
    ("eight", "eighth"),
    ("nine", "ninth"),
];

pub const ORDINAL_TENS: [(&str, &str); 9] = [
    ("ten", "tenth"),
    ("twenty", "twentieth"),
    ("thirty", "thirtieth"),
    ("forty", "fortieth"),
    ("fifty", "fiftieth"),
    ("sixty", "sixtieth"),
    ("seventy", "seventieth"),
    ("eighty", "eightieth"),
    ("ninety", "ninetieth"),
];

/// Teens whose ordinal is not the cardinal plus "th".
pub const ORDINAL_TEENS: [(&str, &str); 1] = [("twelve", "twelfth")];

/// Suffix for a numeral, keyed by its last digit (the 11..=13 band is handled by the caller).
pub const ORDINAL_SUFFIXES: [&str; 10] = ["th", "st", "nd", "rd", "th", "th", "th", "th", "th", "th"];

pub const FREQUENCY_ADVERBS: [(&str, u8); 3] = [("once", 1), ("twice", 2), ("thrice", 3)];

/// What a single lowercase word means to the number parser.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Lexeme {
    /// zero..nineteen
    Ones(u8),
    /// twenty..ninety, carrying the full value (20, 30, ...)
    Tens(u8),
    /// hundred and the chunk scales, carrying the power of ten
    Scale(u32),
    Point,
    Negative,
    And,
    /// once/twice/thrice
    Frequency(u8),
}

impl Lexeme {
    /// Whether the tokenizer treats this lexeme as part of the number-word vocabulary.
    /// Frequency adverbs are parser-only.
    pub fn is_number_word(self) -> bool {
        !matches!(self, Lexeme::Frequency(_))
    }
}

static LEXEMES: Lazy<FxHashMap<&'static str, Lexeme>> = Lazy::new(|| {
    let mut map = FxHashMap::default();
    for (value, word) in ONES.iter().enumerate() {
        map.insert(*word, Lexeme::Ones(value as u8));
    }
    for (digit, word) in TENS.iter().enumerate().skip(2) {
        map.insert(*word, Lexeme::Tens(digit as u8 * 10));
    }
    map.insert(HUNDRED, Lexeme::Scale(2));
    for (index, word) in SCALES.iter().enumerate().skip(1) {
        map.insert(*word, Lexeme::Scale(index as u32 * 3));
    }
    map.insert("point", Lexeme::Point);
    map.insert("negative", Lexeme::Negative);
    map.insert("and", Lexeme::And);
    for (word, value) in FREQUENCY_ADVERBS {
        map.insert(word, Lexeme::Frequency(value));
    }
    map
});

/// Look up an already-lowercased word.
#[inline]
pub fn lexeme(word: &str) -> Option<Lexeme> {
    LEXEMES.get(word).copied()
}

/// Exact membership in the number-word vocabulary (lowercase input).
pub fn is_number_word(word: &str) -> bool {
    lexeme(word).is_some_and(Lexeme::is_number_word)
}

/// Whether `word` is one of the chunk scales (thousand..decillion).
pub fn is_chunk_scale(word: &str) -> bool {
    SCALES.iter().skip(1).any(|s| *s == word)
}

/// Ordinal form of a ones (one..nine), tens (ten..ninety) or irregular teen word.
pub fn ordinal_word(word: &str) -> Option<&'static str> {
    ORDINAL_ONES
        .iter()
        .chain(ORDINAL_TENS.iter())
        .chain(ORDINAL_TEENS.iter())
        .find(|(cardinal, _)| *cardinal == word)
        .map(|(_, ordinal)| *ordinal)
}

/// Ordinal form of a ones word only (one..nine).
pub fn ordinal_ones_word(word: &str) -> Option<&'static str> {
    ORDINAL_ONES
        .iter()
        .find(|(cardinal, _)| *cardinal == word)
        .map(|(_, ordinal)| *ordinal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_vocabulary() {
        assert_eq!(lexeme("seventeen"), Some(Lexeme::Ones(17)));
        assert_eq!(lexeme("forty"), Some(Lexeme::Tens(40)));
        assert_eq!(lexeme("hundred"), Some(Lexeme::Scale(2)));
        assert_eq!(lexeme("thousand"), Some(Lexeme::Scale(3)));
        assert_eq!(lexeme("decillion"), Some(Lexeme::Scale(33)));
        assert_eq!(lexeme("twice"), Some(Lexeme::Frequency(2)));
        assert_eq!(lexeme(""), None);
        assert_eq!(lexeme("Forty"), None);
    }

    #[test]
    fn frequency_adverbs_are_not_number_words() {
        assert!(is_number_word("and"));
        assert!(is_number_word("point"));
        assert!(!is_number_word("once"));
        assert!(!is_number_word("mg"));
    }

    #[test]
    fn ordinal_tables() {
        assert_eq!(ordinal_word("ninety"), Some("ninetieth"));
        assert_eq!(ordinal_word("three"), Some("third"));
        assert_eq!(ordinal_word("eleven"), None);
        assert_eq!(ordinal_word("twelve"), Some("twelfth"));
        assert_eq!(ordinal_ones_word("ten"), None);
        assert!(is_chunk_scale("million"));
        assert!(!is_chunk_scale("hundred"));
    }
}
