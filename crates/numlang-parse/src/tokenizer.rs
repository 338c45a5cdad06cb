//! Free-text tokenizer for numbers, number words and unit abbreviations.
//!
//! The scan never fails: anything it cannot classify becomes
//! [`Token::Unknown`]. Spans are byte offsets into the original input, so
//! the tokens plus the whitespace between them rebuild the input exactly.

use std::fmt::{self, Display};

use numlang_common::lexicon::is_number_word;
use numlang_units::is_compound_unit;
use smallvec::SmallVec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::patterns::{NUMERAL, NUMERIC_PREFIX, VALUE_UNIT};

/// The kind of a token, without its text.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    NumberWord,
    NumberString,
    Unit,
    Unknown,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// A classified piece of input, carrying the matched text as written.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", content = "value"))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    NumberWord(String),
    NumberString(String),
    Unit(String),
    Unknown(String),
}

impl Token {
    pub fn new(kind: TokenKind, text: &str) -> Self {
        let text = text.to_string();
        match kind {
            TokenKind::NumberWord => Token::NumberWord(text),
            TokenKind::NumberString => Token::NumberString(text),
            TokenKind::Unit => Token::Unit(text),
            TokenKind::Unknown => Token::Unknown(text),
        }
    }

    pub fn kind(&self) -> TokenKind {
        match self {
            Token::NumberWord(_) => TokenKind::NumberWord,
            Token::NumberString(_) => TokenKind::NumberString,
            Token::Unit(_) => TokenKind::Unit,
            Token::Unknown(_) => TokenKind::Unknown,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Token::NumberWord(s) | Token::NumberString(s) | Token::Unit(s) | Token::Unknown(s) => s,
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{} {}>", self.kind(), self.text())
    }
}

/// A token with its half-open byte range in the source.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TokenSpan {
    pub token: Token,
    pub start: usize,
    pub end: usize,
}

impl TokenSpan {
    fn from_slice(source: &str, kind: TokenKind, start: usize, end: usize) -> Self {
        TokenSpan {
            token: Token::new(kind, &source[start..end]),
            start,
            end,
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.token.kind()
    }
}

/// Tokenizer over a piece of free text (dosage lines, spoken numbers).
pub struct Tokenizer {
    source: String,
    pub items: Vec<TokenSpan>,
    offset: usize,
}

impl Tokenizer {
    /// Create a tokenizer and immediately scan `text`.
    pub fn new(text: &str) -> Self {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("tokenise", bytes = text.len()).entered();

        let mut tokenizer = Tokenizer {
            source: text.to_string(),
            items: Vec::with_capacity(text.len() / 3),
            offset: 0,
        };
        tokenizer.scan();
        #[cfg(feature = "tracing")]
        tracing::trace!(tokens = tokenizer.items.len(), "tokenised");
        tokenizer
    }

    pub fn into_spans(self) -> Vec<TokenSpan> {
        self.items
    }

    /// Walk whitespace-delimited chunks left to right.
    fn scan(&mut self) {
        let len = self.source.len();
        while self.offset < len {
            let rest = &self.source[self.offset..];
            self.offset += rest
                .find(|c: char| !c.is_whitespace())
                .unwrap_or(rest.len());
            if self.offset >= len {
                break;
            }

            let start = self.offset;
            let rest = &self.source[start..];
            self.offset += rest.find(char::is_whitespace).unwrap_or(rest.len());
            self.scan_chunk(start, self.offset);
        }
    }

    fn scan_chunk(&mut self, start: usize, end: usize) {
        for (piece_start, piece_end) in split_punctuation(&self.source[start..end]) {
            self.classify(start + piece_start, start + piece_end);
        }
    }

    /// Classify one piece and push its token(s).
    fn classify(&mut self, start: usize, end: usize) {
        let text = &self.source[start..end];

        if let Some(split) = fused_unit_split(text) {
            let mid = start + split;
            self.items.push(TokenSpan::from_slice(
                &self.source,
                TokenKind::NumberString,
                start,
                mid,
            ));
            self.items
                .push(TokenSpan::from_slice(&self.source, TokenKind::Unit, mid, end));
            return;
        }

        let kind = classify_piece(text);
        self.items
            .push(TokenSpan::from_slice(&self.source, kind, start, end));
    }

    /// Rebuild the source from the tokens and the gaps between them.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.source.len());
        let mut cursor = 0;
        for span in &self.items {
            out.push_str(&self.source[cursor..span.start]);
            out.push_str(span.token.text());
            cursor = span.end;
        }
        out.push_str(&self.source[cursor..]);
        out
    }
}

impl From<&str> for Tokenizer {
    fn from(value: &str) -> Self {
        Tokenizer::new(value)
    }
}

impl From<String> for Tokenizer {
    fn from(value: String) -> Self {
        Tokenizer::new(&value)
    }
}

/// Tokenise `text` into ordered, non-overlapping spans.
///
/// ```
/// use numlang_parse::{Token, tokenise};
///
/// let spans = tokenise("3.5kg");
/// assert_eq!(spans[0].token, Token::NumberString("3.5".into()));
/// assert_eq!(spans[1].token, Token::Unit("kg".into()));
/// assert_eq!((spans[1].start, spans[1].end), (3, 5));
/// ```
pub fn tokenise(text: &str) -> Vec<TokenSpan> {
    Tokenizer::new(text).into_spans()
}

/// Split a chunk into leading punctuation, inner text and trailing
/// punctuation. Interior punctuation stays with the inner text. A chunk
/// made only of punctuation is a single piece.
fn split_punctuation(chunk: &str) -> SmallVec<[(usize, usize); 3]> {
    let mut pieces = SmallVec::new();
    let len = chunk.len();

    let Some(inner_start) = chunk.find(|c: char| !c.is_ascii_punctuation()) else {
        pieces.push((0, len));
        return pieces;
    };
    let inner_end = chunk
        .char_indices()
        .rev()
        .find(|(_, c)| !c.is_ascii_punctuation())
        .map(|(idx, c)| idx + c.len_utf8())
        .unwrap_or(len);

    if inner_start > 0 {
        pieces.push((0, inner_start));
    }
    pieces.push((inner_start, inner_end));
    if inner_end < len {
        pieces.push((inner_end, len));
    }
    pieces
}

/// Byte offset where a fused number+unit piece splits, if it is one.
fn fused_unit_split(text: &str) -> Option<usize> {
    if let Some(caps) = VALUE_UNIT.captures(text) {
        return caps.get(1).map(|m| m.end());
    }
    let prefix = NUMERIC_PREFIX.find(text)?;
    let split = prefix.end();
    (split < text.len() && is_compound_unit(&text[split..])).then_some(split)
}

fn classify_piece(text: &str) -> TokenKind {
    if NUMERAL.is_match(text) {
        return TokenKind::NumberString;
    }
    let lower = text.to_lowercase();
    if lower.split('-').all(is_number_word) {
        return TokenKind::NumberWord;
    }
    if text.chars().all(|c| c.is_ascii_punctuation()) {
        return TokenKind::Unknown;
    }
    if looks_like_unit(text) || is_compound_unit(text) {
        return TokenKind::Unit;
    }
    TokenKind::Unknown
}

/// 1-4 ASCII letters with no vowel in either case ("mg", "ML", "tsp").
fn looks_like_unit(text: &str) -> bool {
    (1..=4).contains(&text.len())
        && text.chars().all(|c| c.is_ascii_alphabetic())
        && !text
            .chars()
            .any(|c| matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(text: &str) -> Vec<TokenKind> {
        tokenise(text).iter().map(TokenSpan::kind).collect()
    }

    #[test]
    fn punctuation_split_is_at_most_three_pieces() {
        assert_eq!(split_punctuation("(seven)").as_slice(), &[(0, 1), (1, 6), (6, 7)]);
        assert_eq!(split_punctuation("\"foo!\"").as_slice(), &[(0, 1), (1, 4), (4, 6)]);
        assert_eq!(split_punctuation("a.b").as_slice(), &[(0, 3)]);
        assert_eq!(split_punctuation("...").as_slice(), &[(0, 3)]);
        assert_eq!(split_punctuation("µg.").as_slice(), &[(0, 3), (3, 4)]);
    }

    #[test]
    fn fused_split_points() {
        assert_eq!(fused_unit_split("200g"), Some(3));
        assert_eq!(fused_unit_split("3.5kg"), Some(3));
        assert_eq!(fused_unit_split("20mg/kg"), Some(2));
        assert_eq!(fused_unit_split("20km/h"), None);
        assert_eq!(fused_unit_split("200"), None);
        assert_eq!(fused_unit_split("200grams"), None);
    }

    #[test]
    fn classification_precedence() {
        assert_eq!(classify_piece("-12"), TokenKind::NumberString);
        assert_eq!(classify_piece("Twenty-One"), TokenKind::NumberWord);
        assert_eq!(classify_piece("twenty--one"), TokenKind::Unknown);
        assert_eq!(classify_piece("once"), TokenKind::Unknown);
        assert_eq!(classify_piece("mg"), TokenKind::Unit);
        assert_eq!(classify_piece("IU"), TokenKind::Unknown);
        assert_eq!(classify_piece("mg/kg"), TokenKind::Unit);
        assert_eq!(classify_piece("12.34.56"), TokenKind::Unknown);
    }

    #[test]
    fn whitespace_runs_are_skipped() {
        assert!(tokenise("").is_empty());
        assert!(tokenise(" \t\n ").is_empty());
        assert_eq!(
            kinds("  two\u{00a0}\tmg "),
            vec![TokenKind::NumberWord, TokenKind::Unit]
        );
    }

    #[cfg(feature = "tracing")]
    #[test]
    fn scan_runs_inside_a_tokenise_span() {
        use std::sync::{Arc, Mutex};
        use tracing::{Event, Metadata, Subscriber, span};

        struct SpanNames(Arc<Mutex<Vec<&'static str>>>);

        impl Subscriber for SpanNames {
            fn enabled(&self, _: &Metadata<'_>) -> bool {
                true
            }
            fn new_span(&self, attrs: &span::Attributes<'_>) -> span::Id {
                let mut names = self.0.lock().unwrap();
                names.push(attrs.metadata().name());
                span::Id::from_u64(names.len() as u64)
            }
            fn record(&self, _: &span::Id, _: &span::Record<'_>) {}
            fn record_follows_from(&self, _: &span::Id, _: &span::Id) {}
            fn event(&self, _: &Event<'_>) {}
            fn enter(&self, _: &span::Id) {}
            fn exit(&self, _: &span::Id) {}
        }

        let names = Arc::new(Mutex::new(Vec::new()));
        let spans =
            tracing::subscriber::with_default(SpanNames(names.clone()), || tokenise("2 mg"));
        assert_eq!(spans.len(), 2);
        assert_eq!(names.lock().unwrap().as_slice(), ["tokenise"]);
    }

    #[test]
    fn render_round_trips() {
        let text = "  Take 2.5ml (twice) daily,\tthen 20mg/kg. ";
        assert_eq!(Tokenizer::new(text).render(), text);
    }
}
