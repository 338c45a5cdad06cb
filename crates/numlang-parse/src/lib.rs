pub mod parser;
mod patterns;
pub mod tokenizer;

pub use parser::{Parser, from_string, from_words};
pub use tokenizer::{Token, TokenKind, TokenSpan, Tokenizer, tokenise};

// Re-export common types
pub use numlang_common::{ErrorKind, NumlangError};
