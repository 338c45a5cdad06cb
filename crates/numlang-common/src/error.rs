//! Error taxonomy shared by the generators and the parser.
//!
//! - **`NumlangError`**: one enum, one variant per failure class, each carrying
//!   the offending value or word so the message can point at it.
//! - **`ErrorKind`**: a `Copy` discriminant for callers that only need to branch.
//!
//! Every failure is immediate and all-or-nothing; nothing here is retried.

use thiserror::Error;

/// All failures produced by numlang operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum NumlangError {
    /// Argument could not be read as a finite number (or is out of range).
    #[error("invalid numeric input: {0}")]
    InvalidInput(String),
    /// An ordinal form was requested for a non-integer.
    #[error("ordinal forms are only defined for integers, got {0}")]
    FloatNotSupported(String),
    /// The word parser met a word outside every known vocabulary.
    #[error("unknown token: {0}")]
    UnknownToken(String),
    /// A non-digit word followed `point`.
    #[error("invalid decimal digit: {0}")]
    InvalidDecimalDigit(String),
}

/// Discriminant of a [`NumlangError`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidInput,
    FloatNotSupported,
    UnknownToken,
    InvalidDecimalDigit,
}

impl NumlangError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
            Self::FloatNotSupported(_) => ErrorKind::FloatNotSupported,
            Self::UnknownToken(_) => ErrorKind::UnknownToken,
            Self::InvalidDecimalDigit(_) => ErrorKind::InvalidDecimalDigit,
        }
    }

    /// The value or word the error refers to.
    pub fn subject(&self) -> &str {
        match self {
            Self::InvalidInput(s)
            | Self::FloatNotSupported(s)
            | Self::UnknownToken(s)
            | Self::InvalidDecimalDigit(s) => s,
        }
    }
}

impl From<NumlangError> for String {
    fn from(error: NumlangError) -> Self {
        format!("{error}")
    }
}

impl PartialEq<ErrorKind> for NumlangError {
    fn eq(&self, other: &ErrorKind) -> bool {
        self.kind() == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_word() {
        let err = NumlangError::UnknownToken("foo".into());
        assert_eq!(err.to_string(), "unknown token: foo");
        assert_eq!(err.subject(), "foo");
        assert_eq!(err, ErrorKind::UnknownToken);
    }

    #[test]
    fn kind_matches_variant() {
        assert_eq!(
            NumlangError::FloatNotSupported("1.5".into()).kind(),
            ErrorKind::FloatNotSupported
        );
        assert_eq!(
            NumlangError::InvalidDecimalDigit("ten".into()).kind(),
            ErrorKind::InvalidDecimalDigit
        );
        let s: String = NumlangError::InvalidInput("abc".into()).into();
        assert_eq!(s, "invalid numeric input: abc");
    }
}
