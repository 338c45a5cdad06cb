#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Output options for the cardinal and ordinal word generators.
///
/// All switches default to `false`. With the `serde` feature a partial
/// document (`{"useAnd": true}`) fills the missing fields from the default.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FormattingConfig {
    /// Separate base-1000 chunks with `", "` instead of a space.
    pub use_commas: bool,
    /// Join a hundred and its remainder with `" and "`.
    pub use_and: bool,
    /// Append `" only"` (cheque style).
    pub append_only: bool,
    /// Uppercase the whole result. Applied after `capitalize`.
    pub uppercase: bool,
    /// Uppercase the first character.
    pub capitalize: bool,
}

impl FormattingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_commas(self, use_commas: bool) -> Self {
        Self { use_commas, ..self }
    }

    pub fn with_and(self, use_and: bool) -> Self {
        Self { use_and, ..self }
    }

    pub fn with_append_only(self, append_only: bool) -> Self {
        Self {
            append_only,
            ..self
        }
    }

    pub fn with_uppercase(self, uppercase: bool) -> Self {
        Self { uppercase, ..self }
    }

    pub fn with_capitalize(self, capitalize: bool) -> Self {
        Self { capitalize, ..self }
    }

    /// Only the options that change word structure (commas, "and").
    pub fn structural(self) -> Self {
        Self {
            use_commas: self.use_commas,
            use_and: self.use_and,
            ..Self::default()
        }
    }

    /// Apply the finishing options in order: `append_only`, `capitalize`, `uppercase`.
    pub fn finish(&self, mut text: String) -> String {
        if self.append_only {
            text.push_str(" only");
        }
        if self.capitalize {
            let mut chars = text.chars();
            if let Some(first) = chars.next() {
                text = first.to_uppercase().chain(chars).collect();
            }
        }
        if self.uppercase {
            text = text.to_uppercase();
        }
        text
    }
}
