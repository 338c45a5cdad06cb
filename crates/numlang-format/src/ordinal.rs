use numlang_common::lexicon::{
    ORDINAL_SUFFIXES, is_chunk_scale, ordinal_ones_word, ordinal_word,
};
use numlang_common::{FormattingConfig, NumberInput, NumericValue, NumlangError};

use crate::cardinal::integer_words;

/// Numeral with its English ordinal suffix: `21` → `"21st"`, `-3` → `"-3rd"`.
pub fn to_ordinal(value: impl Into<NumberInput>) -> Result<String, NumlangError> {
    let value = integral(value.into())?;
    Ok(format!("{value}{}", ordinal_suffix(value.integer)))
}

/// Ordinal words: `21` → `"twenty-first"`, `100` → `"one hundredth"`.
///
/// Only `use_commas`/`use_and` shape the cardinal stem; the finishing
/// options are applied once to the finished ordinal phrase.
pub fn to_words_ordinal(
    value: impl Into<NumberInput>,
    config: &FormattingConfig,
) -> Result<String, NumlangError> {
    let input = value.into();
    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!("to_words_ordinal", input = %input).entered();

    let value = integral(input)?;
    let words = ordinal_words(value.integer, &config.structural())?;
    let phrase = if value.negative && value.integer != 0 {
        format!("negative {words}")
    } else {
        words
    };
    Ok(config.finish(phrase))
}

/// Suffix for a magnitude; the 11..=13 band always takes "th".
pub fn ordinal_suffix(magnitude: u128) -> &'static str {
    if (11..=13).contains(&(magnitude % 100)) {
        "th"
    } else {
        ORDINAL_SUFFIXES[(magnitude % 10) as usize]
    }
}

fn ordinal_words(magnitude: u128, config: &FormattingConfig) -> Result<String, NumlangError> {
    if magnitude == 0 {
        return Ok("zeroth".to_string());
    }
    let cardinal = integer_words(magnitude, config)?;
    let (head, last) = match cardinal.rfind(' ') {
        Some(idx) => cardinal.split_at(idx + 1),
        None => ("", cardinal.as_str()),
    };
    Ok(format!("{head}{}", ordinalise_word(last)))
}

/// Turn the final cardinal word into its ordinal form.
fn ordinalise_word(word: &str) -> String {
    if let Some((stem, tail)) = word.rsplit_once('-') {
        return match ordinal_ones_word(tail) {
            Some(ordinal) => format!("{stem}-{ordinal}"),
            None => format!("{word}th"),
        };
    }
    if is_chunk_scale(word) {
        return format!("{word}th");
    }
    match ordinal_word(word) {
        Some(ordinal) => ordinal.to_string(),
        None => format!("{word}th"),
    }
}

/// Accept only integers. Text containing a `.` is rejected even when the
/// fraction is zero ("2.0").
fn integral(input: NumberInput) -> Result<NumericValue, NumlangError> {
    if let NumberInput::Text(text) = &input {
        if text.contains('.') && text.trim().parse::<f64>().is_ok() {
            return Err(NumlangError::FloatNotSupported(text.clone()));
        }
    }
    let value = NumericValue::try_from(input)?;
    if value.is_integer() {
        Ok(value)
    } else {
        Err(NumlangError::FloatNotSupported(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_word_rules() {
        assert_eq!(ordinalise_word("twenty-one"), "twenty-first");
        assert_eq!(ordinalise_word("ninety"), "ninetieth");
        assert_eq!(ordinalise_word("million"), "millionth");
        assert_eq!(ordinalise_word("hundred"), "hundredth");
        assert_eq!(ordinalise_word("eleven"), "eleventh");
        assert_eq!(ordinalise_word("twelve"), "twelfth");
        assert_eq!(ordinalise_word("eight"), "eighth");
    }

    #[test]
    fn suffix_band() {
        for n in [11u128, 12, 13, 111, 212, 1013] {
            assert_eq!(ordinal_suffix(n), "th", "{n}");
        }
        assert_eq!(ordinal_suffix(1), "st");
        assert_eq!(ordinal_suffix(22), "nd");
        assert_eq!(ordinal_suffix(103), "rd");
        assert_eq!(ordinal_suffix(0), "th");
    }

    #[test]
    fn integral_rejects_fractions() {
        assert!(matches!(
            integral(NumberInput::Text("2.0".into())),
            Err(NumlangError::FloatNotSupported(_))
        ));
        assert!(matches!(
            integral(NumberInput::Float(1.5)),
            Err(NumlangError::FloatNotSupported(_))
        ));
        assert!(matches!(
            integral(NumberInput::Text("abc".into())),
            Err(NumlangError::InvalidInput(_))
        ));
        assert!(integral(NumberInput::Float(3.0)).is_ok());
    }
}
