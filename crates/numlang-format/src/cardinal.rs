use numlang_common::lexicon::{HUNDRED, ONES, SCALES, TENS};
use numlang_common::{FormattingConfig, NumberInput, NumericValue, NumlangError};
use smallvec::SmallVec;

/// Render `value` as English cardinal words.
///
/// ```
/// use numlang_format::{FormattingConfig, to_words};
///
/// let words = to_words(1234, &FormattingConfig::default()).unwrap();
/// assert_eq!(words, "one thousand two hundred thirty-four");
/// ```
pub fn to_words(
    value: impl Into<NumberInput>,
    config: &FormattingConfig,
) -> Result<String, NumlangError> {
    let input = value.into();
    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!("to_words", input = %input).entered();

    let value = NumericValue::try_from(input)?;
    let words = render_cardinal(&value, config)?;
    Ok(config.finish(words))
}

/// Cardinal words for an already-converted value, before the finishing
/// options (`append_only`, `capitalize`, `uppercase`) are applied.
pub fn render_cardinal(
    value: &NumericValue,
    config: &FormattingConfig,
) -> Result<String, NumlangError> {
    let mut out = String::new();
    if value.negative {
        out.push_str("negative ");
    }
    out.push_str(&integer_words(value.integer, config)?);
    if let Some(digits) = &value.fraction {
        out.push_str(" point ");
        out.push_str(&decimal_words(digits));
    }
    Ok(out)
}

/// Words for a non-negative integer, grouped in base-1000 chunks.
///
/// Fails with `InvalidInput` when a chunk would need a scale word past decillion.
pub fn integer_words(n: u128, config: &FormattingConfig) -> Result<String, NumlangError> {
    if n == 0 {
        return Ok(ONES[0].to_string());
    }

    let mut chunks: SmallVec<[String; 4]> = SmallVec::new();
    let mut rest = n;
    let mut index = 0usize;
    while rest > 0 {
        let chunk = (rest % 1000) as u16;
        if chunk > 0 {
            let scale = SCALES.get(index).ok_or_else(|| {
                NumlangError::InvalidInput(format!("{n} is beyond the largest scale word"))
            })?;
            let mut words = below_thousand(chunk, config);
            if !scale.is_empty() {
                words.push(' ');
                words.push_str(scale);
            }
            chunks.push(words);
        }
        rest /= 1000;
        index += 1;
    }

    chunks.reverse();
    let separator = if config.use_commas { ", " } else { " " };
    Ok(chunks.join(separator))
}

fn below_thousand(n: u16, config: &FormattingConfig) -> String {
    match n {
        0 => String::new(),
        1..=19 => ONES[n as usize].to_string(),
        20..=99 => {
            let tens = TENS[(n / 10) as usize];
            match n % 10 {
                0 => tens.to_string(),
                ones => format!("{tens}-{}", ONES[ones as usize]),
            }
        }
        _ => {
            let head = format!("{} {HUNDRED}", ONES[(n / 100) as usize]);
            match n % 100 {
                0 => head,
                rest => {
                    let joiner = if config.use_and { " and " } else { " " };
                    format!("{head}{joiner}{}", below_thousand(rest, config))
                }
            }
        }
    }
}

/// One word per digit; `0` is spoken as "zero".
fn decimal_words(digits: &str) -> String {
    digits
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| ONES[(b - b'0') as usize])
        .collect::<Vec<_>>()
        .join(" ")
}
