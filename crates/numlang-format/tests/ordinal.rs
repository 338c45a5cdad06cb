use numlang_format::{FormattingConfig, NumlangError, to_ordinal, to_words_ordinal};

fn words(value: i64) -> String {
    to_words_ordinal(value, &FormattingConfig::default()).unwrap()
}

#[test]
fn numeral_ordinals() {
    let cases = [
        (1, "1st"),
        (2, "2nd"),
        (3, "3rd"),
        (4, "4th"),
        (11, "11th"),
        (12, "12th"),
        (13, "13th"),
        (21, "21st"),
        (42, "42nd"),
        (103, "103rd"),
        (111, "111th"),
        (-3, "-3rd"),
        (0, "0th"),
    ];
    for (value, expected) in cases {
        assert_eq!(to_ordinal(value).unwrap(), expected);
    }
    assert_eq!(to_ordinal("22").unwrap(), "22nd");
    assert_eq!(to_ordinal(4.0).unwrap(), "4th");
}

#[test]
fn ordinal_words() {
    assert_eq!(words(0), "zeroth");
    assert_eq!(words(1), "first");
    assert_eq!(words(2), "second");
    assert_eq!(words(3), "third");
    assert_eq!(words(12), "twelfth");
    assert_eq!(words(112), "one hundred twelfth");
    assert_eq!(words(1012), "one thousand twelfth");
    assert_eq!(words(-12), "negative twelfth");
    assert_eq!(words(11), "eleventh");
    assert_eq!(words(13), "thirteenth");
    assert_eq!(words(15), "fifteenth");
    assert_eq!(words(21), "twenty-first");
    assert_eq!(words(40), "fortieth");
    assert_eq!(words(100), "one hundredth");
    assert_eq!(words(1000), "one thousandth");
    assert_eq!(words(1234), "one thousand two hundred thirty-fourth");
    assert_eq!(words(1_000_000), "one millionth");
    assert_eq!(words(-21), "negative twenty-first");
}

#[test]
fn ordinal_word_options() {
    let config = FormattingConfig::new()
        .with_commas(true)
        .with_and(true)
        .with_capitalize(true);
    assert_eq!(
        to_words_ordinal(1234, &config).unwrap(),
        "One thousand, two hundred and thirty-fourth"
    );

    let config = FormattingConfig::new().with_append_only(true).with_uppercase(true);
    assert_eq!(to_words_ordinal(3, &config).unwrap(), "THIRD ONLY");
}

#[test]
fn floats_are_rejected() {
    let config = FormattingConfig::default();
    assert!(matches!(to_ordinal(1.5), Err(NumlangError::FloatNotSupported(_))));
    assert!(matches!(to_ordinal("2.7"), Err(NumlangError::FloatNotSupported(_))));
    assert!(matches!(
        to_words_ordinal(1.5, &config),
        Err(NumlangError::FloatNotSupported(_))
    ));
    assert!(matches!(
        to_words_ordinal("2.7", &config),
        Err(NumlangError::FloatNotSupported(_))
    ));
    assert!(matches!(to_ordinal("abc"), Err(NumlangError::InvalidInput(_))));
}
