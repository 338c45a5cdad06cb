//! Heuristic English pluralisation for unit and dosage-form words.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

/// Singular/plural pairs that the suffix rules get wrong (or that we pin explicitly).
const IRREGULAR: &[(&str, &str)] = &[
    ("foot", "feet"),
    ("inch", "inches"),
    ("mouse", "mice"),
    ("tooth", "teeth"),
    ("tablet", "tablets"),
    ("capsule", "capsules"),
    ("patch", "patches"),
    ("suppository", "suppositories"),
    ("dose", "doses"),
    ("chew", "chews"),
    ("vial", "vials"),
    ("ampule", "ampules"),
    ("drop", "drops"),
    ("spray", "sprays"),
    ("puff", "puffs"),
];

static PLURALS: Lazy<FxHashMap<&'static str, &'static str>> =
    Lazy::new(|| IRREGULAR.iter().copied().collect());

static SINGULARS: Lazy<FxHashMap<&'static str, &'static str>> =
    Lazy::new(|| IRREGULAR.iter().map(|&(s, p)| (p, s)).collect());

/// Unit abbreviations the letter heuristic would treat as ordinary words.
const KNOWN_ABBREVIATIONS: [&str; 16] = [
    "oz", "iu", "u", "meq", "in", "mi", "sec", "min", "mo", "tab", "cap", "supp", "amp", "app",
    "μg", "µg",
];

const SIBILANT_ENDINGS: [&str; 5] = ["s", "x", "z", "ch", "sh"];

/// Plural form of `word`. Abbreviations (`mg`, `IU`) come back unchanged.
pub fn to_plural(word: &str) -> String {
    if is_abbreviation(word) {
        return word.to_string();
    }
    if let Some(plural) = PLURALS.get(word) {
        return plural.to_string();
    }
    if let Some(stem) = word.strip_suffix('y') {
        let before = stem.chars().next_back();
        if before.is_some_and(|c| !is_vowel(c)) {
            return format!("{stem}ies");
        }
    }
    if SIBILANT_ENDINGS.iter().any(|end| word.ends_with(end)) {
        return format!("{word}es");
    }
    format!("{word}s")
}

/// Singular form of `word`.
///
/// Abbreviations are left alone, and a pluralised abbreviation (`mls`,
/// `IUs`) loses its trailing `s`.
pub fn to_singular(word: &str) -> String {
    if word.len() > 2 {
        if let Some(stem) = word.strip_suffix('s') {
            if is_abbreviation(stem) {
                return stem.to_string();
            }
        }
    }
    if is_abbreviation(word) {
        return word.to_string();
    }
    if let Some(singular) = SINGULARS.get(word) {
        return singular.to_string();
    }
    if word.len() > 3 {
        if let Some(stem) = word.strip_suffix("ies") {
            return format!("{stem}y");
        }
    }
    if ["ses", "xes", "zes", "ches", "shes"]
        .iter()
        .any(|end| word.ends_with(end))
    {
        return word[..word.len() - 2].to_string();
    }
    if word.len() > 1 {
        if let Some(stem) = word.strip_suffix('s') {
            return stem.to_string();
        }
    }
    word.to_string()
}

/// A known unit abbreviation (`tab`, `min`), or a short, letters-only,
/// single-case string without lowercase vowels (`mg`, `ml`, `IU`).
pub fn is_abbreviation(s: &str) -> bool {
    let s = s.trim();
    if KNOWN_ABBREVIATIONS.contains(&s) {
        return true;
    }
    if s.is_empty() || s.len() > 4 || !s.chars().all(|c| c.is_ascii_alphabetic()) {
        return false;
    }
    let single_case =
        s.chars().all(|c| c.is_ascii_uppercase()) || s.chars().all(|c| c.is_ascii_lowercase());
    single_case && !s.chars().any(is_vowel)
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_based_plurals() {
        assert_eq!(to_plural("gram"), "grams");
        assert_eq!(to_plural("ounce"), "ounces");
        assert_eq!(to_plural("box"), "boxes");
        assert_eq!(to_plural("brush"), "brushes");
        assert_eq!(to_plural("berry"), "berries");
        assert_eq!(to_plural("day"), "days");
    }

    #[test]
    fn rule_based_singulars() {
        assert_eq!(to_singular("grams"), "gram");
        assert_eq!(to_singular("berries"), "berry");
        assert_eq!(to_singular("boxes"), "box");
        assert_eq!(to_singular("brushes"), "brush");
        assert_eq!(to_singular("s"), "s");
        assert_eq!(to_singular("gram"), "gram");
    }

    #[test]
    fn abbreviation_detection() {
        assert!(is_abbreviation("mg"));
        assert!(is_abbreviation("IU"));
        assert!(is_abbreviation(" ml "));
        assert!(!is_abbreviation("Mg"));
        assert!(is_abbreviation("tab"));
        assert!(is_abbreviation(" min "));
        assert!(!is_abbreviation("Tab"));
        assert!(!is_abbreviation("tablet"));
        assert!(!is_abbreviation("mcgkg"));
        assert!(!is_abbreviation("m/k"));
        assert!(!is_abbreviation(""));
    }
}
