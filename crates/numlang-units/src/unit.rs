use std::fmt::{self, Display};

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::plural::to_plural;

/// Broad category of a unit.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitType {
    Volume,
    Mass,
    Length,
    Time,
    DosageForm,
    Other,
}

impl Display for UnitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Abbreviation, expansion, category. Order matters: when two abbreviations
/// share an expansion, the earlier one is the canonical abbreviation.
const UNITS: &[(&str, &str, UnitType)] = &[
    // Volume
    ("ml", "milliliter", UnitType::Volume),
    ("cc", "cubic centimeter", UnitType::Volume),
    ("l", "liter", UnitType::Volume),
    ("dl", "deciliter", UnitType::Volume),
    ("ul", "microliter", UnitType::Volume),
    ("fl oz", "fluid ounce", UnitType::Volume),
    ("gal", "gallon", UnitType::Volume),
    ("qt", "quart", UnitType::Volume),
    ("pt", "pint", UnitType::Volume),
    ("tbsp", "tablespoon", UnitType::Volume),
    ("tsp", "teaspoon", UnitType::Volume),
    ("gtt", "drop", UnitType::DosageForm),
    ("spray", "spray", UnitType::DosageForm),
    ("puff", "puff", UnitType::DosageForm),
    // Weight-based dosing
    ("mg/kg", "milligram per kilogram", UnitType::Mass),
    ("ml/kg", "milliliter per kilogram", UnitType::Volume),
    ("mcg/kg", "microgram per kilogram", UnitType::Mass),
    ("ug/kg", "microgram per kilogram", UnitType::Mass),
    // Mass
    ("mg", "milligram", UnitType::Mass),
    ("g", "gram", UnitType::Mass),
    ("kg", "kilogram", UnitType::Mass),
    ("mcg", "microgram", UnitType::Mass),
    ("μg", "microgram", UnitType::Mass),
    ("lb", "pound", UnitType::Mass),
    ("oz", "ounce", UnitType::Mass),
    ("iu", "international unit", UnitType::Other),
    ("u", "unit", UnitType::Other),
    ("meq", "milliequivalent", UnitType::Other),
    // Length
    ("mm", "millimeter", UnitType::Length),
    ("cm", "centimeter", UnitType::Length),
    ("m", "meter", UnitType::Length),
    ("km", "kilometer", UnitType::Length),
    ("in", "inch", UnitType::Length),
    ("ft", "foot", UnitType::Length),
    ("yd", "yard", UnitType::Length),
    ("mi", "mile", UnitType::Length),
    // Time
    ("s", "second", UnitType::Time),
    ("sec", "second", UnitType::Time),
    ("min", "minute", UnitType::Time),
    ("h", "hour", UnitType::Time),
    ("hr", "hour", UnitType::Time),
    ("d", "day", UnitType::Time),
    ("wk", "week", UnitType::Time),
    ("mo", "month", UnitType::Time),
    ("yr", "year", UnitType::Time),
    // Dosage forms
    ("tab", "tablet", UnitType::DosageForm),
    ("cap", "capsule", UnitType::DosageForm),
    ("supp", "suppository", UnitType::DosageForm),
    ("amp", "ampule", UnitType::DosageForm),
    ("vial", "vial", UnitType::DosageForm),
    ("patch", "patch", UnitType::DosageForm),
    ("chew", "chew", UnitType::DosageForm),
    ("dose", "dose", UnitType::DosageForm),
    ("sachet", "sachet", UnitType::DosageForm),
    ("pump", "pump", UnitType::DosageForm),
    ("app", "application", UnitType::DosageForm),
    ("pipette", "pipette", UnitType::DosageForm),
];

struct UnitEntry {
    expanded: &'static str,
    unit_type: UnitType,
}

static BY_ABBREVIATION: Lazy<FxHashMap<&'static str, UnitEntry>> = Lazy::new(|| {
    UNITS
        .iter()
        .map(|&(abbr, expanded, unit_type)| {
            (
                abbr,
                UnitEntry {
                    expanded,
                    unit_type,
                },
            )
        })
        .collect()
});

/// Expanded name (singular and plural) to canonical abbreviation and category.
static BY_EXPANSION: Lazy<FxHashMap<String, (&'static str, UnitType)>> = Lazy::new(|| {
    let mut map = FxHashMap::default();
    for &(abbr, expanded, unit_type) in UNITS {
        map.entry(expanded.to_string())
            .or_insert((abbr, unit_type));
        map.entry(to_plural(expanded)).or_insert((abbr, unit_type));
    }
    map
});

fn normalise(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Expand an abbreviation: `"ml"` → `"milliliter"`. Case-insensitive.
pub fn expand_unit(abbreviation: &str) -> Option<&'static str> {
    BY_ABBREVIATION
        .get(normalise(abbreviation).as_str())
        .map(|entry| entry.expanded)
}

/// Canonical abbreviation of an expanded name, singular or plural:
/// `"Milliliters"` → `"ml"`.
pub fn abbreviate_unit(expanded: &str) -> Option<&'static str> {
    BY_EXPANSION
        .get(normalise(expanded).as_str())
        .map(|&(abbr, _)| abbr)
}

/// Category of an abbreviation or expanded name.
pub fn unit_type(unit: &str) -> Option<UnitType> {
    let key = normalise(unit);
    BY_ABBREVIATION
        .get(key.as_str())
        .map(|entry| entry.unit_type)
        .or_else(|| BY_EXPANSION.get(key.as_str()).map(|&(_, t)| t))
}

/// Whether `text` is a per-unit compound from the table (`mg/kg`).
pub fn is_compound_unit(text: &str) -> bool {
    text.contains('/') && BY_ABBREVIATION.contains_key(normalise(text).as_str())
}
