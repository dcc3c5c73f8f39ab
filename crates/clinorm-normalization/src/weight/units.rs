//! Unit canonicalizer: free-text spellings to [`WeightUnit`].

use std::collections::HashMap;
use std::sync::LazyLock;

use clinorm_model::WeightUnit;

/// Accepted spellings, including common misspellings and CJK forms.
pub const WEIGHT_UNIT_ALIASES: &[(&str, WeightUnit)] = &[
    // Kilograms
    ("kg", WeightUnit::Kilogram),
    ("kgs", WeightUnit::Kilogram),
    ("kilogram", WeightUnit::Kilogram),
    ("kilograms", WeightUnit::Kilogram),
    ("kilo", WeightUnit::Kilogram),
    ("kilos", WeightUnit::Kilogram),
    ("kilo gram", WeightUnit::Kilogram),
    ("kilo grams", WeightUnit::Kilogram),
    ("kilogramme", WeightUnit::Kilogram),
    ("kilogrammes", WeightUnit::Kilogram),
    ("kilog", WeightUnit::Kilogram),
    ("kgram", WeightUnit::Kilogram),
    // Pounds
    ("lb", WeightUnit::Pound),
    ("lbs", WeightUnit::Pound),
    ("pound", WeightUnit::Pound),
    ("pounds", WeightUnit::Pound),
    ("pount", WeightUnit::Pound),
    ("pouds", WeightUnit::Pound),
    ("lbses", WeightUnit::Pound),
    ("poundes", WeightUnit::Pound),
    ("lbse", WeightUnit::Pound),
    // Stones
    ("st", WeightUnit::Stone),
    ("sts", WeightUnit::Stone),
    ("stone", WeightUnit::Stone),
    ("stones", WeightUnit::Stone),
    ("ston", WeightUnit::Stone),
    ("stonnes", WeightUnit::Stone),
    // Jin / catty
    ("jin", WeightUnit::Jin),
    ("jins", WeightUnit::Jin),
    ("jing", WeightUnit::Jin),
    ("gin", WeightUnit::Jin),
    ("斤", WeightUnit::Jin),
    ("catty", WeightUnit::Jin),
    ("catties", WeightUnit::Jin),
    ("kati", WeightUnit::Jin),
    ("katii", WeightUnit::Jin),
    ("caty", WeightUnit::Jin),
    // Kan
    ("kan", WeightUnit::Kan),
    ("kans", WeightUnit::Kan),
    ("貫", WeightUnit::Kan),
    // Arroba
    ("arroba", WeightUnit::Arroba),
    ("arrobas", WeightUnit::Arroba),
    ("arrobe", WeightUnit::Arroba),
    ("aroba", WeightUnit::Arroba),
    ("@", WeightUnit::Arroba),
];

static EXACT: LazyLock<HashMap<&'static str, WeightUnit>> =
    LazyLock::new(|| WEIGHT_UNIT_ALIASES.iter().copied().collect());

static SQUASHED: LazyLock<HashMap<String, WeightUnit>> = LazyLock::new(|| {
    WEIGHT_UNIT_ALIASES
        .iter()
        .map(|(alias, unit)| (squash(alias), *unit))
        .collect()
});

/// Map a raw unit token to its canonical unit.
///
/// The token is lowercased and trimmed of whitespace and dots. An exact alias
/// match wins; otherwise internal whitespace is removed and doubled letters
/// are collapsed on both sides, which accepts `"kilo grams"`, `"killograms"`,
/// and similar typing slips.
#[must_use]
pub fn canonicalize_weight_unit(raw: &str) -> Option<WeightUnit> {
    let token = raw
        .trim_matches(|c: char| c.is_whitespace() || c == '.')
        .to_lowercase();
    if token.is_empty() {
        return None;
    }
    EXACT
        .get(token.as_str())
        .or_else(|| SQUASHED.get(&squash(&token)))
        .copied()
}

/// Aliases for `unit`, in table order.
pub fn aliases_for(unit: WeightUnit) -> impl Iterator<Item = &'static str> {
    WEIGHT_UNIT_ALIASES
        .iter()
        .filter(move |(_, candidate)| *candidate == unit)
        .map(|(alias, _)| *alias)
}

fn squash(token: &str) -> String {
    let mut squashed = String::with_capacity(token.len());
    let mut previous = None;
    for c in token.chars().filter(|c| !c.is_whitespace()) {
        if previous != Some(c) {
            squashed.push(c);
        }
        previous = Some(c);
    }
    squashed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_aliases_resolve() {
        for (alias, unit) in WEIGHT_UNIT_ALIASES {
            assert_eq!(canonicalize_weight_unit(alias), Some(*unit), "{alias}");
        }
    }

    #[test]
    fn squashed_aliases_do_not_collide() {
        for (alias, unit) in WEIGHT_UNIT_ALIASES {
            assert_eq!(SQUASHED.get(&squash(alias)), Some(unit), "{alias}");
        }
    }

    #[test]
    fn case_and_punctuation_are_ignored() {
        assert_eq!(
            canonicalize_weight_unit(" KG. "),
            Some(WeightUnit::Kilogram)
        );
        assert_eq!(canonicalize_weight_unit("Lbs"), Some(WeightUnit::Pound));
    }

    #[test]
    fn typing_slips_are_tolerated() {
        assert_eq!(
            canonicalize_weight_unit("killograms"),
            Some(WeightUnit::Kilogram)
        );
        assert_eq!(
            canonicalize_weight_unit("kilo  grams"),
            Some(WeightUnit::Kilogram)
        );
        assert_eq!(canonicalize_weight_unit("stonnes"), Some(WeightUnit::Stone));
        assert_eq!(canonicalize_weight_unit("poundds"), Some(WeightUnit::Pound));
    }

    #[test]
    fn unknown_tokens_are_rejected() {
        assert_eq!(canonicalize_weight_unit("pizzas"), None);
        assert_eq!(canonicalize_weight_unit("   "), None);
        assert_eq!(canonicalize_weight_unit("g"), None);
    }

    #[test]
    fn aliases_for_lists_table_entries() {
        let kan: Vec<_> = aliases_for(WeightUnit::Kan).collect();
        assert_eq!(kan, vec!["kan", "kans", "貫"]);
    }

    #[test]
    fn squash_collapses_runs_and_spaces() {
        assert_eq!(squash("kil lo"), "kilo");
        assert_eq!(squash("arroba"), "aroba");
    }
}
