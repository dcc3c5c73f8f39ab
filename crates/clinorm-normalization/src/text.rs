//! Small text helpers shared by both engines.

use regex::{Captures, Regex};

/// Lowercase, trim, and drop one leading label or noise phrase.
pub(crate) fn clean(text: &str, prefix: &Regex) -> String {
    let lowered = text.trim().to_lowercase();
    match prefix.find(&lowered) {
        Some(found) => lowered[found.end()..].trim().to_string(),
        None => lowered,
    }
}

/// Parse capture group `index` as a number. Groups are constrained by the
/// pattern to plain decimal digits, so `None` only means the group is absent.
pub(crate) fn number<T: std::str::FromStr>(captures: &Captures<'_>, index: usize) -> Option<T> {
    captures.get(index)?.as_str().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_strips_single_prefix() {
        let prefix = Regex::new(r"^(?:about|wt)[.:]?\s*").unwrap();
        assert_eq!(clean("  About 70KG ", &prefix), "70kg");
        assert_eq!(clean("wt: 150", &prefix), "150");
        assert_eq!(clean("about about 5", &prefix), "about 5");
        assert_eq!(clean("150 lbs", &prefix), "150 lbs");
    }

    #[test]
    fn number_reads_groups() {
        let pattern = Regex::new(r"^([0-9]+)x([0-9]+)?$").unwrap();
        let captures = pattern.captures("12x").unwrap();
        assert_eq!(number::<u32>(&captures, 1), Some(12));
        assert_eq!(number::<u32>(&captures, 2), None);
    }
}
