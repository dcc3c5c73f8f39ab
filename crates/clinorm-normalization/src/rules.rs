//! Ordered, first-match-wins rule chains.
//!
//! Both engines describe their parsing strategies as a slice of [`Rule`]s
//! evaluated in priority order. A rule that does not recognize the text
//! returns `None` and the chain falls through to the next one; a rule that
//! recognizes the shape but finds an out-of-range value returns
//! `Some(Err(..))`, which stops the chain.

use clinorm_model::Result;

/// A single parsing strategy.
pub struct Rule<M> {
    /// Short identifier used in trace output and tests.
    pub name: &'static str,
    /// Combined predicate and extractor.
    pub apply: fn(&str) -> Option<Result<M>>,
}

impl<M> Rule<M> {
    pub const fn new(name: &'static str, apply: fn(&str) -> Option<Result<M>>) -> Self {
        Self { name, apply }
    }
}

/// Run `rules` against `text` and return the outcome of the first rule that
/// recognizes it, together with that rule's name.
pub fn first_match<M>(rules: &[Rule<M>], text: &str) -> Option<(&'static str, Result<M>)> {
    rules.iter().find_map(|rule| {
        let outcome = (rule.apply)(text)?;
        tracing::trace!(rule = rule.name, ok = outcome.is_ok(), "rule matched");
        Some((rule.name, outcome))
    })
}
