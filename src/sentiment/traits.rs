// Scoring strategy trait — the per-language extension point.
//
// A strategy sees the whole token sequence and the index of the token being
// scored, so it can look at neighbors (negators, intensifiers) before
// returning the adjusted score. Tokens are borrowed immutably.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

/// Token → base sentiment score for one language.
pub type LabelMapping = HashMap<String, i32>;

/// Adjusts a token's base score using its context.
pub trait ScoringStrategy: Send + Sync {
    fn apply(&self, tokens: &[String], index: usize, score: i32) -> i32;
}

/// Any plain function or closure with the right shape is a strategy.
impl<F> ScoringStrategy for F
where
    F: Fn(&[String], usize, i32) -> i32 + Send + Sync,
{
    fn apply(&self, tokens: &[String], index: usize, score: i32) -> i32 {
        self(tokens, index, score)
    }
}

/// Leaves every score as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unadjusted;

impl ScoringStrategy for Unadjusted {
    fn apply(&self, _tokens: &[String], _index: usize, score: i32) -> i32 {
        score
    }
}

/// Flips the sign of a score when the token right before it is a negator
/// ("not good" scores like "bad").
#[derive(Debug, Clone, Default)]
pub struct NegationStrategy {
    negators: HashSet<String>,
}

impl NegationStrategy {
    pub fn new<I, S>(negators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            negators: negators.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_negator(&self, token: &str) -> bool {
        self.negators.contains(token)
    }
}

impl ScoringStrategy for NegationStrategy {
    fn apply(&self, tokens: &[String], index: usize, score: i32) -> i32 {
        let negated = index
            .checked_sub(1)
            .and_then(|prev| tokens.get(prev))
            .is_some_and(|prev| self.is_negator(prev));

        if negated {
            score.saturating_neg()
        } else {
            score
        }
    }
}

/// A registered language: its labels plus the strategy that adjusts them.
#[derive(Clone)]
pub struct LanguageEntry {
    pub labels: LabelMapping,
    pub strategy: Arc<dyn ScoringStrategy>,
}

impl LanguageEntry {
    pub fn new(labels: LabelMapping, strategy: impl ScoringStrategy + 'static) -> Self {
        Self {
            labels,
            strategy: Arc::new(strategy),
        }
    }

    /// A language whose scores are never adjusted.
    pub fn unadjusted(labels: LabelMapping) -> Self {
        Self::new(labels, Unadjusted)
    }
}

impl fmt::Debug for LanguageEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageEntry")
            .field("labels", &self.labels.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_negation_flips_after_negator() {
        let strategy = NegationStrategy::new(["not"]);
        let t = tokens(&["not", "good"]);
        assert_eq!(strategy.apply(&t, 1, 2), -2);
    }

    #[test]
    fn test_negation_ignores_first_token() {
        let strategy = NegationStrategy::new(["not"]);
        let t = tokens(&["good", "not"]);
        assert_eq!(strategy.apply(&t, 0, 2), 2);
    }

    #[test]
    fn test_negation_only_adjacent() {
        let strategy = NegationStrategy::new(["not"]);
        let t = tokens(&["not", "very", "good"]);
        assert_eq!(strategy.apply(&t, 2, 2), 2);
    }

    #[test]
    fn test_negation_of_min_saturates() {
        let strategy = NegationStrategy::new(["not"]);
        let t = tokens(&["not", "low"]);
        assert_eq!(strategy.apply(&t, 1, i32::MIN), i32::MAX);
    }

    #[test]
    fn test_closure_is_a_strategy() {
        let doubler = |_: &[String], _: usize, score: i32| score * 2;
        let entry = LanguageEntry::new(LabelMapping::new(), doubler);
        assert_eq!(entry.strategy.apply(&[], 0, 3), 6);
    }
}
