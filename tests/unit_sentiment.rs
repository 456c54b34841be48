// Unit tests for the tokenizer, language registry and sentiment engine.
//
// Covers the result invariants (empty input, comparative = score / tokens),
// registry lookups and overrides, and custom scoring strategies.

use textmod::sentiment::engine::{analyze_sentiment, SentimentOptions};
use textmod::sentiment::registry::LanguageRegistry;
use textmod::sentiment::traits::{LabelMapping, LanguageEntry, NegationStrategy};
use textmod::tokenize::tokenize;

fn labels(pairs: &[(&str, i32)]) -> LabelMapping {
    pairs.iter().map(|&(w, s)| (w.to_string(), s)).collect()
}

// ============================================================
// Result invariants
// ============================================================

#[test]
fn empty_phrase_scores_zero() {
    let registry = LanguageRegistry::default();
    let result = analyze_sentiment(&registry, "", &SentimentOptions::default()).unwrap();
    assert_eq!(result.score, 0);
    assert_eq!(result.comparative, 0.0);
    assert!(result.tokens.is_empty());
    assert!(result.words.is_empty());
}

#[test]
fn unlabeled_phrase_has_empty_calculation() {
    let registry = LanguageRegistry::default();
    let result =
        analyze_sentiment(&registry, "the cat sat on the mat", &SentimentOptions::default())
            .unwrap();
    assert_eq!(result.score, 0);
    assert_eq!(result.comparative, 0.0);
    assert_eq!(result.tokens.len(), 6);
    assert!(result.calculation.is_empty());
    assert!(result.words.is_empty());
}

#[test]
fn comparative_is_score_over_token_count() {
    let registry = LanguageRegistry::default();
    for phrase in [
        "good",
        "I love this, it is great",
        "terrible awful day",
        "not bad at all, actually pretty nice",
    ] {
        let result = analyze_sentiment(&registry, phrase, &SentimentOptions::default()).unwrap();
        assert!(!result.tokens.is_empty());
        let expected = f64::from(result.score) / result.tokens.len() as f64;
        assert_eq!(result.comparative, expected, "phrase: {phrase}");
    }
}

#[test]
fn good_scenario() {
    let registry = LanguageRegistry::default();
    let result = analyze_sentiment(&registry, "good", &SentimentOptions::default()).unwrap();
    assert_eq!(result.score, 2);
    assert_eq!(result.comparative, 2.0);
    assert_eq!(result.words, vec!["good"]);
    assert_eq!(result.positive, vec!["good"]);
    assert!(result.negative.is_empty());
}

#[test]
fn zero_weight_labels_are_words_but_neither_polarity() {
    let mut registry = LanguageRegistry::empty();
    registry.register_language("xx", LanguageEntry::unadjusted(labels(&[("meh", 0)])));
    let result =
        analyze_sentiment(&registry, "meh", &SentimentOptions::language("xx")).unwrap();
    assert_eq!(result.words, vec!["meh"]);
    assert!(result.positive.is_empty());
    assert!(result.negative.is_empty());
    assert_eq!(result.calculation.len(), 1);
}

#[test]
fn repeated_tokens_each_count() {
    let registry = LanguageRegistry::default();
    let result =
        analyze_sentiment(&registry, "good good good", &SentimentOptions::default()).unwrap();
    assert_eq!(result.score, 6);
    assert_eq!(result.words.len(), 3);
}

// ============================================================
// Registry
// ============================================================

#[test]
fn register_empty_mapping_then_lookup() {
    let mut registry = LanguageRegistry::default();
    registry.register_language("qq", LanguageEntry::unadjusted(LabelMapping::new()));
    assert!(registry.labels("qq").unwrap().is_empty());
    assert!(registry.contains("qq"));
}

#[test]
fn reregistration_overwrites() {
    let mut registry = LanguageRegistry::empty();
    registry.register_language("qq", LanguageEntry::unadjusted(labels(&[("a", 1)])));
    registry.register_language("qq", LanguageEntry::unadjusted(labels(&[("b", -1)])));
    let qq = registry.labels("qq").unwrap();
    assert!(qq.get("a").is_none());
    assert_eq!(qq.get("b"), Some(&-1));
}

#[test]
fn unknown_language_is_configuration_error() {
    let registry = LanguageRegistry::empty();
    let err = analyze_sentiment(&registry, "good", &SentimentOptions::default()).unwrap_err();
    assert!(err.is_configuration());
}

#[test]
fn french_builtin_handles_negation() {
    let registry = LanguageRegistry::default();
    let result =
        analyze_sentiment(&registry, "Ce n'est pas bon", &SentimentOptions::language("fr"))
            .unwrap();
    assert_eq!(result.score, -2);
    assert_eq!(result.negative, vec!["bon"]);
}

#[test]
fn french_plus_negates() {
    let registry = LanguageRegistry::default();
    let result =
        analyze_sentiment(&registry, "je ne suis plus content", &SentimentOptions::language("fr"))
            .unwrap();
    assert_eq!(result.score, -2);
}

#[test]
fn negated_min_label_does_not_overflow() {
    let registry = LanguageRegistry::default();
    let mut extras = LabelMapping::new();
    extras.insert("low".to_string(), i32::MIN);
    let result = analyze_sentiment(
        &registry,
        "not low",
        &SentimentOptions::default().with_extras(extras),
    )
    .unwrap();
    assert_eq!(result.score, i32::MAX);
    assert_eq!(result.positive, vec!["low"]);
}

#[test]
fn repeated_max_label_saturates() {
    let registry = LanguageRegistry::default();
    let mut extras = LabelMapping::new();
    extras.insert("big".to_string(), i32::MAX);
    let result = analyze_sentiment(
        &registry,
        "big big big",
        &SentimentOptions::default().with_extras(extras),
    )
    .unwrap();
    assert_eq!(result.score, i32::MAX);
    assert_eq!(result.calculation.len(), 3);
}

// ============================================================
// Custom strategies
// ============================================================

#[test]
fn closure_strategy_sees_neighbors() {
    // Doubles a score when the previous token is "very"
    let intensifier = |tokens: &[String], index: usize, score: i32| {
        if index > 0 && tokens[index - 1] == "very" {
            score * 2
        } else {
            score
        }
    };
    let mut registry = LanguageRegistry::empty();
    registry.register_language("xx", LanguageEntry::new(labels(&[("nice", 3)]), intensifier));

    let result =
        analyze_sentiment(&registry, "very nice, nice", &SentimentOptions::language("xx"))
            .unwrap();
    assert_eq!(result.score, 9);
    // Reverse order: the later "nice" comes first
    assert_eq!(result.calculation[0].score, 3);
    assert_eq!(result.calculation[1].score, 6);
}

#[test]
fn negation_strategy_on_custom_language() {
    let mut registry = LanguageRegistry::empty();
    registry.register_language(
        "xx",
        LanguageEntry::new(labels(&[("yay", 2)]), NegationStrategy::new(["nope"])),
    );
    let result =
        analyze_sentiment(&registry, "nope yay", &SentimentOptions::language("xx")).unwrap();
    assert_eq!(result.score, -2);
}

// ============================================================
// Tokenizer
// ============================================================

#[test]
fn tokenizer_is_restartable() {
    let a = tokenize("Good morning!");
    let b = tokenize("Good morning!");
    assert_eq!(a, b);
    assert_eq!(a, vec!["good", "morning"]);
}
