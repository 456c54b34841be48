// Lexicon-based sentiment scoring with pluggable per-language rules.
//
// The registry holds one LanguageEntry (labels + ScoringStrategy) per code.
// The engine tokenizes a phrase, looks each token up in the selected
// language's labels and lets the language's strategy adjust the score.

pub mod engine;
pub mod languages;
pub mod registry;
pub mod traits;
