// Sentiment scoring over tokenized text.
//
// Tokens are visited last-to-first, so `words`, `positive`, `negative` and
// `calculation` list matches in reverse order of appearance. The aggregate
// score doesn't depend on the order.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use tracing::debug;

use super::registry::LanguageRegistry;
use super::traits::LabelMapping;
use crate::error::Result;
use crate::tokenize::tokenize;

pub const DEFAULT_LANGUAGE: &str = "en";

/// Per-call sentiment options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentOptions {
    /// Language code; `en` when unset.
    #[serde(default)]
    pub language: Option<String>,
    /// Extra labels merged over the language's own (extras win).
    #[serde(default)]
    pub extras: Option<LabelMapping>,
}

impl SentimentOptions {
    pub fn language(code: impl Into<String>) -> Self {
        Self {
            language: Some(code.into()),
            extras: None,
        }
    }

    #[must_use]
    pub fn with_extras(mut self, extras: LabelMapping) -> Self {
        self.extras = Some(extras);
        self
    }

    /// Layer these options over `defaults`: a set language replaces the
    /// default one, and extras from both are combined with ours on top.
    #[must_use]
    pub fn over(&self, defaults: &SentimentOptions) -> SentimentOptions {
        let extras = match (&defaults.extras, &self.extras) {
            (None, None) => None,
            (Some(base), None) => Some(base.clone()),
            (None, Some(ours)) => Some(ours.clone()),
            (Some(base), Some(ours)) => {
                let mut merged = base.clone();
                merged.extend(ours.iter().map(|(k, v)| (k.clone(), *v)));
                Some(merged)
            }
        };

        SentimentOptions {
            language: self.language.clone().or_else(|| defaults.language.clone()),
            extras,
        }
    }
}

/// One entry of the score breakdown. Serializes as `{"token": score}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenScore {
    pub token: String,
    pub score: i32,
}

impl Serialize for TokenScore {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.token, &self.score)?;
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub score: i32,
    /// `score / tokens.len()`, or 0 for no tokens.
    pub comparative: f64,
    pub calculation: Vec<TokenScore>,
    pub tokens: Vec<String>,
    pub words: Vec<String>,
    pub positive: Vec<String>,
    pub negative: Vec<String>,
}

/// Score `phrase` with the labels and strategy registered for the options'
/// language.
///
/// Fails only when the language isn't registered. The total saturates at the
/// `i32` bounds.
pub fn analyze_sentiment(
    registry: &LanguageRegistry,
    phrase: &str,
    options: &SentimentOptions,
) -> Result<AnalysisResult> {
    let language = options.language.as_deref().unwrap_or(DEFAULT_LANGUAGE);
    let entry = registry.entry(language)?;
    let extras = options.extras.as_ref();

    let tokens = tokenize(phrase);

    let mut score: i32 = 0;
    let mut words = Vec::new();
    let mut positive = Vec::new();
    let mut negative = Vec::new();
    let mut calculation = Vec::new();

    for (index, token) in tokens.iter().enumerate().rev() {
        let base = extras
            .and_then(|e| e.get(token))
            .or_else(|| entry.labels.get(token));
        let Some(&base) = base else {
            continue;
        };

        let adjusted = entry.strategy.apply(&tokens, index, base);

        words.push(token.clone());
        if adjusted > 0 {
            positive.push(token.clone());
        } else if adjusted < 0 {
            negative.push(token.clone());
        }
        score = score.saturating_add(adjusted);
        calculation.push(TokenScore {
            token: token.clone(),
            score: adjusted,
        });
    }

    let comparative = if tokens.is_empty() {
        0.0
    } else {
        f64::from(score) / tokens.len() as f64
    };

    debug!(
        language,
        score,
        tokens = tokens.len(),
        matched = words.len(),
        "Scored phrase"
    );

    Ok(AnalysisResult {
        score,
        comparative,
        calculation,
        tokens,
        words,
        positive,
        negative,
    })
}
