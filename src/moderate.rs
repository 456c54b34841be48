// TextModerate — one configuration surface over the blacklist filter, the
// sentiment engine and the toxicity boundary.
//
// The filter and the language registry are the only mutable state. Both sit
// behind an RwLock so a TextModerate can be shared across threads; readers
// see the state either before or after a mutation, never halfway.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use reqwest::Client;
use tracing::debug;

use crate::error::Result;
use crate::filter::blacklist::{
    BlacklistFilter, FilterConfig, DEFAULT_PLACEHOLDER, DEFAULT_REPLACE_PATTERN,
    DEFAULT_SANITIZE_PATTERN, DEFAULT_SPLIT_PATTERN,
};
use crate::filter::words::default_words;
use crate::sentiment::engine::{self, AnalysisResult, SentimentOptions};
use crate::sentiment::registry::LanguageRegistry;
use crate::sentiment::traits::{LabelMapping, LanguageEntry};
use crate::toxicity::perspective::{PerspectiveScorer, DEFAULT_ENDPOINT};
use crate::toxicity::traits::{ToxicityResult, ToxicityScorer};

/// Construction-time options. Every field has a default.
#[derive(Debug, Clone)]
pub struct ModerateOptions {
    /// Start with no built-in blacklist (only `list` is used)
    pub empty_list: bool,
    /// Extra blacklist words, added after the built-in list
    pub list: Vec<String>,
    /// Initial whitelist
    pub exclude: Vec<String>,
    pub placeholder: char,
    /// Characters stripped from a word before it's masked
    pub sanitize_pattern: String,
    /// Characters replaced by the placeholder when masking
    pub replace_pattern: String,
    /// How `clean` splits text into fragments
    pub split_pattern: String,
    /// Defaults applied to every sentiment call
    pub sentiment: SentimentOptions,
    /// Perspective `comments:analyze` URL
    pub perspective_url: String,
}

impl Default for ModerateOptions {
    fn default() -> Self {
        Self {
            empty_list: false,
            list: Vec::new(),
            exclude: Vec::new(),
            placeholder: DEFAULT_PLACEHOLDER,
            sanitize_pattern: DEFAULT_SANITIZE_PATTERN.to_string(),
            replace_pattern: DEFAULT_REPLACE_PATTERN.to_string(),
            split_pattern: DEFAULT_SPLIT_PATTERN.to_string(),
            sentiment: SentimentOptions::default(),
            perspective_url: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

pub struct TextModerate {
    filter: RwLock<BlacklistFilter>,
    registry: RwLock<LanguageRegistry>,
    sentiment: SentimentOptions,
    perspective_url: String,
    http: Client,
}

impl TextModerate {
    /// Build from options. Fails if any of the patterns don't compile.
    pub fn new(options: ModerateOptions) -> Result<Self> {
        let mut list = if options.empty_list {
            Vec::new()
        } else {
            default_words()
        };
        list.extend(options.list);

        let filter = BlacklistFilter::new(FilterConfig {
            list,
            exclude: options.exclude,
            placeholder: options.placeholder,
            sanitize_pattern: options.sanitize_pattern,
            replace_pattern: options.replace_pattern,
            split_pattern: options.split_pattern,
        })?;

        Ok(Self {
            filter: RwLock::new(filter),
            registry: RwLock::new(LanguageRegistry::with_builtins()),
            sentiment: options.sentiment,
            perspective_url: options.perspective_url,
            http: Client::new(),
        })
    }

    // --- Blacklist ---

    pub fn is_profane(&self, text: &str) -> bool {
        self.filter().is_profane(text)
    }

    pub fn replace_word(&self, text: &str) -> String {
        self.filter().replace_word(text)
    }

    pub fn clean(&self, text: &str) -> String {
        self.filter().clean(text)
    }

    /// Blacklist words, lifting any exclusion on them.
    pub fn add_words<I, S>(&self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.filter_mut().add_words(words);
    }

    /// Whitelist words.
    pub fn remove_words<I, S>(&self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.filter_mut().remove_words(words);
    }

    /// Snapshot of the blacklist.
    pub fn words(&self) -> Vec<String> {
        self.filter().words().to_vec()
    }

    // --- Sentiment ---

    pub fn register_language(&self, code: &str, entry: LanguageEntry) {
        self.registry_mut().register_language(code, entry);
    }

    /// Copy of the label mapping registered for `code`.
    pub fn labels(&self, code: &str) -> Result<LabelMapping> {
        self.registry().labels(code).cloned()
    }

    pub fn languages(&self) -> Vec<String> {
        self.registry()
            .languages()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Score `phrase`. `options` are layered over the configured defaults.
    pub fn analyze_sentiment(
        &self,
        phrase: &str,
        options: &SentimentOptions,
    ) -> Result<AnalysisResult> {
        let options = options.over(&self.sentiment);
        engine::analyze_sentiment(&self.registry(), phrase, &options)
    }

    /// Same as `analyze_sentiment`, but resolves on a later scheduler turn
    /// instead of inside the caller's.
    pub async fn analyze_sentiment_deferred(
        &self,
        phrase: &str,
        options: &SentimentOptions,
    ) -> Result<AnalysisResult> {
        tokio::task::yield_now().await;
        debug!("Running deferred sentiment analysis");
        self.analyze_sentiment(phrase, options)
    }

    // --- Toxicity ---

    /// Ask Perspective for a `TOXICITY` score using `api_key`. Every call
    /// shares one HTTP client.
    pub async fn analyze_toxicity(&self, text: &str, api_key: &str) -> Result<ToxicityResult> {
        let scorer = PerspectiveScorer::from_client(self.http.clone(), api_key.to_string())
            .with_endpoint(&self.perspective_url);
        scorer.score_text(text).await
    }

    /// Score with any provider.
    pub async fn analyze_toxicity_with(
        &self,
        scorer: &dyn ToxicityScorer,
        text: &str,
    ) -> Result<ToxicityResult> {
        scorer.score_text(text).await
    }

    // Poisoning can't leave the guarded data half-updated: every mutation is
    // a single insert/remove, so the value is always usable.
    fn filter(&self) -> RwLockReadGuard<'_, BlacklistFilter> {
        self.filter.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn filter_mut(&self) -> RwLockWriteGuard<'_, BlacklistFilter> {
        self.filter.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn registry(&self) -> RwLockReadGuard<'_, LanguageRegistry> {
        self.registry.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn registry_mut(&self) -> RwLockWriteGuard<'_, LanguageRegistry> {
        self.registry.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_list_is_loaded() {
        let moderate = TextModerate::new(ModerateOptions::default()).unwrap();
        assert!(moderate.is_profane("holy shit"));
        assert_eq!(moderate.clean("holy shit"), "holy ****");
    }

    #[test]
    fn test_empty_list_uses_only_extras() {
        let moderate = TextModerate::new(ModerateOptions {
            empty_list: true,
            list: vec!["frak".to_string()],
            ..ModerateOptions::default()
        })
        .unwrap();
        assert!(!moderate.is_profane("shit"));
        assert!(moderate.is_profane("frak"));
        assert_eq!(moderate.words(), vec!["frak".to_string()]);
    }

    #[test]
    fn test_bad_pattern_fails_construction() {
        let result = TextModerate::new(ModerateOptions {
            replace_pattern: "[".to_string(),
            ..ModerateOptions::default()
        });
        assert!(result.is_err_and(|e| e.is_configuration()));
    }

    #[test]
    fn test_default_sentiment_language() {
        let moderate = TextModerate::new(ModerateOptions {
            sentiment: SentimentOptions::language("fr"),
            ..ModerateOptions::default()
        })
        .unwrap();
        let result = moderate
            .analyze_sentiment("pas bon", &SentimentOptions::default())
            .unwrap();
        assert_eq!(result.score, -2);

        // A per-call language overrides the default
        let result = moderate
            .analyze_sentiment("good", &SentimentOptions::language("en"))
            .unwrap();
        assert_eq!(result.score, 2);
    }

    #[tokio::test]
    async fn test_deferred_matches_sync() {
        let moderate = TextModerate::new(ModerateOptions::default()).unwrap();
        let options = SentimentOptions::default();
        let sync = moderate.analyze_sentiment("great fun", &options).unwrap();
        let deferred = moderate
            .analyze_sentiment_deferred("great fun", &options)
            .await
            .unwrap();
        assert_eq!(sync, deferred);
    }
}
