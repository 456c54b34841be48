// Language strategy registry.
//
// Maps a language code to its label mapping and scoring strategy. Each
// registry owns its entries; there is no process-wide table. Codes are
// normalized to lower case, so "EN" and "en" name the same language.

use std::collections::HashMap;

use tracing::info;

use super::languages;
use super::traits::{LabelMapping, LanguageEntry};
use crate::error::{ModerateError, Result};

#[derive(Debug, Clone)]
pub struct LanguageRegistry {
    languages: HashMap<String, LanguageEntry>,
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl LanguageRegistry {
    /// A registry with no languages at all.
    pub fn empty() -> Self {
        Self {
            languages: HashMap::new(),
        }
    }

    /// A registry preloaded with the built-in languages (`en`, `fr`).
    pub fn with_builtins() -> Self {
        let mut registry = Self::empty();
        for (code, entry) in languages::builtins() {
            registry.languages.insert(code.to_string(), entry);
        }
        registry
    }

    /// Insert or replace the entry for `code`. Last writer wins.
    pub fn register_language(&mut self, code: &str, entry: LanguageEntry) {
        let code = normalize(code);
        let replaced = self.languages.insert(code.clone(), entry).is_some();
        info!(language = %code, replaced, "Registered language");
    }

    pub fn entry(&self, code: &str) -> Result<&LanguageEntry> {
        self.languages
            .get(&normalize(code))
            .ok_or_else(|| ModerateError::config(format!("unknown language: {code:?}")))
    }

    /// Label mapping for `code`. An unregistered code is an error, never an
    /// empty mapping.
    pub fn labels(&self, code: &str) -> Result<&LabelMapping> {
        self.entry(code).map(|entry| &entry.labels)
    }

    /// Run `code`'s scoring strategy for the token at `index`.
    pub fn apply_scoring_strategy(
        &self,
        code: &str,
        tokens: &[String],
        index: usize,
        score: i32,
    ) -> Result<i32> {
        Ok(self.entry(code)?.strategy.apply(tokens, index, score))
    }

    pub fn contains(&self, code: &str) -> bool {
        self.languages.contains_key(&normalize(code))
    }

    /// Registered codes, sorted.
    pub fn languages(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.languages.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }
}

fn normalize(code: &str) -> String {
    code.trim().to_lowercase()
}
