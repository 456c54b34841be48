// Blacklist filter — profanity detection and placeholder masking.
//
// The word list is kept as given (duplicates and all) for inspection, and
// indexed into two lookup structures when words are added:
//
//   - plain entries (only [A-Za-z0-9_]) go into a lower-case HashSet and are
//     checked against the ASCII word runs of the input
//   - everything else gets one escaped whole-word regex, compiled once
//
// The exclude list always wins: a word in it never counts as profane, no
// matter how many times it appears in the word list.

use std::collections::HashSet;

use regex_lite::{NoExpand, Regex, RegexBuilder};
use tracing::{debug, info, warn};

use super::words::default_words;
use crate::error::{ModerateError, Result};

/// Characters stripped from a word before masking. `|`, `$` and `@` are kept.
pub const DEFAULT_SANITIZE_PATTERN: &str = r"[^a-zA-Z0-9|$@]|\^";
/// Characters replaced by the placeholder when masking.
pub const DEFAULT_REPLACE_PATTERN: &str = r"\w";
/// How `clean` cuts a sentence into fragments.
pub const DEFAULT_SPLIT_PATTERN: &str = r"\b";
pub const DEFAULT_PLACEHOLDER: char = '*';

/// Everything a `BlacklistFilter` is built from.
#[derive(Debug, Clone)]
pub struct FilterConfig {
    pub list: Vec<String>,
    pub exclude: Vec<String>,
    pub placeholder: char,
    pub sanitize_pattern: String,
    pub replace_pattern: String,
    pub split_pattern: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            list: default_words(),
            exclude: Vec::new(),
            placeholder: DEFAULT_PLACEHOLDER,
            sanitize_pattern: DEFAULT_SANITIZE_PATTERN.to_string(),
            replace_pattern: DEFAULT_REPLACE_PATTERN.to_string(),
            split_pattern: DEFAULT_SPLIT_PATTERN.to_string(),
        }
    }
}

/// A blacklist entry that can't be matched by plain set lookup.
#[derive(Debug)]
struct PatternEntry {
    word: String,
    regex: Regex,
}

#[derive(Debug)]
pub struct BlacklistFilter {
    list: Vec<String>,
    plain: HashSet<String>,
    patterned: Vec<PatternEntry>,
    exclude: HashSet<String>,
    placeholder: String,
    sanitize: Regex,
    replace: Regex,
    split: Regex,
    word_run: Regex,
}

impl BlacklistFilter {
    /// Build a filter, compiling all configured patterns up front.
    ///
    /// A pattern that doesn't compile is a configuration error here rather
    /// than a surprise on the first `clean` call.
    pub fn new(config: FilterConfig) -> Result<Self> {
        let mut filter = Self {
            list: Vec::with_capacity(config.list.len()),
            plain: HashSet::new(),
            patterned: Vec::new(),
            exclude: config.exclude.iter().map(|w| w.to_lowercase()).collect(),
            placeholder: config.placeholder.to_string(),
            sanitize: compile("sanitize", &config.sanitize_pattern)?,
            replace: compile("replace", &config.replace_pattern)?,
            split: compile("split", &config.split_pattern)?,
            word_run: compile("word run", r"[A-Za-z0-9_]+")?,
        };

        for word in config.list {
            filter.index(&word);
            filter.list.push(word);
        }

        debug!(
            words = filter.list.len(),
            patterned = filter.patterned.len(),
            excluded = filter.exclude.len(),
            "Built blacklist filter"
        );

        Ok(filter)
    }

    /// True if any non-excluded blacklist entry appears in `text` as a whole word.
    pub fn is_profane(&self, text: &str) -> bool {
        let plain_hit = self
            .word_run
            .find_iter(text)
            .map(|m| m.as_str().to_lowercase())
            .find(|w| self.plain.contains(w) && !self.exclude.contains(w));

        if let Some(word) = plain_hit {
            debug!(word = %word, "Blacklist hit");
            return true;
        }

        if self.patterned.is_empty() {
            return false;
        }

        let lowered = text.to_lowercase();
        self.patterned
            .iter()
            .filter(|entry| !self.exclude.contains(&entry.word))
            .any(|entry| entry.regex.is_match(&lowered))
    }

    /// Mask a single word: strip sanitized characters, then replace every
    /// remaining replace-pattern match with the placeholder.
    pub fn replace_word(&self, text: &str) -> String {
        let stripped = self.sanitize.replace_all(text, "");
        self.replace
            .replace_all(&stripped, NoExpand(&self.placeholder))
            .into_owned()
    }

    /// Mask every profane fragment of `text`.
    ///
    /// Fragments are rejoined with the first delimiter the split pattern
    /// matched, so with a non-empty delimiter pattern (e.g. `\s+`) mixed
    /// separators collapse to the first one. The default `\b` split matches
    /// the empty string and round-trips exactly.
    pub fn clean(&self, text: &str) -> String {
        let delimiter = self.split.find(text).map_or("", |m| m.as_str());

        self.split
            .split(text)
            .map(|fragment| {
                if self.is_profane(fragment) {
                    self.replace_word(fragment)
                } else {
                    fragment.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(delimiter)
    }

    /// Append words to the blacklist and lift any exclusion on them.
    pub fn add_words<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut added = 0;
        for word in words {
            let word = word.as_ref();
            self.index(word);
            self.list.push(word.to_string());
            self.exclude.remove(&word.to_lowercase());
            added += 1;
        }
        info!(added, total = self.list.len(), "Added blacklist words");
    }

    /// Whitelist words. The word list itself is left untouched.
    pub fn remove_words<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let before = self.exclude.len();
        self.exclude
            .extend(words.into_iter().map(|w| w.as_ref().to_lowercase()));
        info!(
            excluded = self.exclude.len() - before,
            "Excluded blacklist words"
        );
    }

    /// The blacklist as configured and extended, in insertion order.
    pub fn words(&self) -> &[String] {
        &self.list
    }

    /// The exclude list, sorted.
    pub fn excluded(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.exclude.iter().map(String::as_str).collect();
        words.sort_unstable();
        words
    }

    pub fn is_excluded(&self, word: &str) -> bool {
        self.exclude.contains(&word.to_lowercase())
    }

    pub fn placeholder(&self) -> char {
        self.placeholder.chars().next().unwrap_or(DEFAULT_PLACEHOLDER)
    }

    /// Put a word into the matching index. Duplicates are harmless.
    fn index(&mut self, word: &str) {
        let lowered = word.to_lowercase();
        if lowered.is_empty() {
            return;
        }

        if is_plain(&lowered) {
            self.plain.insert(lowered);
            return;
        }

        if self.patterned.iter().any(|e| e.word == lowered) {
            return;
        }

        match whole_word_regex(&lowered) {
            Ok(regex) => self.patterned.push(PatternEntry {
                word: lowered,
                regex,
            }),
            Err(e) => warn!(word = %word, error = %e, "Skipping unmatchable blacklist entry"),
        }
    }
}

fn is_plain(word: &str) -> bool {
    word.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Escaped pattern for a word with non-word characters. Boundaries are only
/// asserted on edges that are word characters, otherwise an entry ending in
/// punctuation could never match at the end of a string.
fn whole_word_regex(word: &str) -> std::result::Result<Regex, regex_lite::Error> {
    let is_word = |c: Option<char>| c.is_some_and(|c| c.is_ascii_alphanumeric() || c == '_');
    let lead = if is_word(word.chars().next()) { r"\b" } else { "" };
    let tail = if is_word(word.chars().last()) { r"\b" } else { "" };

    RegexBuilder::new(&format!("{lead}{}{tail}", regex_lite::escape(word)))
        .case_insensitive(true)
        .build()
}

fn compile(name: &str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern)
        .map_err(|e| ModerateError::config(format!("invalid {name} pattern {pattern:?}: {e}")))
}
