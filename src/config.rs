use std::env;

use anyhow::Result;

use crate::moderate::ModerateOptions;
use crate::sentiment::engine::SentimentOptions;
use crate::toxicity::perspective::DEFAULT_ENDPOINT;

/// Central configuration loaded from environment variables.
///
/// All secrets come from env vars (never hardcoded). The .env file
/// is loaded automatically at startup via dotenvy.
#[derive(Debug, Clone)]
pub struct Config {
    /// Skip the built-in blacklist (TEXTMOD_EMPTY_LIST=1)
    pub empty_list: bool,
    /// Comma-separated extra blacklist words (TEXTMOD_EXTRA_WORDS)
    pub extra_words: Vec<String>,
    /// Comma-separated whitelist (TEXTMOD_EXCLUDE)
    pub exclude: Vec<String>,
    pub placeholder: char,
    /// Default sentiment language (TEXTMOD_LANGUAGE)
    pub language: Option<String>,
    pub perspective_api_key: String,
    pub perspective_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Everything has a default except the Perspective API key, which is only
    /// checked by commands that call the API.
    pub fn load() -> Result<Self> {
        let placeholder = match env::var("TEXTMOD_PLACEHOLDER") {
            Ok(value) => parse_placeholder(&value)?,
            Err(_) => '*',
        };

        Ok(Self {
            empty_list: env::var("TEXTMOD_EMPTY_LIST")
                .map(|v| matches!(v.trim(), "1" | "true" | "yes"))
                .unwrap_or(false),
            extra_words: split_list(&env::var("TEXTMOD_EXTRA_WORDS").unwrap_or_default()),
            exclude: split_list(&env::var("TEXTMOD_EXCLUDE").unwrap_or_default()),
            placeholder,
            language: env::var("TEXTMOD_LANGUAGE")
                .ok()
                .filter(|v| !v.trim().is_empty()),
            perspective_api_key: env::var("PERSPECTIVE_API_KEY").unwrap_or_default(),
            perspective_url: env::var("PERSPECTIVE_URL")
                .unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string()),
        })
    }

    /// Check that the Perspective API key is configured.
    /// Call this before any operation that needs toxicity scoring.
    pub fn require_perspective(&self) -> Result<()> {
        if self.perspective_api_key.is_empty() {
            anyhow::bail!(
                "PERSPECTIVE_API_KEY not set. Add it to your .env file.\n\
                 See .env.example for the required variables."
            );
        }
        Ok(())
    }

    /// Map onto the library's construction options.
    pub fn moderate_options(&self) -> ModerateOptions {
        ModerateOptions {
            empty_list: self.empty_list,
            list: self.extra_words.clone(),
            exclude: self.exclude.clone(),
            placeholder: self.placeholder,
            sentiment: SentimentOptions {
                language: self.language.clone(),
                extras: None,
            },
            perspective_url: self.perspective_url.clone(),
            ..ModerateOptions::default()
        }
    }
}

/// The placeholder must be exactly one character.
fn parse_placeholder(value: &str) -> Result<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => anyhow::bail!("TEXTMOD_PLACEHOLDER must be a single character, got {value:?}"),
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_placeholder() {
        assert_eq!(parse_placeholder("#").unwrap(), '#');
        assert_eq!(parse_placeholder("é").unwrap(), 'é');
        assert!(parse_placeholder("").is_err());
        assert!(parse_placeholder("**").is_err());
    }

    #[test]
    fn test_split_list_trims_and_drops_empty() {
        assert_eq!(split_list(" foo, bar ,,baz "), vec!["foo", "bar", "baz"]);
        assert!(split_list("").is_empty());
    }

    #[test]
    fn test_moderate_options_mapping() {
        let config = Config {
            empty_list: true,
            extra_words: vec!["frak".to_string()],
            exclude: vec!["hell".to_string()],
            placeholder: '#',
            language: Some("fr".to_string()),
            perspective_api_key: String::new(),
            perspective_url: DEFAULT_ENDPOINT.to_string(),
        };
        assert!(config.require_perspective().is_err());

        let options = config.moderate_options();
        assert!(options.empty_list);
        assert_eq!(options.list, vec!["frak"]);
        assert_eq!(options.placeholder, '#');
        assert_eq!(options.sentiment.language.as_deref(), Some("fr"));
    }
}
