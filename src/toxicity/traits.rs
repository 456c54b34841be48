// Toxicity scorer trait — the boundary to remote analysis services.
//
// The moderation core never does I/O itself. Anything that needs a remote
// verdict goes through this trait, and whatever the provider returned is
// kept alongside the parsed scores.

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;

use crate::error::{ModerateError, Result};

/// Attributes a provider can be asked to score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Toxicity,
    SevereToxicity,
    IdentityAttack,
    Insult,
    Profanity,
    Threat,
}

impl Attribute {
    pub const ALL: [Attribute; 6] = [
        Attribute::Toxicity,
        Attribute::SevereToxicity,
        Attribute::IdentityAttack,
        Attribute::Insult,
        Attribute::Profanity,
        Attribute::Threat,
    ];

    /// Wire name, e.g. `SEVERE_TOXICITY`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Attribute::Toxicity => "TOXICITY",
            Attribute::SevereToxicity => "SEVERE_TOXICITY",
            Attribute::IdentityAttack => "IDENTITY_ATTACK",
            Attribute::Insult => "INSULT",
            Attribute::Profanity => "PROFANITY",
            Attribute::Threat => "THREAT",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Attribute {
    type Err = ModerateError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_uppercase().replace('-', "_");
        Attribute::ALL
            .into_iter()
            .find(|a| a.as_str() == wanted)
            .ok_or_else(|| ModerateError::config(format!("unknown toxicity attribute: {s:?}")))
    }
}

/// The result of scoring a single piece of text for toxicity.
#[derive(Debug, Clone)]
pub struct ToxicityResult {
    /// Overall toxicity from 0.0 (benign) to 1.0 (very toxic), if requested
    pub toxicity: Option<f64>,
    /// Breakdown of the other attributes, populated when requested
    pub attributes: ToxicityAttributes,
    /// The provider's response body, untouched
    pub raw: serde_json::Value,
}

/// Detailed toxicity attribute scores (all 0.0 to 1.0).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToxicityAttributes {
    pub severe_toxicity: Option<f64>,
    pub identity_attack: Option<f64>,
    pub insult: Option<f64>,
    pub profanity: Option<f64>,
    pub threat: Option<f64>,
}

/// Trait for scoring text toxicity. Implementations are async because
/// providers are remote. Errors are returned as-is; retries and backoff are
/// the caller's business.
#[async_trait]
pub trait ToxicityScorer: Send + Sync {
    /// Score a single text for toxicity.
    async fn score_text(&self, text: &str) -> Result<ToxicityResult>;

    /// Score multiple texts, returning results in the same order.
    /// Stops at the first failure.
    async fn score_batch(&self, texts: &[String]) -> Result<Vec<ToxicityResult>> {
        let mut results = Vec::with_capacity(texts.len());
        for text in texts {
            results.push(self.score_text(text).await?);
        }
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_parse() {
        assert_eq!("toxicity".parse::<Attribute>().unwrap(), Attribute::Toxicity);
        assert_eq!(
            "severe-toxicity".parse::<Attribute>().unwrap(),
            Attribute::SevereToxicity
        );
        assert!("sarcasm".parse::<Attribute>().is_err());
    }

    #[test]
    fn test_attribute_display_is_wire_name() {
        assert_eq!(Attribute::IdentityAttack.to_string(), "IDENTITY_ATTACK");
    }
}
