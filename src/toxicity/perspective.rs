// Google Perspective API implementation.
//
// Sends the text plus a set of requested attributes to `comments:analyze`,
// authenticated with the caller's API key. Failures (network, non-2xx, a body
// we can't read) are logged here and handed back unchanged; nothing is
// retried.
//
// API docs: https://developers.perspectiveapi.com/s/about-the-api-methods

use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use super::traits::{Attribute, ToxicityAttributes, ToxicityResult, ToxicityScorer};
use crate::error::{Result, TransportError};
use crate::output::truncate_chars;

pub const DEFAULT_ENDPOINT: &str =
    "https://commentanalyzer.googleapis.com/v1alpha1/comments:analyze";

/// Perspective API toxicity scorer.
pub struct PerspectiveScorer {
    client: Client,
    api_key: String,
    endpoint: String,
    attributes: Vec<Attribute>,
    languages: Vec<String>,
}

impl PerspectiveScorer {
    /// Create a scorer for the given API key, requesting only `TOXICITY`.
    pub fn new(api_key: String) -> Self {
        Self::from_client(Client::new(), api_key)
    }

    /// Same as `new`, but sends requests through an existing client so its
    /// connection pool is shared.
    pub fn from_client(client: Client, api_key: String) -> Self {
        Self {
            client,
            api_key,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            attributes: vec![Attribute::Toxicity],
            languages: Vec::new(),
        }
    }

    /// Point at a different `comments:analyze` URL (proxies, tests).
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    #[must_use]
    pub fn with_attributes(mut self, attributes: Vec<Attribute>) -> Self {
        if !attributes.is_empty() {
            self.attributes = attributes;
        }
        self
    }

    /// Language hints. Left empty, Perspective auto-detects.
    #[must_use]
    pub fn with_languages(mut self, languages: Vec<String>) -> Self {
        self.languages = languages;
        self
    }

    async fn analyze(&self, text: &str) -> std::result::Result<ToxicityResult, TransportError> {
        let request = PerspectiveRequest {
            comment: Comment { text },
            requested_attributes: self
                .attributes
                .iter()
                .map(|a| (a.as_str(), AttributeConfig {}))
                .collect(),
            languages: &self.languages,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", &self.api_key)])
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(TransportError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let raw: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| TransportError::Decode(e.to_string()))?;
        let parsed: PerspectiveResponse = serde_json::from_value(raw.clone())
            .map_err(|e| TransportError::Decode(e.to_string()))?;

        let toxicity = extract_score(&parsed, Attribute::Toxicity);

        debug!(
            toxicity = ?toxicity,
            attributes = parsed.attribute_scores.len(),
            text_preview = %truncate_chars(text, 50),
            "Scored text"
        );

        Ok(ToxicityResult {
            toxicity,
            attributes: ToxicityAttributes {
                severe_toxicity: extract_score(&parsed, Attribute::SevereToxicity),
                identity_attack: extract_score(&parsed, Attribute::IdentityAttack),
                insult: extract_score(&parsed, Attribute::Insult),
                profanity: extract_score(&parsed, Attribute::Profanity),
                threat: extract_score(&parsed, Attribute::Threat),
            },
            raw,
        })
    }
}

#[async_trait]
impl ToxicityScorer for PerspectiveScorer {
    async fn score_text(&self, text: &str) -> Result<ToxicityResult> {
        self.analyze(text).await.map_err(|e| {
            error!(error = %e, "Error analyzing toxicity");
            e.into()
        })
    }
}

/// Extract a specific attribute's summary score from the API response.
fn extract_score(response: &PerspectiveResponse, attribute: Attribute) -> Option<f64> {
    response
        .attribute_scores
        .get(attribute.as_str())
        .map(|score| score.summary_score.value)
}

// --- Perspective API request/response types ---

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PerspectiveRequest<'a> {
    comment: Comment<'a>,
    requested_attributes: HashMap<&'static str, AttributeConfig>,
    #[serde(skip_serializing_if = "<[String]>::is_empty")]
    languages: &'a [String],
}

#[derive(Serialize)]
struct Comment<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct AttributeConfig {}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PerspectiveResponse {
    #[serde(default)]
    attribute_scores: HashMap<String, AttributeScore>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AttributeScore {
    summary_score: SummaryScore,
}

#[derive(Deserialize)]
struct SummaryScore {
    value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_shape() {
        let languages = Vec::new();
        let request = PerspectiveRequest {
            comment: Comment { text: "hello" },
            requested_attributes: [("TOXICITY", AttributeConfig {})].into_iter().collect(),
            languages: &languages,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "comment": { "text": "hello" },
                "requestedAttributes": { "TOXICITY": {} }
            })
        );
    }

    #[test]
    fn test_extract_score_missing_attribute() {
        let parsed: PerspectiveResponse = serde_json::from_value(serde_json::json!({
            "attributeScores": {
                "TOXICITY": { "summaryScore": { "value": 0.42, "type": "PROBABILITY" } }
            }
        }))
        .unwrap();
        assert_eq!(extract_score(&parsed, Attribute::Toxicity), Some(0.42));
        assert_eq!(extract_score(&parsed, Attribute::Insult), None);
    }
}
