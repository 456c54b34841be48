// textmod: blacklist filtering and lexicon-based sentiment scoring
//
// This is the library root. The filter and the sentiment engine are
// independent; `moderate::TextModerate` composes them behind one
// configuration surface and forwards toxicity calls to `toxicity`.

pub mod config;
pub mod error;
pub mod filter;
pub mod moderate;
pub mod output;
pub mod sentiment;
pub mod tokenize;
pub mod toxicity;

pub use error::{ModerateError, TransportError};
pub use moderate::{ModerateOptions, TextModerate};
pub use sentiment::engine::{AnalysisResult, SentimentOptions, TokenScore};
pub use sentiment::traits::{LabelMapping, LanguageEntry, ScoringStrategy};
