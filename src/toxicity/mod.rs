// Toxicity scoring — trait-based boundary to remote providers.
//
// The ToxicityScorer trait defines the interface. PerspectiveScorer
// implements it using Google's Perspective API; another provider can be
// dropped in without touching the moderation core.

pub mod perspective;
pub mod traits;
