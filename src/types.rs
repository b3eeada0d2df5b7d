//! Core data types for datasets and resolution results

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tag reported when no stage of the resolver accepts a message
pub const UNKNOWN_INTENT: &str = "unknown";

/// A category of user request, with its training phrases and replies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Intent {
    pub tag: String,
    #[serde(default)]
    pub patterns: Vec<String>,
    #[serde(default)]
    pub responses: Vec<String>,
}

/// The static intent dataset, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub intents: Vec<Intent>,
}

/// Which resolver stage produced a confidence score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchSource {
    /// Classifier probability at or above the confidence threshold
    Classifier,
    /// Longest-common-subsequence ratio against a known pattern
    SequenceSimilarity,
    /// Token Jaccard overlap against a known pattern
    TokenOverlap,
    /// Nothing matched; confidence is the classifier's low top probability
    Unmatched,
}

/// Final (intent, confidence) decision for one message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    pub intent: String,
    pub confidence: f64,
    pub source: MatchSource,
}

/// Reply payload handed back to transport layers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    pub intent: String,
    pub confidence: f64,
    pub source: MatchSource,
    pub response: String,
}

impl Intent {
    pub fn new(tag: impl Into<String>, patterns: &[&str], responses: &[&str]) -> Self {
        Self {
            tag: tag.into(),
            patterns: patterns.iter().map(|p| p.to_string()).collect(),
            responses: responses.iter().map(|r| r.to_string()).collect(),
        }
    }
}

impl Resolution {
    pub fn new(intent: impl Into<String>, confidence: f64, source: MatchSource) -> Self {
        Self {
            intent: intent.into(),
            confidence,
            source,
        }
    }

    pub fn unknown(confidence: f64) -> Self {
        Self::new(UNKNOWN_INTENT, confidence, MatchSource::Unmatched)
    }

    pub fn is_unknown(&self) -> bool {
        self.intent == UNKNOWN_INTENT
    }
}

impl MatchSource {
    pub const ALL: [MatchSource; 4] = [
        MatchSource::Classifier,
        MatchSource::SequenceSimilarity,
        MatchSource::TokenOverlap,
        MatchSource::Unmatched,
    ];

    /// Label used in serialized output
    pub fn as_str(self) -> &'static str {
        match self {
            MatchSource::Classifier => "classifier",
            MatchSource::SequenceSimilarity => "sequence_similarity",
            MatchSource::TokenOverlap => "token_overlap",
            MatchSource::Unmatched => "unmatched",
        }
    }
}

impl fmt::Display for MatchSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Dataset {
    pub fn new(intents: Vec<Intent>) -> Self {
        Self { intents }
    }

    pub fn pattern_count(&self) -> usize {
        self.intents.iter().map(|i| i.patterns.len()).sum()
    }
}
