//! Baseline module - the linguistic fingerprint of a writer's document

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Linguistic fingerprint computed from a document's text.
///
/// Baselines are created once per computation and handed to the caller, who
/// owns persistence. The `timestamp` records when the computation ran, not
/// when the document was uploaded or stored.
///
/// Serializes with camelCase keys:
///
/// ```json
/// {
///   "vocabularyRichness": 0.72,
///   "avgSentenceLength": 3,
///   "passiveVoiceFrequency": "low",
///   "topKeywords": ["clarity", "voice", "structure"],
///   "timestamp": "2026-10-19T08:30:00Z"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Baseline {
    /// Ratio describing how varied the writer's vocabulary is
    pub vocabulary_richness: f64,

    /// Mean words per sentence, rounded to the nearest integer
    pub avg_sentence_length: u64,

    /// Qualitative passive-voice usage bucket
    pub passive_voice_frequency: String,

    /// Most characteristic keywords, most significant first
    pub top_keywords: Vec<String>,

    /// When the baseline was computed (UTC)
    pub timestamp: DateTime<Utc>,
}

impl Baseline {
    /// Assemble a baseline from an analyzer profile and sentence statistics
    pub fn new(
        profile: LinguisticProfile,
        avg_sentence_length: u64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            vocabulary_richness: profile.vocabulary_richness,
            avg_sentence_length,
            passive_voice_frequency: profile.passive_voice_frequency,
            top_keywords: profile.top_keywords,
            timestamp,
        }
    }

    /// The analyzer-produced portion of this baseline
    pub fn profile(&self) -> LinguisticProfile {
        LinguisticProfile {
            vocabulary_richness: self.vocabulary_richness,
            passive_voice_frequency: self.passive_voice_frequency.clone(),
            top_keywords: self.top_keywords.clone(),
        }
    }

    /// Compare two baselines on every field except `timestamp`.
    ///
    /// Two computations over identical text are expected to agree here.
    pub fn same_fingerprint(&self, other: &Baseline) -> bool {
        self.avg_sentence_length == other.avg_sentence_length && self.profile() == other.profile()
    }
}

/// The fields of a [`Baseline`] produced by a
/// [`LinguisticAnalyzer`](crate::traits::LinguisticAnalyzer).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinguisticProfile {
    /// Vocabulary richness score
    pub vocabulary_richness: f64,

    /// Passive-voice usage bucket
    pub passive_voice_frequency: String,

    /// Ordered keyword list
    pub top_keywords: Vec<String>,
}
