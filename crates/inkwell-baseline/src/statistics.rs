//! Word and sentence counting

use once_cell::sync::Lazy;
use regex::Regex;

/// A run of one or more sentence terminators.
static SENTENCE_TERMINATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());

/// Counts that drive the sentence-length part of a baseline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStatistics {
    /// Maximal whitespace-delimited tokens
    pub word_count: usize,

    /// Non-blank segments between terminator runs, never less than 1
    pub sentence_count: usize,
}

impl TextStatistics {
    /// Count words and sentences in `text`.
    ///
    /// A trailing terminator does not open a new sentence, so
    /// `"One two three. Four five."` has two sentences. Text with no
    /// non-blank segment at all (`""`, `"?!"`) counts as one sentence.
    ///
    /// ```
    /// use inkwell_baseline::TextStatistics;
    ///
    /// let stats = TextStatistics::from_text("One two three. Four five.");
    /// assert_eq!(stats.word_count, 5);
    /// assert_eq!(stats.sentence_count, 2);
    /// ```
    pub fn from_text(text: &str) -> Self {
        let word_count = text.split_whitespace().count();
        let segments = SENTENCE_TERMINATORS
            .split(text)
            .filter(|segment| !segment.trim().is_empty())
            .count();

        Self {
            word_count,
            sentence_count: segments.max(1),
        }
    }

    /// Mean words per sentence, halves rounded away from zero (5/2 → 3)
    pub fn avg_sentence_length(&self) -> u64 {
        let sentences = self.sentence_count.max(1) as f64;
        (self.word_count as f64 / sentences).round() as u64
    }
}
