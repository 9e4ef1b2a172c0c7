//! Linguistic analyzers
//!
//! Only a placeholder exists today. A statistical or NLP-backed analyzer
//! replaces it by implementing [`LinguisticAnalyzer`]; the `Baseline` shape
//! and the computer's contract stay the same.

use inkwell_domain::{LinguisticAnalyzer, LinguisticProfile};

/// Vocabulary richness reported by [`PlaceholderAnalyzer`]
pub const PLACEHOLDER_VOCABULARY_RICHNESS: f64 = 0.72;

/// Passive-voice bucket reported by [`PlaceholderAnalyzer`]
pub const PLACEHOLDER_PASSIVE_VOICE_FREQUENCY: &str = "low";

/// Keywords reported by [`PlaceholderAnalyzer`]
pub const PLACEHOLDER_TOP_KEYWORDS: [&str; 3] = ["clarity", "voice", "structure"];

/// Returns the same fixed profile for every input
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderAnalyzer;

impl LinguisticAnalyzer for PlaceholderAnalyzer {
    fn analyze(&self, _text: &str) -> LinguisticProfile {
        LinguisticProfile {
            vocabulary_richness: PLACEHOLDER_VOCABULARY_RICHNESS,
            passive_voice_frequency: PLACEHOLDER_PASSIVE_VOICE_FREQUENCY.to_string(),
            top_keywords: PLACEHOLDER_TOP_KEYWORDS
                .iter()
                .map(|k| k.to_string())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_is_constant() {
        let analyzer = PlaceholderAnalyzer;
        let a = analyzer.analyze("");
        let b = analyzer.analyze("An entirely different manuscript, with many words.");
        assert_eq!(a, b);
        assert_eq!(a.vocabulary_richness, PLACEHOLDER_VOCABULARY_RICHNESS);
        assert_eq!(a.passive_voice_frequency, "low");
        assert_eq!(a.top_keywords, vec!["clarity", "voice", "structure"]);
    }
}
