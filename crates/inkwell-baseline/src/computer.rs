//! Baseline computation

use crate::analyzer::PlaceholderAnalyzer;
use crate::clock::SystemClock;
use crate::statistics::TextStatistics;
use inkwell_domain::{Baseline, Clock, LinguisticAnalyzer};
use tracing::debug;

/// Computes baselines from extracted text.
///
/// `compute_baseline` is total: every string, including the empty one,
/// produces a baseline. Aside from reading the clock it has no side effects.
#[derive(Debug, Clone, Default)]
pub struct BaselineComputer<A = PlaceholderAnalyzer, C = SystemClock>
where
    A: LinguisticAnalyzer,
    C: Clock,
{
    analyzer: A,
    clock: C,
}

impl BaselineComputer<PlaceholderAnalyzer, SystemClock> {
    /// Placeholder analyzer, wall-clock timestamps
    pub fn new() -> Self {
        Self::default()
    }
}

impl<A: LinguisticAnalyzer, C: Clock> BaselineComputer<A, C> {
    /// Create a computer from a specific analyzer and clock
    pub fn with_parts(analyzer: A, clock: C) -> Self {
        Self { analyzer, clock }
    }

    /// Replace the analyzer, keeping the clock
    pub fn with_analyzer<B: LinguisticAnalyzer>(self, analyzer: B) -> BaselineComputer<B, C> {
        BaselineComputer {
            analyzer,
            clock: self.clock,
        }
    }

    /// Replace the clock, keeping the analyzer
    pub fn with_clock<K: Clock>(self, clock: K) -> BaselineComputer<A, K> {
        BaselineComputer {
            analyzer: self.analyzer,
            clock,
        }
    }

    /// Compute a baseline for `text`, timestamped now
    pub fn compute_baseline(&self, text: &str) -> Baseline {
        let stats = TextStatistics::from_text(text);
        let profile = self.analyzer.analyze(text);
        let baseline = Baseline::new(profile, stats.avg_sentence_length(), self.clock.now());

        debug!(
            "Computed baseline: {} words, {} sentences, avg {}",
            stats.word_count, stats.sentence_count, baseline.avg_sentence_length
        );

        baseline
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::{
        PLACEHOLDER_PASSIVE_VOICE_FREQUENCY, PLACEHOLDER_TOP_KEYWORDS,
        PLACEHOLDER_VOCABULARY_RICHNESS,
    };
    use crate::clock::FixedClock;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use inkwell_domain::LinguisticProfile;
    use std::sync::atomic::{AtomicI64, Ordering};

    /// Advances one second on every read
    struct SteppingClock(AtomicI64);

    impl Clock for SteppingClock {
        fn now(&self) -> DateTime<Utc> {
            let secs = self.0.fetch_add(1, Ordering::SeqCst);
            Utc.timestamp_opt(secs, 0).unwrap()
        }
    }

    /// Counts words so swaps are observable
    struct WordCountAnalyzer;

    impl LinguisticAnalyzer for WordCountAnalyzer {
        fn analyze(&self, text: &str) -> LinguisticProfile {
            LinguisticProfile {
                vocabulary_richness: text.split_whitespace().count() as f64,
                passive_voice_frequency: "unknown".to_string(),
                top_keywords: Vec::new(),
            }
        }
    }

    fn fixed_instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_reference_text() {
        let computer = BaselineComputer::new().with_clock(FixedClock(fixed_instant()));
        let baseline = computer.compute_baseline("One two three. Four five.");

        assert_eq!(baseline.avg_sentence_length, 3);
        assert_eq!(baseline.vocabulary_richness, PLACEHOLDER_VOCABULARY_RICHNESS);
        assert_eq!(baseline.passive_voice_frequency, PLACEHOLDER_PASSIVE_VOICE_FREQUENCY);
        assert_eq!(baseline.top_keywords, PLACEHOLDER_TOP_KEYWORDS.to_vec());
        assert_eq!(baseline.timestamp, fixed_instant());
    }

    #[test]
    fn test_empty_text() {
        let baseline = BaselineComputer::new().compute_baseline("");
        assert_eq!(baseline.avg_sentence_length, 0);
        assert_eq!(baseline.top_keywords.len(), PLACEHOLDER_TOP_KEYWORDS.len());
    }

    #[test]
    fn test_repeat_calls_differ_only_in_timestamp() {
        let computer = BaselineComputer::new().with_clock(SteppingClock(AtomicI64::new(0)));
        let text = "The committee reviewed the draft. It was approved!";

        let first = computer.compute_baseline(text);
        let second = computer.compute_baseline(text);

        assert!(first.same_fingerprint(&second));
        assert_eq!(second.timestamp - first.timestamp, Duration::seconds(1));
        assert_ne!(first, second);
    }

    #[test]
    fn test_timestamp_taken_at_computation() {
        let computer = BaselineComputer::new().with_clock(SteppingClock(AtomicI64::new(100)));
        assert_eq!(computer.compute_baseline("a").timestamp.timestamp(), 100);
        assert_eq!(computer.compute_baseline("a").timestamp.timestamp(), 101);
    }

    #[test]
    fn test_analyzer_is_pluggable() {
        let computer = BaselineComputer::new()
            .with_analyzer(WordCountAnalyzer)
            .with_clock(FixedClock(fixed_instant()));
        let baseline = computer.compute_baseline("one two three four");

        assert_eq!(baseline.vocabulary_richness, 4.0);
        assert_eq!(baseline.passive_voice_frequency, "unknown");
        assert!(baseline.top_keywords.is_empty());
        assert_eq!(baseline.avg_sentence_length, 4);
    }

    #[test]
    fn test_boxed_analyzer() {
        let analyzer: Box<dyn LinguisticAnalyzer> = Box::new(PlaceholderAnalyzer);
        let computer = BaselineComputer::with_parts(analyzer, FixedClock(fixed_instant()));
        let baseline = computer.compute_baseline("Short. Text.");
        assert_eq!(baseline.avg_sentence_length, 1);
    }

    #[test]
    fn test_serialized_shape() {
        let computer = BaselineComputer::new().with_clock(FixedClock(fixed_instant()));
        let json = serde_json::to_value(computer.compute_baseline("One two three. Four five.")).unwrap();

        let object = json.as_object().unwrap();
        let mut keys: Vec<_> = object.keys().map(String::as_str).collect();
        keys.sort();
        assert_eq!(
            keys,
            vec![
                "avgSentenceLength",
                "passiveVoiceFrequency",
                "timestamp",
                "topKeywords",
                "vocabularyRichness"
            ]
        );
        assert!(json["avgSentenceLength"].is_u64());
        assert_eq!(json["timestamp"], "2026-10-19T12:00:00Z");
    }
}
