//! Extract → compute pipeline for a single upload

use crate::analyzer::PlaceholderAnalyzer;
use crate::clock::SystemClock;
use crate::computer::BaselineComputer;
use inkwell_domain::{Baseline, Clock, Document, LinguisticAnalyzer, TextExtractor};
use tracing::info;

/// Runs one document through extraction and baseline computation.
///
/// The pipeline keeps no state between calls; share one instance across
/// threads for concurrent uploads.
#[derive(Debug, Clone)]
pub struct BaselinePipeline<E, A = PlaceholderAnalyzer, C = SystemClock>
where
    E: TextExtractor,
    A: LinguisticAnalyzer,
    C: Clock,
{
    extractor: E,
    computer: BaselineComputer<A, C>,
}

impl<E: TextExtractor> BaselinePipeline<E, PlaceholderAnalyzer, SystemClock> {
    /// Pipeline with the default baseline computer
    pub fn with_extractor(extractor: E) -> Self {
        Self::new(extractor, BaselineComputer::new())
    }
}

impl<E, A, C> BaselinePipeline<E, A, C>
where
    E: TextExtractor,
    A: LinguisticAnalyzer,
    C: Clock,
{
    /// Create a new pipeline
    pub fn new(extractor: E, computer: BaselineComputer<A, C>) -> Self {
        Self { extractor, computer }
    }

    /// Extract text from `document`, then compute its baseline.
    ///
    /// Extraction errors are returned unchanged; computation cannot fail.
    pub fn process(&self, document: &Document) -> Result<Baseline, E::Error> {
        let text = self.extractor.extract_text(document)?;
        let baseline = self.computer.compute_baseline(&text);

        info!(
            "Baseline computed for '{}' ({} bytes, {} chars)",
            document.filename,
            document.len(),
            text.len()
        );

        Ok(baseline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::{TimeZone, Utc};

    /// Upper-cases UTF-8 input; rejects names ending in `.bad`
    struct StubExtractor;

    impl TextExtractor for StubExtractor {
        type Error = String;

        fn extract_text(&self, document: &Document) -> Result<String, String> {
            if document.filename.ends_with(".bad") {
                return Err(format!("cannot decode {}", document.filename));
            }
            Ok(String::from_utf8_lossy(&document.bytes).to_uppercase())
        }
    }

    #[test]
    fn test_process_success() {
        let ts = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let pipeline = BaselinePipeline::new(
            StubExtractor,
            BaselineComputer::new().with_clock(FixedClock(ts)),
        );

        let doc = Document::new("essay.txt", "One two three. Four five.");
        let baseline = pipeline.process(&doc).unwrap();
        assert_eq!(baseline.avg_sentence_length, 3);
        assert_eq!(baseline.timestamp, ts);
    }

    #[test]
    fn test_process_propagates_extraction_error() {
        let pipeline = BaselinePipeline::with_extractor(StubExtractor);
        let doc = Document::new("essay.bad", "whatever");
        assert_eq!(
            pipeline.process(&doc).unwrap_err(),
            "cannot decode essay.bad"
        );
    }

    #[test]
    fn test_borrowed_extractor() {
        let extractor = StubExtractor;
        let pipeline = BaselinePipeline::with_extractor(&extractor);
        assert!(pipeline.process(&Document::new("x.txt", "")).is_ok());
    }
}
