//! Core Extractor implementation

use crate::config::ExtractorConfig;
use crate::decoder::{FormatDecoder, PlainTextDecoder};
use crate::docx::DocxDecoder;
use crate::error::ExtractionError;
use crate::format::{DocumentFormat, FormatDetector, SuffixDetector};
use inkwell_domain::traits::TextExtractor;
use inkwell_domain::Document;
use tracing::{debug, warn};

/// Extracts plain text from uploaded documents.
///
/// Holds no per-call state, so one instance can serve any number of
/// concurrent uploads.
#[derive(Debug, Clone)]
pub struct DocumentExtractor<D = SuffixDetector>
where
    D: FormatDetector,
{
    detector: D,
    docx: DocxDecoder,
    plain: PlainTextDecoder,
}

impl DocumentExtractor<SuffixDetector> {
    /// Create an extractor that picks formats by file-name suffix
    pub fn new(config: ExtractorConfig) -> Result<Self, ExtractionError> {
        Self::with_detector(config, SuffixDetector)
    }
}

impl Default for DocumentExtractor<SuffixDetector> {
    fn default() -> Self {
        let config = ExtractorConfig::default();
        Self {
            detector: SuffixDetector,
            docx: DocxDecoder::new(&config),
            plain: PlainTextDecoder,
        }
    }
}

impl<D: FormatDetector> DocumentExtractor<D> {
    /// Create an extractor with a custom format detector
    pub fn with_detector(config: ExtractorConfig, detector: D) -> Result<Self, ExtractionError> {
        config.validate().map_err(ExtractionError::Config)?;

        Ok(Self {
            detector,
            docx: DocxDecoder::new(&config),
            plain: PlainTextDecoder,
        })
    }

    /// The format this extractor would use for `document`
    pub fn detect_format(&self, document: &Document) -> DocumentFormat {
        self.detector.detect(document)
    }

    /// Decode `document` into plain text
    pub fn extract(&self, document: &Document) -> Result<String, ExtractionError> {
        let format = self.detect_format(document);

        debug!(
            "Extracting '{}' as {} ({} bytes)",
            document.filename,
            format,
            document.len()
        );

        let result = self.decoder_for(format).decode(document);

        match &result {
            Ok(text) => debug!("Extracted {} chars from '{}'", text.len(), document.filename),
            Err(e) => warn!("Extraction failed: {}", e),
        }

        result
    }

    fn decoder_for(&self, format: DocumentFormat) -> &dyn FormatDecoder {
        match format {
            DocumentFormat::Docx => &self.docx,
            DocumentFormat::PlainText => &self.plain,
        }
    }
}

impl<D: FormatDetector> TextExtractor for DocumentExtractor<D> {
    type Error = ExtractionError;

    fn extract_text(&self, document: &Document) -> Result<String, Self::Error> {
        self.extract(document)
    }
}
