//! Per-format decoders

use crate::error::ExtractionError;
use inkwell_domain::Document;

/// Turns one document format into plain text
pub trait FormatDecoder {
    /// Decode the whole document or fail; never return partial text
    fn decode(&self, document: &Document) -> Result<String, ExtractionError>;
}

/// Strict UTF-8 decoder for every non-structured format.
///
/// Bytes are preserved exactly: no BOM stripping, line-ending conversion, or
/// Unicode normalization.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextDecoder;

impl FormatDecoder for PlainTextDecoder {
    fn decode(&self, document: &Document) -> Result<String, ExtractionError> {
        std::str::from_utf8(&document.bytes)
            .map(str::to_owned)
            .map_err(|e| ExtractionError::InvalidUtf8 {
                filename: document.filename.clone(),
                valid_up_to: e.valid_up_to(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_utf8() {
        let doc = Document::new("poem.txt", "Ünïcödé ✍️ text\r\nline two");
        let text = PlainTextDecoder.decode(&doc).unwrap();
        assert_eq!(text, "Ünïcödé ✍️ text\r\nline two");
    }

    #[test]
    fn test_keeps_byte_order_mark() {
        let doc = Document::new("bom.txt", b"\xEF\xBB\xBFhello".to_vec());
        let text = PlainTextDecoder.decode(&doc).unwrap();
        assert_eq!(text.as_bytes(), b"\xEF\xBB\xBFhello");
    }

    #[test]
    fn test_empty_input() {
        let doc = Document::new("empty.txt", Vec::new());
        assert_eq!(PlainTextDecoder.decode(&doc).unwrap(), "");
    }

    #[test]
    fn test_invalid_utf8_reports_offset() {
        let doc = Document::new("latin1.txt", b"caf\xE9".to_vec());
        let err = PlainTextDecoder.decode(&doc).unwrap_err();
        match err {
            ExtractionError::InvalidUtf8 { filename, valid_up_to } => {
                assert_eq!(filename, "latin1.txt");
                assert_eq!(valid_up_to, 3);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
