//! Document module - an uploaded file awaiting extraction

use std::fmt;

/// A raw uploaded document.
///
/// Documents are ephemeral: one is built per upload, handed to an extractor,
/// and dropped once the text has been pulled out of it.
#[derive(Clone, PartialEq, Eq)]
pub struct Document {
    /// Client-supplied file name, used only for format selection and logging
    pub filename: String,

    /// Raw file content
    pub bytes: Vec<u8>,
}

impl Document {
    /// Create a new document
    ///
    /// # Examples
    ///
    /// ```
    /// use inkwell_domain::Document;
    ///
    /// let doc = Document::new("notes.txt", "hello");
    /// assert_eq!(doc.len(), 5);
    /// ```
    pub fn new(filename: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            filename: filename.into(),
            bytes: bytes.into(),
        }
    }

    /// Lowercased suffix after the last `.` of the file name, if any.
    ///
    /// Directory components are ignored, so `drafts.v2/chapter` has no suffix.
    ///
    /// ```
    /// use inkwell_domain::Document;
    ///
    /// assert_eq!(Document::new("Essay.DOCX", "").extension().as_deref(), Some("docx"));
    /// assert_eq!(Document::new("README", "").extension(), None);
    /// ```
    pub fn extension(&self) -> Option<String> {
        let name = self
            .filename
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(&self.filename);

        match name.rsplit_once('.') {
            Some((_, ext)) if !ext.is_empty() => Some(ext.to_ascii_lowercase()),
            _ => None,
        }
    }

    /// Size of the raw content in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the document has no content
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

// Uploads can be megabytes; keep Debug output to the metadata.
impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("filename", &self.filename)
            .field("len", &self.bytes.len())
            .finish()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn extension_is_never_uppercase(stem in "[a-zA-Z0-9_-]{1,12}", ext in "[a-zA-Z]{1,5}") {
            let doc = Document::new(format!("{}.{}", stem, ext), Vec::new());
            let detected = doc.extension().unwrap();
            prop_assert_eq!(detected, ext.to_ascii_lowercase());
        }

        #[test]
        fn len_matches_bytes(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
            let doc = Document::new("blob.bin", bytes.clone());
            prop_assert_eq!(doc.len(), bytes.len());
            prop_assert_eq!(doc.is_empty(), bytes.is_empty());
        }
    }
}
