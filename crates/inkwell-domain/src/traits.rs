//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and the crates
//! that implement format decoding, text analysis, and time.

use crate::{Document, LinguisticProfile};
use chrono::{DateTime, Utc};

/// Trait for turning raw documents into plain text
///
/// Implemented by `inkwell-extractor`
pub trait TextExtractor {
    /// Error type for extraction failures
    type Error;

    /// Decode the document's bytes into plain text.
    ///
    /// Implementations must fail atomically: either the full text is
    /// returned or an error is, never a partial result.
    fn extract_text(&self, document: &Document) -> Result<String, Self::Error>;
}

/// Trait for the model-backed portion of a baseline
///
/// Implemented by `inkwell-baseline`. Replacing the implementation must not
/// change the shape of [`Baseline`](crate::Baseline).
pub trait LinguisticAnalyzer {
    /// Analyze text. Must accept any input, including the empty string.
    fn analyze(&self, text: &str) -> LinguisticProfile;
}

/// Source of the current time for timestamped records
pub trait Clock {
    /// Current UTC time
    fn now(&self) -> DateTime<Utc>;
}

impl<T: TextExtractor + ?Sized> TextExtractor for &T {
    type Error = T::Error;

    fn extract_text(&self, document: &Document) -> Result<String, Self::Error> {
        (**self).extract_text(document)
    }
}

impl<T: LinguisticAnalyzer + ?Sized> LinguisticAnalyzer for Box<T> {
    fn analyze(&self, text: &str) -> LinguisticProfile {
        (**self).analyze(text)
    }
}

impl<T: Clock + ?Sized> Clock for Box<T> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}
