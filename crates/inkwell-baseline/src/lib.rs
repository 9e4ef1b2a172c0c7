//! Inkwell Baseline
//!
//! Computes the linguistic baseline of a writer's document.
//!
//! # Architecture
//!
//! ```text
//! Document → TextExtractor → text → BaselineComputer → Baseline
//!                                     ├── TextStatistics    (avgSentenceLength)
//!                                     ├── LinguisticAnalyzer (richness, voice, keywords)
//!                                     └── Clock              (timestamp)
//! ```
//!
//! The analyzer fields are placeholders today ([`PlaceholderAnalyzer`]);
//! a real model plugs in through [`BaselineComputer::with_analyzer`].
//!
//! # Example Usage
//!
//! ```
//! use inkwell_baseline::BaselineComputer;
//!
//! let computer = BaselineComputer::new();
//! let baseline = computer.compute_baseline("One two three. Four five.");
//! assert_eq!(baseline.avg_sentence_length, 3);
//! ```

#![warn(missing_docs)]

mod analyzer;
mod clock;
mod computer;
mod pipeline;
mod statistics;

pub use analyzer::{
    PlaceholderAnalyzer, PLACEHOLDER_PASSIVE_VOICE_FREQUENCY, PLACEHOLDER_TOP_KEYWORDS,
    PLACEHOLDER_VOCABULARY_RICHNESS,
};
pub use clock::{FixedClock, SystemClock};
pub use computer::BaselineComputer;
pub use pipeline::BaselinePipeline;
pub use statistics::TextStatistics;
