//! Baseline command implementation.

use super::read_document;
use crate::cli::FileArgs;
use crate::error::Result;
use crate::output::Formatter;
use inkwell_baseline::BaselinePipeline;
use inkwell_extractor::DocumentExtractor;

/// Execute the baseline command.
pub fn execute_baseline(
    args: &FileArgs,
    pipeline: &BaselinePipeline<DocumentExtractor>,
    formatter: &Formatter,
) -> Result<String> {
    let document = read_document(&args.file)?;
    let baseline = pipeline.process(&document)?;

    formatter.format_baseline(&baseline)
}
