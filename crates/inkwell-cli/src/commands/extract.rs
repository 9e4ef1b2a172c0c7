//! Extract command implementation.

use super::read_document;
use crate::cli::FileArgs;
use crate::error::Result;
use crate::output::Formatter;
use inkwell_extractor::DocumentExtractor;

/// Execute the extract command.
pub fn execute_extract(
    args: &FileArgs,
    extractor: &DocumentExtractor,
    formatter: &Formatter,
) -> Result<String> {
    let document = read_document(&args.file)?;
    let format = extractor.detect_format(&document);
    let text = extractor.extract(&document)?;

    formatter.format_extraction(&document.filename, format, &text)
}
