//! DOCX decoding
//!
//! A `.docx` file is a zip archive of WordprocessingML parts. `docx-rs`
//! parses it into a typed tree:
//!
//! ```text
//! Docx.document.children: Vec<DocumentChild>
//!   ├── Paragraph.children: Vec<ParagraphChild>
//!   │     ├── Run.children: Vec<RunChild>
//!   │     │     └── Text | Tab | Break | ...
//!   │     ├── Hyperlink.children: Vec<ParagraphChild>
//!   │     └── Insert.children: Vec<InsertChild>
//!   └── Table.rows → cells → Paragraph | Table
//! ```
//!
//! Each table cell paragraph counts as a paragraph of its own.
//!
//! Only the text leaves are kept; styling, drawings and field codes are
//! discarded.

use crate::config::ExtractorConfig;
use crate::decoder::FormatDecoder;
use crate::error::ExtractionError;
use docx_rs::{
    read_docx, DocumentChild, InsertChild, Paragraph, ParagraphChild, Run, RunChild, Table,
    TableCellContent, TableChild, TableRowChild,
};
use inkwell_domain::Document;
use tracing::debug;

/// Decoder for Office Open XML word-processing documents
#[derive(Debug, Clone)]
pub struct DocxDecoder {
    paragraph_separator: String,
    keep_empty_paragraphs: bool,
}

impl DocxDecoder {
    /// Create a decoder using the paragraph settings from `config`
    pub fn new(config: &ExtractorConfig) -> Self {
        Self {
            paragraph_separator: config.paragraph_separator.clone(),
            keep_empty_paragraphs: config.keep_empty_paragraphs,
        }
    }
}

impl Default for DocxDecoder {
    fn default() -> Self {
        Self::new(&ExtractorConfig::default())
    }
}

impl FormatDecoder for DocxDecoder {
    fn decode(&self, document: &Document) -> Result<String, ExtractionError> {
        let docx = read_docx(&document.bytes).map_err(|e| ExtractionError::Docx {
            filename: document.filename.clone(),
            reason: format!("{:?}", e),
        })?;

        let mut paragraphs: Vec<String> = Vec::new();

        for child in &docx.document.children {
            // Bookmarks, comments and section properties carry no body text
            match child {
                DocumentChild::Paragraph(paragraph) => paragraphs.push(paragraph_text(paragraph)),
                DocumentChild::Table(table) => table_paragraphs(table, &mut paragraphs),
                _ => {}
            }
        }

        if !self.keep_empty_paragraphs {
            paragraphs.retain(|text| !text.trim().is_empty());
        }

        debug!(
            "Decoded {} paragraphs from '{}'",
            paragraphs.len(),
            document.filename
        );

        Ok(paragraphs.join(&self.paragraph_separator))
    }
}

/// Every cell paragraph of `table`, row by row, nested tables inline
fn table_paragraphs(table: &Table, out: &mut Vec<String>) {
    for TableChild::TableRow(row) in &table.rows {
        for TableRowChild::TableCell(cell) in &row.cells {
            for content in &cell.children {
                match content {
                    TableCellContent::Paragraph(paragraph) => out.push(paragraph_text(paragraph)),
                    TableCellContent::Table(nested) => table_paragraphs(nested, out),
                    _ => {}
                }
            }
        }
    }
}

/// Concatenate the text of one paragraph.
///
/// Runs are fragments of the same line, so they are joined with no
/// separator. Hyperlinks and tracked insertions contribute their runs;
/// tracked deletions do not.
fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut text = String::new();
    push_children(&paragraph.children, &mut text);
    text
}

fn push_children(children: &[ParagraphChild], text: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => push_run(run, text),
            ParagraphChild::Hyperlink(link) => push_children(&link.children, text),
            ParagraphChild::Insert(insert) => {
                for inserted in &insert.children {
                    if let InsertChild::Run(run) = inserted {
                        push_run(run, text);
                    }
                }
            }
            _ => {}
        }
    }
}

/// docx-rs hands back run text with XML entities already decoded.
fn push_run(run: &Run, text: &mut String) {
    for child in &run.children {
        match child {
            RunChild::Text(t) => text.push_str(&t.text),
            RunChild::Tab(_) => text.push('\t'),
            RunChild::Break(_) => text.push('\n'),
            _ => {}
        }
    }
}
