//! Document Extraction Module
//!
//! The intake layer responsible for turning uploaded documents into plain text.
//!
//! ## Overview
//! Uploaded files arrive as PDF or DOCX. Both formats are handled by dedicated
//! extractors that return the document body as a single string, ready for
//! summarization and loophole scanning.
//!
//! ## Submodules
//! - **`pdf`**: PDF text extraction via the `pdf-extract` crate.
//! - **`docx`**: DOCX text extraction (zip archive + WordprocessingML parse).
//! - **`types`**: Document kinds and the extraction error taxonomy.

pub mod docx;
pub mod pdf;
pub mod types;

use self::types::{DocumentKind, ExtractError};
use std::path::Path;

/// Extract plain text from a document of the given kind.
pub fn extract(path: &Path, kind: DocumentKind) -> Result<String, ExtractError> {
    match kind {
        DocumentKind::Pdf => pdf::extract_pdf(path),
        DocumentKind::Docx => docx::extract_docx(path),
    }
}

#[cfg(test)]
mod tests;
