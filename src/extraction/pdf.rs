use super::types::ExtractError;
use std::path::Path;

/// Extract the full text of a PDF document.
///
/// `pdf-extract` walks every page and separates them with form feeds; the
/// result is trimmed so empty documents come back as an empty string.
pub fn extract_pdf(path: &Path) -> Result<String, ExtractError> {
    let text = pdf_extract::extract_text(path)?;
    Ok(text.trim().to_string())
}
