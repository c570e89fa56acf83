use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    /// Determine the document kind from a filename extension (case-insensitive).
    pub fn from_filename(filename: &str) -> Option<Self> {
        let ext = filename.rsplit_once('.')?.1.to_lowercase();
        match ext.as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            _ => None,
        }
    }

    /// Uppercase label used in response metadata ("PDF" / "DOCX").
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pdf => "PDF",
            Self::Docx => "DOCX",
        }
    }
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to extract PDF text: {0}")]
    Pdf(#[from] pdf_extract::OutputError),
    #[error("failed to open DOCX archive: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("failed to parse DOCX document XML: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("DOCX archive is missing word/document.xml")]
    MissingDocumentXml,
}
