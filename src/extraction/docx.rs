use super::types::ExtractError;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use zip::result::ZipError;
use zip::ZipArchive;

const DOCUMENT_XML: &str = "word/document.xml";

/// Extract the full text of a DOCX document.
///
/// A DOCX file is a zip archive; the document body lives in
/// `word/document.xml` as WordprocessingML. Text runs (`w:t`) are
/// concatenated and each paragraph (`w:p`) becomes one line, mirroring how
/// word processors render the file.
pub fn extract_docx(path: &Path) -> Result<String, ExtractError> {
    let file = File::open(path)?;
    let mut archive = ZipArchive::new(file)?;

    let mut xml = String::new();
    match archive.by_name(DOCUMENT_XML) {
        Ok(mut entry) => {
            entry.read_to_string(&mut xml)?;
        }
        Err(ZipError::FileNotFound) => return Err(ExtractError::MissingDocumentXml),
        Err(e) => return Err(e.into()),
    }

    parse_document_xml(&xml)
}

/// Pull paragraph text out of WordprocessingML.
pub(crate) fn parse_document_xml(xml: &str) -> Result<String, ExtractError> {
    let mut reader = Reader::from_str(xml);

    let mut buf = Vec::new();
    let mut paragraphs: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => match e.local_name().as_ref() {
                b"t" => in_text_run = true,
                b"br" => current.push('\n'),
                _ => {}
            },
            Event::Empty(ref e) => {
                if e.local_name().as_ref() == b"br" {
                    current.push('\n');
                }
            }
            Event::Text(e) => {
                if in_text_run {
                    current.push_str(&e.unescape()?);
                }
            }
            Event::End(ref e) => match e.local_name().as_ref() {
                b"t" => in_text_run = false,
                b"p" => paragraphs.push(std::mem::take(&mut current)),
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if !current.is_empty() {
        paragraphs.push(current);
    }

    Ok(paragraphs.join("\n").trim().to_string())
}
