//! Extraction Module Tests
//!
//! Validates document kind detection, PDF and DOCX extraction, and
//! WordprocessingML text parsing.

#[cfg(test)]
mod tests {
    use crate::extraction::docx::{extract_docx, parse_document_xml};
    use crate::extraction::pdf::extract_pdf;
    use crate::extraction::types::{DocumentKind, ExtractError};
    use std::io::Write;

    fn docx_bytes(paragraphs: &[&str]) -> Vec<u8> {
        let mut writer = zip::ZipWriter::new(std::io::Cursor::new(Vec::new()));
        let options = zip::write::SimpleFileOptions::default();
        writer.start_file("word/document.xml", options).unwrap();

        let mut xml = String::from(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
             <w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
             <w:body>",
        );
        for p in paragraphs {
            xml.push_str(&format!("<w:p><w:r><w:t>{}</w:t></w:r></w:p>", p));
        }
        xml.push_str("</w:body></w:document>");

        writer.write_all(xml.as_bytes()).unwrap();
        writer.finish().unwrap().into_inner()
    }

    /// Minimal single-page PDF with one text object; xref offsets are
    /// computed while assembling so the file stays well-formed.
    fn pdf_bytes(text: &str) -> Vec<u8> {
        let content = format!("BT /F1 12 Tf 72 720 Td ({}) Tj ET", text);
        let objects = [
            "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
            "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
             /Resources << /Font << /F1 4 0 R >> >> /Contents 5 0 R >>"
                .to_string(),
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
            format!(
                "<< /Length {} >>\nstream\n{}\nendstream",
                content.len(),
                content
            ),
        ];

        let mut pdf = b"%PDF-1.4\n".to_vec();
        let mut offsets = Vec::new();
        for (index, object) in objects.iter().enumerate() {
            offsets.push(pdf.len());
            pdf.extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", index + 1, object).as_bytes());
        }

        let xref_start = pdf.len();
        pdf.extend_from_slice(format!("xref\n0 {}\n", objects.len() + 1).as_bytes());
        pdf.extend_from_slice(b"0000000000 65535 f \n");
        for offset in &offsets {
            pdf.extend_from_slice(format!("{:010} 00000 n \n", offset).as_bytes());
        }
        pdf.extend_from_slice(
            format!(
                "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
                objects.len() + 1,
                xref_start
            )
            .as_bytes(),
        );
        pdf
    }

    // ============================================================
    // DOCUMENT KIND TESTS
    // ============================================================

    #[test]
    fn test_kind_from_filename_pdf() {
        assert_eq!(
            DocumentKind::from_filename("contract.pdf"),
            Some(DocumentKind::Pdf)
        );
    }

    #[test]
    fn test_kind_from_filename_docx() {
        assert_eq!(
            DocumentKind::from_filename("lease.docx"),
            Some(DocumentKind::Docx)
        );
    }

    #[test]
    fn test_kind_from_filename_case_insensitive() {
        assert_eq!(
            DocumentKind::from_filename("Contract.PDF"),
            Some(DocumentKind::Pdf)
        );
        assert_eq!(
            DocumentKind::from_filename("LEASE.DocX"),
            Some(DocumentKind::Docx)
        );
    }

    #[test]
    fn test_kind_from_filename_rejects_other_extensions() {
        assert_eq!(DocumentKind::from_filename("notes.txt"), None);
        assert_eq!(DocumentKind::from_filename("legacy.doc"), None);
        assert_eq!(DocumentKind::from_filename("archive.pdf.zip"), None);
    }

    #[test]
    fn test_kind_from_filename_without_extension() {
        assert_eq!(DocumentKind::from_filename("README"), None);
        assert_eq!(DocumentKind::from_filename(""), None);
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(DocumentKind::Pdf.label(), "PDF");
        assert_eq!(DocumentKind::Docx.label(), "DOCX");
    }

    // ============================================================
    // PDF EXTRACTION TESTS
    // ============================================================

    #[test]
    fn test_extract_pdf_single_text_object() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.pdf");
        std::fs::write(&path, pdf_bytes("Tenant must vacate by March.")).unwrap();

        let text = extract_pdf(&path).unwrap();
        assert!(text.contains("Tenant"), "got {:?}", text);
        assert!(text.contains("vacate"), "got {:?}", text);
        assert!(text.contains("March"), "got {:?}", text);
    }

    #[test]
    fn test_extract_pdf_output_is_trimmed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.pdf");
        std::fs::write(&path, pdf_bytes("Single clause.")).unwrap();

        let text = extract_pdf(&path).unwrap();
        assert_eq!(text, text.trim());
        assert!(!text.is_empty());
    }

    #[test]
    fn test_extract_pdf_garbage_bytes_is_pdf_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.pdf");
        std::fs::write(&path, b"this is definitely not a pdf").unwrap();

        let err = extract_pdf(&path).unwrap_err();
        assert!(matches!(err, ExtractError::Pdf(_)), "got {:?}", err);
    }

    // ============================================================
    // DOCX EXTRACTION TESTS
    // ============================================================

    #[test]
    fn test_extract_docx_single_paragraph() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.docx");
        std::fs::write(&path, docx_bytes(&["The tenant shall pay rent monthly."])).unwrap();

        let text = extract_docx(&path).unwrap();
        assert_eq!(text, "The tenant shall pay rent monthly.");
    }

    #[test]
    fn test_extract_docx_paragraphs_become_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.docx");
        std::fs::write(
            &path,
            docx_bytes(&["First clause.", "Second clause.", "Third clause."]),
        )
        .unwrap();

        let text = extract_docx(&path).unwrap();
        assert_eq!(text, "First clause.\nSecond clause.\nThird clause.");
    }

    #[test]
    fn test_extract_docx_garbage_bytes_is_zip_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.docx");
        std::fs::write(&path, b"this is definitely not a zip archive").unwrap();

        let err = extract_docx(&path).unwrap_err();
        assert!(matches!(err, ExtractError::Zip(_)), "got {:?}", err);
    }

    #[test]
    fn test_extract_docx_missing_document_xml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.docx");

        let mut writer = zip::ZipWriter::new(std::io::Cursor::new(Vec::new()));
        let options = zip::write::SimpleFileOptions::default();
        writer.start_file("word/styles.xml", options).unwrap();
        writer.write_all(b"<w:styles/>").unwrap();
        let bytes = writer.finish().unwrap().into_inner();
        std::fs::write(&path, bytes).unwrap();

        let err = extract_docx(&path).unwrap_err();
        assert!(matches!(err, ExtractError::MissingDocumentXml));
    }

    #[test]
    fn test_extract_docx_missing_file_is_io_error() {
        let err = extract_docx(std::path::Path::new("/nonexistent/nowhere.docx")).unwrap_err();
        assert!(matches!(err, ExtractError::Io(_)));
    }

    // ============================================================
    // WORDPROCESSINGML PARSE TESTS
    // ============================================================

    #[test]
    fn test_parse_splits_text_runs() {
        // A paragraph split across multiple runs must be joined without gaps
        let xml = "<w:document><w:body>\
                   <w:p><w:r><w:t>Hello </w:t></w:r><w:r><w:t>world.</w:t></w:r></w:p>\
                   </w:body></w:document>";
        assert_eq!(parse_document_xml(xml).unwrap(), "Hello world.");
    }

    #[test]
    fn test_parse_ignores_non_text_elements() {
        let xml = "<w:document><w:body>\
                   <w:p><w:pPr><w:jc w:val=\"center\"/></w:pPr>\
                   <w:r><w:t>Centered clause.</w:t></w:r></w:p>\
                   </w:body></w:document>";
        assert_eq!(parse_document_xml(xml).unwrap(), "Centered clause.");
    }

    #[test]
    fn test_parse_line_breaks() {
        let xml = "<w:document><w:body>\
                   <w:p><w:r><w:t>Line one</w:t><w:br/><w:t>line two</w:t></w:r></w:p>\
                   </w:body></w:document>";
        assert_eq!(parse_document_xml(xml).unwrap(), "Line one\nline two");
    }

    #[test]
    fn test_parse_unescapes_entities() {
        let xml = "<w:document><w:body>\
                   <w:p><w:r><w:t>Smith &amp; Jones</w:t></w:r></w:p>\
                   </w:body></w:document>";
        assert_eq!(parse_document_xml(xml).unwrap(), "Smith & Jones");
    }

    #[test]
    fn test_parse_empty_body() {
        let xml = "<w:document><w:body></w:body></w:document>";
        assert_eq!(parse_document_xml(xml).unwrap(), "");
    }
}
