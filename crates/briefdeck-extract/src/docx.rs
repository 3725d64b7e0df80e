//! DOCX text extraction
//!
//! A .docx file is a zip archive; the body lives in `word/document.xml` as
//! WordprocessingML. Text runs are `<w:t>` elements, paragraphs `<w:p>`.

use crate::error::ExtractError;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Cursor, Read};

/// Extract plain text from DOCX bytes, one line per paragraph, trimmed.
pub fn extract_docx(bytes: &[u8]) -> Result<String, ExtractError> {
    let cursor = Cursor::new(bytes);
    let mut archive = zip::ZipArchive::new(cursor)
        .map_err(|e| ExtractError::Malformed(format!("not a valid zip archive: {}", e)))?;

    let mut document_xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| ExtractError::Malformed(format!("missing word/document.xml: {}", e)))?
        .read_to_string(&mut document_xml)
        .map_err(|e| ExtractError::Malformed(format!("unreadable document part: {}", e)))?;

    extract_paragraphs(&document_xml)
}

/// Walk the WordprocessingML body and collect the text of every run.
fn extract_paragraphs(xml: &str) -> Result<String, ExtractError> {
    let mut reader = Reader::from_str(xml);
    let mut text = String::new();
    let mut in_run_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.name().as_ref() == b"w:t" => in_run_text = true,
            Ok(Event::End(e)) if e.name().as_ref() == b"w:t" => in_run_text = false,
            Ok(Event::Text(t)) if in_run_text => {
                let run = t
                    .unescape()
                    .map_err(|e| ExtractError::Malformed(format!("bad XML text: {}", e)))?;
                text.push_str(&run);
            }
            Ok(Event::End(e)) if e.name().as_ref() == b"w:p" => text.push('\n'),
            Ok(Event::Empty(e)) if e.name().as_ref() == b"w:br" => text.push('\n'),
            Ok(Event::Empty(e)) if e.name().as_ref() == b"w:tab" => text.push('\t'),
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(ExtractError::Malformed(format!("invalid document XML: {}", e)))
            }
        }
    }

    Ok(text.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    fn docx_with_body(body_xml: &str) -> Vec<u8> {
        let document = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
<w:body>{}</w:body>
</w:document>"#,
            body_xml
        );

        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("word/document.xml", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(document.as_bytes()).unwrap();
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn test_extracts_paragraph_text() {
        let bytes = docx_with_body(
            "<w:p><w:r><w:t>Assignment Brief</w:t></w:r></w:p>\
             <w:p><w:r><w:t>Submit a report by </w:t></w:r><w:r><w:t>Friday.</w:t></w:r></w:p>",
        );

        let text = extract_docx(&bytes).unwrap();
        assert_eq!(text, "Assignment Brief\nSubmit a report by Friday.");
    }

    #[test]
    fn test_line_breaks_and_entities() {
        let bytes = docx_with_body(
            "<w:p><w:r><w:t>compare &amp; contrast</w:t><w:br/><w:t>two papers</w:t></w:r></w:p>",
        );

        let text = extract_docx(&bytes).unwrap();
        assert_eq!(text, "compare & contrast\ntwo papers");
    }

    #[test]
    fn test_not_a_zip_is_malformed() {
        let result = extract_docx(b"plainly not a zip archive");
        assert!(matches!(result, Err(ExtractError::Malformed(_))));
    }

    #[test]
    fn test_zip_without_document_part_is_malformed() {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("unrelated.txt", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(b"nothing here").unwrap();
        let bytes = writer.finish().unwrap().into_inner();

        let result = extract_docx(&bytes);
        assert!(matches!(result, Err(ExtractError::Malformed(_))));
    }
}
