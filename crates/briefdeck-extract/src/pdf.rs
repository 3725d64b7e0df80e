//! PDF text extraction via lopdf

use crate::error::ExtractError;
use lopdf::Document;

/// Extract plain text from PDF bytes, all pages in order, trimmed.
pub fn extract_pdf(bytes: &[u8]) -> Result<String, ExtractError> {
    let document = Document::load_mem(bytes)
        .map_err(|e| ExtractError::Malformed(format!("not a valid PDF: {}", e)))?;

    let pages: Vec<u32> = document.get_pages().keys().copied().collect();
    if pages.is_empty() {
        return Ok(String::new());
    }

    let text = document
        .extract_text(&pages)
        .map_err(|e| ExtractError::Malformed(format!("could not extract text: {}", e)))?;

    Ok(text.trim().to_string())
}
