//! Briefdeck Document Extraction
//!
//! Converts an uploaded binary stream of a declared media type into plain
//! text, or a typed failure. Supports DOCX (Office Open XML wordprocessing)
//! and PDF; anything else is rejected as unsupported.
//!
//! Parsing faults never propagate as panics: every internal failure surfaces
//! as [`ExtractError::Malformed`].

#![warn(missing_docs)]

mod docx;
mod error;
mod pdf;

pub use error::ExtractError;

use std::path::Path;
use tracing::debug;

/// Canonical DOCX media type.
pub const MEDIA_TYPE_DOCX: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Canonical PDF media type.
pub const MEDIA_TYPE_PDF: &str = "application/pdf";

/// Extract text from document bytes with a declared media type.
///
/// DOCX is recognized by any `wordprocessingml` media type, PDF by
/// `application/pdf`. The extracted text is trimmed of surrounding
/// whitespace.
pub fn extract(bytes: &[u8], media_type: &str) -> Result<String, ExtractError> {
    if media_type.contains("wordprocessingml") {
        debug!(len = bytes.len(), "extracting DOCX");
        docx::extract_docx(bytes)
    } else if media_type == MEDIA_TYPE_PDF {
        debug!(len = bytes.len(), "extracting PDF");
        pdf::extract_pdf(bytes)
    } else {
        Err(ExtractError::UnsupportedType(media_type.to_string()))
    }
}

/// Extract text, falling back to the filename extension when the declared
/// media type is generic.
///
/// Browsers sometimes upload with `application/octet-stream`; a trusted
/// `.pdf`/`.docx` extension then selects the parser.
pub fn extract_named(
    bytes: &[u8],
    media_type: &str,
    filename: &str,
) -> Result<String, ExtractError> {
    let effective = if media_type.is_empty() || media_type == "application/octet-stream" {
        media_type_for_path(filename).unwrap_or(media_type)
    } else {
        media_type
    };

    extract(bytes, effective)
}

/// Map a `.pdf`/`.docx` filename to its canonical media type.
pub fn media_type_for_path(path: impl AsRef<Path>) -> Option<&'static str> {
    match path
        .as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("pdf") => Some(MEDIA_TYPE_PDF),
        Some("docx") => Some(MEDIA_TYPE_DOCX),
        _ => None,
    }
}
