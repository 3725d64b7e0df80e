//! Error types for document extraction

use thiserror::Error;

/// Errors that can occur while turning an uploaded document into text
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The declared media type is neither DOCX nor PDF
    #[error("Unsupported file type '{0}'")]
    UnsupportedType(String),

    /// The document is malformed or unreadable
    #[error("Failed to parse the document: {0}")]
    Malformed(String),
}
