//! Error types for the smart playlist decoder
//!
//! The flag-based [`DecodeResult`](crate::decode::DecodeResult) surface
//! collapses all of these into `success = false`; the `Result`-based entry
//! points return them as-is.

use thiserror::Error;

/// The main error type for smart playlist decoding
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Input Errors
    // ============================================================================
    #[error("Unsupported file extension for '{path}', expected '{expected}'")]
    UnsupportedExtension { path: String, expected: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid {encoding} byte sequence")]
    Encoding { encoding: String },

    // ============================================================================
    // Document Errors
    // ============================================================================
    #[error("XML parsing error: {0}")]
    XmlParse(#[from] roxmltree::Error),

    #[error("Unexpected root element '{found}', expected '{expected}'")]
    UnexpectedRoot { expected: String, found: String },

    #[error("Element '{element}' is missing required attribute '{attribute}'")]
    MissingAttribute { element: String, attribute: String },

    #[error("ruleElements is null or contains no elements")]
    NoRules,

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an unsupported extension error
    pub fn unsupported_extension(path: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::UnsupportedExtension {
            path: path.into(),
            expected: expected.into(),
        }
    }

    /// Create an encoding error
    pub fn encoding(encoding: impl Into<String>) -> Self {
        Self::Encoding {
            encoding: encoding.into(),
        }
    }

    /// Create an unexpected root error
    pub fn unexpected_root(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::UnexpectedRoot {
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Create a missing attribute error
    pub fn missing_attribute(element: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self::MissingAttribute {
            element: element.into(),
            attribute: attribute.into(),
        }
    }

    /// Whether this error was raised before any I/O was attempted
    pub fn is_extension_mismatch(&self) -> bool {
        matches!(self, Error::UnsupportedExtension { .. })
    }
}

/// Result type alias for the decoder
pub type Result<T> = std::result::Result<T, Error>;
