//! Decoder types
//!
//! Configuration, the decoded payload, and the flag-based result aggregate.

use crate::error::Result;
use crate::types::{Limit, Rule};
use serde::{Deserialize, Serialize};

/// File extension identifying the smart playlist format
pub const DSPL_EXTENSION: &str = ".dspl";

/// Root element of a smart playlist document
pub const ROOT_ELEMENT: &str = "smartplaylist";

// ============================================================================
// Decoder Config
// ============================================================================

/// Configuration for the smart playlist decoder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Expected file extension, including the leading dot
    pub extension: String,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            extension: DSPL_EXTENSION.to_string(),
        }
    }
}

impl DecoderConfig {
    /// Create the default config (`.dspl`)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the expected extension. A missing leading dot is added.
    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        let extension = extension.into();
        self.extension = if extension.starts_with('.') {
            extension
        } else {
            format!(".{extension}")
        };
        self
    }
}

// ============================================================================
// Smart Playlist
// ============================================================================

/// A successfully decoded smart playlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmartPlaylist {
    pub name: String,
    /// Raw match mode text ("all"/"any"), not interpreted
    #[serde(rename = "match")]
    pub match_mode: String,
    pub order: String,
    pub limit: Limit,
    /// Rules in document order; never empty
    pub rules: Vec<Rule>,
}

// ============================================================================
// Decode Result
// ============================================================================

/// Outcome of [`SmartPlaylistDecoder::decode`](super::SmartPlaylistDecoder::decode)
///
/// On failure every field except `success` and `error` holds its default:
/// values parsed before the failure point are not carried over.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DecodeResult {
    pub success: bool,
    pub playlist_name: String,
    #[serde(rename = "match")]
    pub match_mode: String,
    pub order: String,
    pub limit: Limit,
    pub rules: Vec<Rule>,
    /// Diagnostic for a failed decode; `None` on success or extension mismatch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DecodeResult {
    /// Create a failed result carrying a diagnostic
    pub fn failed(reason: impl Into<String>) -> Self {
        Self {
            error: Some(reason.into()),
            ..Default::default()
        }
    }

    /// Collapse an explicit outcome into the flag-based aggregate
    pub fn from_outcome(outcome: Result<SmartPlaylist>) -> Self {
        match outcome {
            Ok(playlist) => playlist.into(),
            Err(e) if e.is_extension_mismatch() => Self::default(),
            Err(e) => Self::failed(e.to_string()),
        }
    }
}

impl From<SmartPlaylist> for DecodeResult {
    fn from(playlist: SmartPlaylist) -> Self {
        Self {
            success: true,
            playlist_name: playlist.name,
            match_mode: playlist.match_mode,
            order: playlist.order,
            limit: playlist.limit,
            rules: playlist.rules,
            error: None,
        }
    }
}
