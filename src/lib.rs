//! # Smart Playlist
//!
//! Decoder for declarative smart playlist definition files (`.dspl`).
//!
//! A smart playlist is described by rules rather than a track list:
//!
//! ```xml
//! <smartplaylist>
//!   <name>Loud Rock</name>
//!   <match>all</match>
//!   <order>random</order>
//!   <limit type="50"/>
//!   <rule field="genre" operator="is">Rock</rule>
//! </smartplaylist>
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use smartplaylist::SmartPlaylistDecoder;
//!
//! let result = SmartPlaylistDecoder::new().decode("playlists/rock.dspl");
//! if result.success {
//!     for rule in &result.rules {
//!         println!("{} {} {}", rule.field(), rule.operator(), rule.value());
//!     }
//! }
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Rule and limit value types
pub mod types;

/// Smart playlist decoder
pub mod decode;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use decode::{DecodeResult, DecoderConfig, SmartPlaylist, SmartPlaylistDecoder};
pub use error::{Error, Result};
pub use types::{Limit, LimitType, Rule};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
