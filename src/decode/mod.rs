//! Smart playlist decoder module
//!
//! # Overview
//!
//! Turns a `.dspl` XML document into a [`SmartPlaylist`]. Two surfaces are
//! offered:
//! - [`SmartPlaylistDecoder::decode`] never fails and reports through
//!   [`DecodeResult::success`]
//! - [`SmartPlaylistDecoder::try_decode`] and
//!   [`SmartPlaylistDecoder::decode_str`] return the specific [`Error`](crate::Error)

mod decoder;
mod types;

pub use decoder::SmartPlaylistDecoder;
pub use types::{DecodeResult, DecoderConfig, SmartPlaylist, DSPL_EXTENSION, ROOT_ELEMENT};
