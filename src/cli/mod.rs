//! CLI module
//!
//! Command-line interface for decoding smart playlists.
//!
//! # Commands
//!
//! - `decode` - Decode files and print the results
//! - `validate` - Report whether each file decodes, with the reason if not

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
