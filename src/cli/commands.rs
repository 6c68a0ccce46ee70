//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Smart playlist decoder CLI
#[derive(Parser, Debug)]
#[command(name = "smartplaylist")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Expected playlist file extension
    #[arg(short, long, global = true, default_value = ".dspl")]
    pub extension: String,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Decode playlist files and print the result
    Decode {
        /// Playlist files
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Check playlist files and report the failure reason for each
    Validate {
        /// Playlist files
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one result per line)
    Json,
    /// Human-readable output
    Pretty,
}
