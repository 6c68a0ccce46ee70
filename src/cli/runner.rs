//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::decode::{DecodeResult, DecoderConfig, SmartPlaylistDecoder};
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// CLI runner
pub struct Runner {
    cli: Cli,
    decoder: SmartPlaylistDecoder,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        let config = DecoderConfig::new().with_extension(cli.extension.clone());
        Self {
            cli,
            decoder: SmartPlaylistDecoder::with_config(config),
        }
    }

    /// Run the CLI command
    pub fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Decode { files } => self.decode(files),
            Commands::Validate { files } => self.validate(files),
        }
    }

    /// Decode each file and print its result
    fn decode(&self, files: &[PathBuf]) -> Result<()> {
        let mut failed = 0;

        for path in files {
            let result = self.decoder.decode(path);
            if !result.success {
                failed += 1;
            }
            println!("{}", self.render(path, &result)?);
        }

        check_failures(failed, files.len())
    }

    /// Report OK/FAIL per file
    fn validate(&self, files: &[PathBuf]) -> Result<()> {
        let mut failed = 0;

        for path in files {
            match self.decoder.try_decode(path) {
                Ok(_) => println!("OK {}", path.display()),
                Err(e) => {
                    failed += 1;
                    println!("FAIL {}: {e}", path.display());
                }
            }
        }

        check_failures(failed, files.len())
    }

    fn render(&self, path: &Path, result: &DecodeResult) -> Result<String> {
        match self.cli.format {
            OutputFormat::Json => {
                serde_json::to_string(result).map_err(|e| Error::Other(e.to_string()))
            }
            OutputFormat::Pretty => Ok(render_pretty(path, result)),
        }
    }
}

fn check_failures(failed: usize, total: usize) -> Result<()> {
    if failed == 0 {
        Ok(())
    } else {
        Err(Error::Other(format!(
            "{failed} of {total} playlist(s) failed to decode"
        )))
    }
}

/// Human-readable rendering of a decode result
fn render_pretty(path: &Path, result: &DecodeResult) -> String {
    let mut lines = vec![path.display().to_string()];

    if !result.success {
        let reason = result.error.as_deref().unwrap_or("unsupported file extension");
        lines.push(format!("  failed: {reason}"));
        return lines.join("\n");
    }

    lines.push(format!("  name:  {}", result.playlist_name));
    lines.push(format!("  match: {}", result.match_mode));
    lines.push(format!("  order: {}", result.order));
    lines.push(format!("  limit: {} {}", result.limit.value(), result.limit));
    lines.push("  rules:".to_string());
    lines.extend(result.rules.iter().map(|rule| {
        format!("    {} {} {:?}", rule.field(), rule.operator(), rule.value())
    }));

    lines.join("\n")
}
