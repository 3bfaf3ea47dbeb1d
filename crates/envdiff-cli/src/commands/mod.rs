//! Subcommands and the input handling they share

pub mod diff;
pub mod parse;

use clap::Args;
use envdiff_core::{EnvDiffConfig, EnvDiffError, ParseOptions, RecordSeparator};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Path argument meaning "read standard input"
pub const STDIN_PATH: &str = "-";

/// Flags controlling how dumps are split, shared by every subcommand
#[derive(Debug, Args)]
pub struct ParseFlags {
    /// Path-list separator (default ':' or ';' on Windows)
    #[arg(short, long, value_name = "CHAR")]
    pub separator: Option<char>,

    /// Record separator: auto, newline or nul
    #[arg(long, value_name = "MODE")]
    pub record_separator: Option<RecordSeparator>,

    /// Configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl ParseFlags {
    /// Resolve options from the config file, then apply flag overrides.
    ///
    /// # Errors
    ///
    /// Config load failures, or a separator rejected by validation.
    pub fn resolve(&self) -> Result<ParseOptions, EnvDiffError> {
        let mut options = match &self.config {
            Some(path) => EnvDiffConfig::load(path)?.parse,
            None => ParseOptions::default(),
        };
        if let Some(separator) = self.separator {
            options.path_list_separator = separator;
        }
        if let Some(record_separator) = self.record_separator {
            options.record_separator = record_separator;
        }
        options.validate()?;
        Ok(options)
    }
}

pub fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == STDIN_PATH
}

/// Read a dump from a file, or from stdin for `-`.
///
/// Invalid UTF-8 is replaced rather than rejected.
///
/// # Errors
///
/// `ReadInput` if the file or stdin cannot be read.
pub fn read_dump(path: &Path) -> Result<String, EnvDiffError> {
    let read_error = |e: std::io::Error| EnvDiffError::ReadInput {
        path: path.display().to_string(),
        message: e.to_string(),
    };

    let bytes = if is_stdin(path) {
        let mut buf = Vec::new();
        std::io::stdin().read_to_end(&mut buf).map_err(read_error)?;
        buf
    } else {
        std::fs::read(path).map_err(read_error)?
    };

    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read dump");
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Elapsed milliseconds since `start`
pub fn elapsed_ms(start: std::time::Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}
