//! Environment dump parser.
//!
//! Turns the text printed by `env`, `printenv` or `env -0` into an ordered
//! [`Env`]. Parsing is total: every input yields a snapshot, malformed
//! records are folded into best-effort name/value pairs.

use crate::errors::{EnvDiffError, Result};
use crate::model::{Env, Var};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The platform's path-list separator (`;` on Windows, `:` elsewhere)
pub const DEFAULT_PATH_LIST_SEPARATOR: char = if cfg!(windows) { ';' } else { ':' };

/// How records are delimited in a dump
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordSeparator {
    /// NUL if the text contains one anywhere, newline otherwise
    #[default]
    Auto,
    Newline,
    Nul,
}

impl RecordSeparator {
    /// Resolve to the concrete delimiter for `text`.
    pub fn resolve(self, text: &str) -> char {
        match self {
            RecordSeparator::Auto if text.contains('\0') => '\0',
            RecordSeparator::Auto | RecordSeparator::Newline => '\n',
            RecordSeparator::Nul => '\0',
        }
    }
}

impl FromStr for RecordSeparator {
    type Err = EnvDiffError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(RecordSeparator::Auto),
            "newline" | "nl" => Ok(RecordSeparator::Newline),
            "nul" | "null" => Ok(RecordSeparator::Nul),
            _ => Err(EnvDiffError::ConfigParse {
                message: format!(
                    "unknown record separator '{}' (expected auto, newline or nul)",
                    s
                ),
            }),
        }
    }
}

/// Options controlling how a dump is split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParseOptions {
    /// Delimiter between segments of a list-valued variable
    pub path_list_separator: char,
    /// Delimiter between records
    pub record_separator: RecordSeparator,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            path_list_separator: DEFAULT_PATH_LIST_SEPARATOR,
            record_separator: RecordSeparator::Auto,
        }
    }
}

impl ParseOptions {
    /// Options with a custom path-list separator and auto-detected records
    ///
    /// # Errors
    ///
    /// Returns [`EnvDiffError::InvalidSeparator`] if the separator collides
    /// with record or name splitting.
    pub fn with_separator(path_list_separator: char) -> Result<Self> {
        let options = Self {
            path_list_separator,
            ..Self::default()
        };
        options.validate()?;
        Ok(options)
    }

    /// Check that the path-list separator can be used unambiguously.
    ///
    /// # Errors
    ///
    /// Returns [`EnvDiffError::InvalidSeparator`] for `=`, newline or NUL.
    pub fn validate(&self) -> Result<()> {
        let reason = match self.path_list_separator {
            '=' => "'=' separates names from values",
            '\n' | '\0' => "newline and NUL separate records",
            _ => return Ok(()),
        };
        Err(EnvDiffError::InvalidSeparator {
            separator: self.path_list_separator,
            reason: reason.to_string(),
        })
    }
}

/// Parse a dump using the platform defaults.
pub fn parse(text: &str) -> Env {
    parse_with(text, &ParseOptions::default())
}

/// Parse a dump with explicit options.
///
/// Each record is split on its first `=`; a record without one becomes a
/// variable with a single empty segment. Records with an empty name are
/// skipped, which also drops the blank records left by trailing separators.
pub fn parse_with(text: &str, options: &ParseOptions) -> Env {
    let record_separator = options.record_separator.resolve(text);
    let mut env = Env::new();
    let mut skipped = 0usize;

    for record in text.split(record_separator) {
        let (name, rest) = record.split_once('=').unwrap_or((record, ""));
        if name.is_empty() {
            skipped += 1;
            continue;
        }
        let segments = rest
            .split(options.path_list_separator)
            .map(str::to_string)
            .collect();
        env.push(Var::from_parts(name.to_string(), Some(segments)));
    }

    tracing::debug!(
        record_count = env.len(),
        skipped,
        nul_delimited = record_separator == '\0',
        "parsed environment dump"
    );
    env
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colon() -> ParseOptions {
        ParseOptions {
            path_list_separator: ':',
            record_separator: RecordSeparator::Auto,
        }
    }

    #[test]
    fn test_resolve_auto_prefers_nul() {
        assert_eq!(RecordSeparator::Auto.resolve("A=1\nB=2"), '\n');
        assert_eq!(RecordSeparator::Auto.resolve("A=1\0B=2"), '\0');
        assert_eq!(RecordSeparator::Newline.resolve("A=1\0B=2"), '\n');
        assert_eq!(RecordSeparator::Nul.resolve("A=1\nB=2"), '\0');
    }

    #[test]
    fn test_record_without_equals_has_empty_value() {
        let env = parse_with("TERM", &colon());
        assert_eq!(env.len(), 1);
        assert_eq!(env.vars()[0].name(), "TERM");
        assert_eq!(env.vars()[0].value(), Some(&[String::new()][..]));
    }

    #[test]
    fn test_only_first_equals_splits() {
        let env = parse_with("LS_COLORS=rs=0:di=01;34", &colon());
        assert_eq!(
            env.vars()[0].value(),
            Some(&["rs=0".to_string(), "di=01;34".to_string()][..])
        );
    }

    #[test]
    fn test_empty_name_is_dropped() {
        let env = parse_with("=orphan\nA=1", &colon());
        assert_eq!(env.len(), 1);
        assert_eq!(env.vars()[0].name(), "A");
    }

    #[test]
    fn test_separator_validation() {
        assert!(ParseOptions::with_separator(';').is_ok());
        assert!(matches!(
            ParseOptions::with_separator('='),
            Err(EnvDiffError::InvalidSeparator { separator: '=', .. })
        ));
        assert!(ParseOptions::with_separator('\0').is_err());
        assert!(ParseOptions::with_separator('\n').is_err());
    }

    #[test]
    fn test_record_separator_from_str() {
        assert_eq!("AUTO".parse::<RecordSeparator>(), Ok(RecordSeparator::Auto));
        assert_eq!("nul".parse::<RecordSeparator>(), Ok(RecordSeparator::Nul));
        assert_eq!(
            "newline".parse::<RecordSeparator>(),
            Ok(RecordSeparator::Newline)
        );
        assert!("tab".parse::<RecordSeparator>().is_err());
    }
}
