//! Renderers for edit scripts and snapshots
//!
//! Back-references (`$NAME` segments) are only given shell or Dockerfile
//! meaning by the `shell` and `docker` formats. `plain` prints them as-is.

use clap::ValueEnum;
use envdiff_core::model::{Env, Var};
use envdiff_core::EnvDiffError;
use std::fmt::Write;

/// Output formats for `envdiff diff`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScriptFormat {
    /// `unset NAME` and `NAME=value` lines
    Plain,
    /// POSIX shell `unset` / `export` commands
    Shell,
    /// A Dockerfile `ENV` instruction
    Docker,
    /// The edit script as JSON
    Json,
}

/// Output formats for `envdiff parse`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SnapshotFormat {
    Plain,
    Json,
}

/// Render an edit script.
///
/// # Errors
///
/// `Unrenderable` if a name or value cannot be expressed in a `shell` or
/// `docker` script, `Serialization` if JSON encoding fails.
pub fn render_script(
    script: &Env,
    format: ScriptFormat,
    separator: char,
) -> Result<String, EnvDiffError> {
    match format {
        ScriptFormat::Plain => Ok(render_plain(script, separator)),
        ScriptFormat::Shell => render_shell(script, separator),
        ScriptFormat::Docker => render_docker(script, separator),
        ScriptFormat::Json => render_json(script),
    }
}

/// Render a parsed snapshot.
///
/// # Errors
///
/// `Serialization` if JSON encoding fails.
pub fn render_snapshot(
    env: &Env,
    format: SnapshotFormat,
    separator: char,
) -> Result<String, EnvDiffError> {
    match format {
        SnapshotFormat::Plain => Ok(render_plain(env, separator)),
        SnapshotFormat::Json => render_json(env),
    }
}

fn join(segments: &[String], separator: char) -> String {
    segments.join(&separator.to_string())
}

fn render_plain(env: &Env, separator: char) -> String {
    let mut out = String::new();
    for var in env {
        match var.value() {
            None => writeln!(out, "unset {}", var.name()),
            Some(segments) => writeln!(out, "{}={}", var.name(), join(segments, separator)),
        }
        .ok();
    }
    out
}

/// True for names accepted unquoted by both a POSIX shell and a Dockerfile:
/// `[A-Za-z_][A-Za-z0-9_]*`
fn is_portable_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c == '_' || c.is_ascii_alphabetic())
        && chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}

fn unrenderable(var: &Var, format: ScriptFormat, reason: &str) -> EnvDiffError {
    EnvDiffError::Unrenderable {
        name: var.name().to_string(),
        format: format!("{:?}", format).to_lowercase(),
        reason: reason.to_string(),
    }
}

fn check_name(var: &Var, format: ScriptFormat) -> Result<(), EnvDiffError> {
    if is_portable_name(var.name()) {
        Ok(())
    } else {
        Err(unrenderable(var, format, "not a portable identifier"))
    }
}

/// Quote a string for a POSIX shell.
fn shell_escape(s: &str) -> String {
    format!("'{}'", s.replace('\'', "'\\''"))
}

/// A value as a shell word: literal runs single-quoted, back-references
/// expanded from the variable's current value.
fn shell_word(var: &Var, segments: &[String], separator: char) -> String {
    let mut word = String::new();
    let mut literal = String::new();

    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            literal.push(separator);
        }
        if var.is_back_reference(segment) {
            if !literal.is_empty() {
                word.push_str(&shell_escape(&literal));
                literal.clear();
            }
            word.push_str(&format!("\"${{{}}}\"", var.name()));
        } else {
            literal.push_str(segment);
        }
    }
    if !literal.is_empty() || word.is_empty() {
        word.push_str(&shell_escape(&literal));
    }
    word
}

fn render_shell(script: &Env, separator: char) -> Result<String, EnvDiffError> {
    let mut out = String::new();
    for var in script {
        check_name(var, ScriptFormat::Shell)?;
        match var.value() {
            None => writeln!(out, "unset {}", var.name()),
            Some(segments) => writeln!(
                out,
                "export {}={}",
                var.name(),
                shell_word(var, segments, separator)
            ),
        }
        .ok();
    }
    Ok(out)
}

fn push_docker_literal(value: &mut String, text: &str) {
    for c in text.chars() {
        if matches!(c, '"' | '\\' | '$') {
            value.push('\\');
        }
        value.push(c);
    }
}

/// A value as a double-quoted Dockerfile string.
///
/// Line breaks would end the instruction, so values containing one are
/// rejected.
fn docker_value(var: &Var, segments: &[String], separator: char) -> Result<String, EnvDiffError> {
    if segments.iter().any(|s| s.contains(['\n', '\r'])) {
        return Err(unrenderable(var, ScriptFormat::Docker, "value contains a line break"));
    }

    let mut value = String::from("\"");
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            push_docker_literal(&mut value, separator.encode_utf8(&mut [0; 4]));
        }
        if var.is_back_reference(segment) {
            value.push_str(&format!("${{{}}}", var.name()));
        } else {
            push_docker_literal(&mut value, segment);
        }
    }
    value.push('"');
    Ok(value)
}

/// Unsets have no `ENV` equivalent and are kept as comments.
fn render_docker(script: &Env, separator: char) -> Result<String, EnvDiffError> {
    let mut out = String::new();
    let mut assignments = Vec::new();
    for var in script {
        check_name(var, ScriptFormat::Docker)?;
        match var.value() {
            None => {
                writeln!(out, "# unset {}", var.name()).ok();
            }
            Some(segments) => assignments.push(format!(
                "{}={}",
                var.name(),
                docker_value(var, segments, separator)?
            )),
        }
    }

    if !assignments.is_empty() {
        writeln!(out, "ENV {}", assignments.join(" \\\n    ")).ok();
    }
    Ok(out)
}

fn render_json(env: &Env) -> Result<String, EnvDiffError> {
    let mut json = serde_json::to_string_pretty(env).map_err(|e| EnvDiffError::Serialization {
        message: e.to_string(),
    })?;
    json.push('\n');
    Ok(json)
}
