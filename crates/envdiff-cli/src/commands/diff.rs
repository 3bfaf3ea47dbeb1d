//! Diff command
//!
//! Usage: envdiff diff <OLD> <NEW> [--format <FORMAT>] [--separator <CHAR>]

use super::{elapsed_ms, is_stdin, read_dump, ParseFlags};
use crate::render::{render_script, ScriptFormat};
use clap::Args;
use envdiff_core::{log_op_end, log_op_error, log_op_start};
use envdiff_core::{parse_with, EnvDiffError};
use std::path::PathBuf;
use std::time::Instant;

const OP: &str = "diff";

#[derive(Debug, Args)]
pub struct DiffArgs {
    /// Dump of the environment before the change (`-` for stdin)
    pub old: PathBuf,

    /// Dump of the environment after the change (`-` for stdin)
    pub new: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = ScriptFormat::Plain)]
    pub format: ScriptFormat,

    #[command(flatten)]
    pub parse: ParseFlags,
}

/// Execute diff command
///
/// # Errors
///
/// Any input, config or rendering failure, already logged.
pub fn execute(args: DiffArgs) -> Result<(), Box<dyn std::error::Error>> {
    let start = Instant::now();
    log_op_start!(OP, format = ?args.format);

    match run(&args) {
        Ok((output, edit_count)) => {
            log_op_end!(OP, duration_ms = elapsed_ms(start), edit_count);
            print!("{}", output);
            Ok(())
        }
        Err(e) => {
            log_op_error!(OP, e.clone(), duration_ms = elapsed_ms(start));
            Err(e.into())
        }
    }
}

fn run(args: &DiffArgs) -> Result<(String, usize), EnvDiffError> {
    if is_stdin(&args.old) && is_stdin(&args.new) {
        return Err(EnvDiffError::StdinReusedAsInput);
    }
    let options = args.parse.resolve()?;

    let old = parse_with(&read_dump(&args.old)?, &options);
    let new = parse_with(&read_dump(&args.new)?, &options);
    let script = envdiff_core::diff(&old, &new);

    let output = render_script(&script, args.format, options.path_list_separator)?;
    Ok((output, script.len()))
}
