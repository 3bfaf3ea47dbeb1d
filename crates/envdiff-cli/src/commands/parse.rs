//! Parse command
//!
//! Usage: envdiff parse <FILE> [--format plain|json]

use super::{elapsed_ms, read_dump, ParseFlags};
use crate::render::{render_snapshot, SnapshotFormat};
use clap::Args;
use envdiff_core::{log_op_end, log_op_error, log_op_start};
use envdiff_core::{parse_with, EnvDiffError};
use std::path::PathBuf;
use std::time::Instant;

const OP: &str = "parse";

#[derive(Debug, Args)]
pub struct ParseArgs {
    /// Dump to parse (`-` for stdin)
    pub file: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = SnapshotFormat::Plain)]
    pub format: SnapshotFormat,

    #[command(flatten)]
    pub parse: ParseFlags,
}

/// Execute parse command
///
/// # Errors
///
/// Any input, config or rendering failure, already logged.
pub fn execute(args: ParseArgs) -> Result<(), Box<dyn std::error::Error>> {
    let start = Instant::now();
    log_op_start!(OP, path = %args.file.display());

    match run(&args) {
        Ok((output, record_count)) => {
            log_op_end!(OP, duration_ms = elapsed_ms(start), record_count);
            print!("{}", output);
            Ok(())
        }
        Err(e) => {
            log_op_error!(OP, e.clone(), duration_ms = elapsed_ms(start));
            Err(e.into())
        }
    }
}

fn run(args: &ParseArgs) -> Result<(String, usize), EnvDiffError> {
    let options = args.parse.resolve()?;
    let env = parse_with(&read_dump(&args.file)?, &options);
    let output = render_snapshot(&env, args.format, options.path_list_separator)?;
    Ok((output, env.len()))
}
