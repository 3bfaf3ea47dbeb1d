//! envdiff core - environment snapshot parsing and diffing
//!
//! This crate provides:
//! - The environment data model ([`Var`], [`Env`], [`EditScript`]) with a
//!   tri-state value: absent, present-but-empty, present
//! - A total parser for `env` / `printenv` / `env -0` dumps
//! - A diff engine producing a compact edit script, expressing list-valued
//!   changes as prepends/appends relative to `$<name>`
//! - Configuration, error and logging facilities shared with the CLI
//!
//! ```
//! use envdiff_core::{diff, parse_with, ParseOptions};
//!
//! let opts = ParseOptions::with_separator(':').unwrap();
//! let script = diff(
//!     &parse_with("PATH=/sbin", &opts),
//!     &parse_with("PATH=/sbin:/bin", &opts),
//! );
//! assert_eq!(script.vars()[0].value().unwrap(), ["$PATH", "/bin"]);
//! ```

pub mod config;
pub mod diff;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod parser;

pub use envdiff_core_types::schema;

// Re-export commonly used types
pub use config::EnvDiffConfig;
pub use diff::{diff, Compaction};
pub use errors::{EnvDiffError, ExError, ExErrorKind, Result};
pub use model::{EditScript, Env, Var};
pub use parser::{parse, parse_with, ParseOptions, RecordSeparator};
