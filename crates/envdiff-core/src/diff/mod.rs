//! Environment diff engine.
//!
//! Compares two parsed snapshots and produces an [`EditScript`] that turns
//! the old one into the new one.
//!
//! ## Entry point
//!
//! ```
//! use envdiff_core::diff::diff;
//! use envdiff_core::parser::{parse_with, ParseOptions};
//!
//! let opts = ParseOptions::with_separator(':').unwrap();
//! let old = parse_with("PATH=/bin\nTERM=xterm", &opts);
//! let new = parse_with("PATH=/sbin:/bin", &opts);
//!
//! let script = diff(&old, &new);
//! assert!(script.vars()[0].is_unset());
//! assert_eq!(script.vars()[1].value().unwrap(), ["/sbin", "$PATH"]);
//! ```
//!
//! ## Guarantees
//!
//! - **Ordering**: every unset precedes every set. Unsets follow the old
//!   snapshot's order, sets follow the new snapshot's order.
//! - **Suppression**: variables whose segments are identical on both sides
//!   produce no edit.
//! - **Compaction**: a new value that swallows the old value whole, as its
//!   head or as its tail, is expressed relative to `$<name>`.
//!
//! [`EditScript`]: crate::model::EditScript

pub mod compaction;
pub mod engine;

pub use compaction::{compact, plan_compaction, Compaction};
pub use engine::diff;
