//! Environment data model
//!
//! [`Var`] is a single variable with a tri-state value, [`Env`] an ordered
//! snapshot of them. An edit script shares the snapshot's shape and is
//! exposed as [`EditScript`].

pub mod env;
pub mod var;

pub use env::{EditScript, Env};
pub use var::Var;
