//! Diff computation engine.
//!
//! The entry point is [`diff`], which accepts two snapshots and produces an
//! [`EditScript`].

use crate::diff::compaction::compact;
use crate::model::{EditScript, Env, Var};
use envdiff_core_types::Sensitive;
use std::collections::{HashMap, HashSet};

/// Map each name to its value, last occurrence winning.
///
/// Built per call and dropped with it; snapshots never carry an index.
fn lookup(env: &Env) -> HashMap<&str, Option<&[String]>> {
    env.iter().map(|v| (v.name(), v.value())).collect()
}

/// Compute the edit script turning `old` into `new`.
///
/// 1. Every record of `old` whose name appears nowhere in `new` becomes an
///    unset, in `old`'s order. This is the only place unsets are produced.
/// 2. Every record of `new` is compared with the same-named value in `old`.
///    Identical segment lists are skipped; anything else is emitted, compacted
///    against the old value when one exists.
///
/// Pure and total: empty snapshots, and identical snapshots without
/// duplicate names, yield an empty script.
pub fn diff(old: &Env, new: &Env) -> EditScript {
    let old_values = lookup(old);
    let new_names: HashSet<&str> = new.iter().map(Var::name).collect();
    let mut script = EditScript::new();

    for var in old {
        if !new_names.contains(var.name()) {
            script.push(Var::from_parts(var.name().to_string(), None));
        }
    }
    let unset_count = script.len();

    for var in new {
        let edit = match (old_values.get(var.name()), var.value()) {
            (Some(previous), current) if *previous == current => continue,
            (Some(Some(previous)), Some(current)) => Var::from_parts(
                var.name().to_string(),
                Some(compact(var.name(), previous, current)),
            ),
            _ => var.clone(),
        };
        tracing::trace!(
            var_name = edit.name(),
            value = ?Sensitive::new(edit.value()),
            "emitting edit"
        );
        script.push(edit);
    }

    tracing::debug!(
        old_count = old.len(),
        new_count = new.len(),
        unset_count,
        set_count = script.len() - unset_count,
        "computed environment diff"
    );
    script
}
