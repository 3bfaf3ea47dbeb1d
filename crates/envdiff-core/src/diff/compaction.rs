//! Prefix/suffix compaction for list-valued variables.

use crate::model::var::back_reference;
use std::iter;

/// How a changed value is expressed relative to the previous one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compaction {
    /// `added` new segments followed by the whole old value
    Prepend { added: usize },
    /// The whole old value followed by `added` new segments
    Append { added: usize },
    /// No usable overlap; the new value is restated in full
    Replace,
}

/// Decide how `new` relates to `old`.
///
/// Scans split points `k` in `1..=min(new.len(), old.len())` in increasing
/// order and stops at the first hit. At each `k` the suffix test
/// (`new[k..] == old`) runs before the prefix test (`new[..k] == old`).
/// Only "old swallowed whole" is detected: partial overlaps, reordering and
/// removals all yield [`Compaction::Replace`].
pub fn plan_compaction(old: &[String], new: &[String]) -> Compaction {
    let limit = new.len().min(old.len());
    for k in 1..=limit {
        if new[k..] == *old {
            return Compaction::Prepend { added: k };
        }
        if new[..k] == *old {
            return Compaction::Append {
                added: new.len() - k,
            };
        }
    }
    Compaction::Replace
}

/// Express `new` relative to `old`, using `$<name>` for the old value.
pub fn compact(name: &str, old: &[String], new: &[String]) -> Vec<String> {
    let plan = plan_compaction(old, new);
    tracing::trace!(var_name = name, compaction = ?plan, "compacted value");

    match plan {
        Compaction::Prepend { added } => new[..added]
            .iter()
            .cloned()
            .chain(iter::once(back_reference(name)))
            .collect(),
        Compaction::Append { added } => iter::once(back_reference(name))
            .chain(new[new.len() - added..].iter().cloned())
            .collect(),
        Compaction::Replace => new.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segs(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_plan_prepend() {
        let plan = plan_compaction(&segs(&["/sbin", "/bin"]), &segs(&["/a", "/b", "/sbin", "/bin"]));
        assert_eq!(plan, Compaction::Prepend { added: 2 });
    }

    #[test]
    fn test_plan_append() {
        let plan = plan_compaction(&segs(&["/usr/sbin", "/usr/bin"]), &segs(&["/usr/sbin", "/usr/bin", "/sbin"]));
        assert_eq!(plan, Compaction::Append { added: 1 });
    }

    #[test]
    fn test_plan_replace_on_partial_overlap() {
        let plan = plan_compaction(&segs(&["/a", "/b"]), &segs(&["/b", "/c"]));
        assert_eq!(plan, Compaction::Replace);
    }

    #[test]
    fn test_plan_replace_on_removal() {
        let plan = plan_compaction(&segs(&["/a", "/b", "/c"]), &segs(&["/a", "/c"]));
        assert_eq!(plan, Compaction::Replace);
    }

    #[test]
    fn test_plan_replace_on_empty_sides() {
        assert_eq!(plan_compaction(&[], &segs(&["/a"])), Compaction::Replace);
        assert_eq!(plan_compaction(&segs(&["/a"]), &[]), Compaction::Replace);
    }

    #[test]
    fn test_split_point_never_exceeds_shorter_side() {
        // Prepending two segments onto a one-segment value needs k = 2,
        // outside 1..=min(3, 1).
        let plan = plan_compaction(&segs(&["/bin"]), &segs(&["/a", "/b", "/bin"]));
        assert_eq!(plan, Compaction::Replace);
    }

    #[test]
    fn test_suffix_checked_before_prefix() {
        // old = [x], new = [x, x]: at k = 1 both tests match; prepend wins.
        let plan = plan_compaction(&segs(&["x"]), &segs(&["x", "x"]));
        assert_eq!(plan, Compaction::Prepend { added: 1 });
        assert_eq!(compact("V", &segs(&["x"]), &segs(&["x", "x"])), segs(&["x", "$V"]));
    }

    #[test]
    fn test_compact_builds_back_reference() {
        assert_eq!(
            compact("PATH", &segs(&["/bin"]), &segs(&["/sbin", "/bin"])),
            segs(&["/sbin", "$PATH"])
        );
        assert_eq!(
            compact("PATH", &segs(&["/sbin"]), &segs(&["/sbin", "/bin"])),
            segs(&["$PATH", "/bin"])
        );
        assert_eq!(
            compact("PATH", &segs(&["/a"]), &segs(&["/b"])),
            segs(&["/b"])
        );
    }
}
