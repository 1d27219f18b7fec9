//! Snapshot comparison between two branches
//!
//! The diff engine compares the stored snapshots of two commits and reports
//! three file sets: `added` (present in the second snapshot only), `removed`
//! (present in the first only), and `modified` (present in both with
//! differing raw byte content). The sets are plain set differences with no
//! rename detection; callers must not depend on element order.

use std::collections::HashMap;

/// A snapshot's files, keyed by name
pub type Snapshot = HashMap<String, Vec<u8>>;

/// Result of comparing two branch snapshots
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BranchDiff {
    /// Files present in the second snapshot but not the first
    pub added: Vec<String>,
    /// Files present in the first snapshot but not the second
    pub removed: Vec<String>,
    /// Files present in both snapshots with differing content
    pub modified: Vec<String>,
}

impl BranchDiff {
    /// Compare two snapshots
    ///
    /// An unborn branch contributes the empty snapshot, so diffing against
    /// it reports every file on the other side as added or removed.
    pub fn between(first: &Snapshot, second: &Snapshot) -> Self {
        let added = second
            .keys()
            .filter(|name| !first.contains_key(*name))
            .cloned()
            .collect();

        let removed = first
            .keys()
            .filter(|name| !second.contains_key(*name))
            .cloned()
            .collect();

        let modified = first
            .iter()
            .filter_map(|(name, content)| match second.get(name) {
                Some(other) if other != content => Some(name.clone()),
                _ => None,
            })
            .collect();

        BranchDiff {
            added,
            removed,
            modified,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.modified.is_empty()
    }
}
