//! Process table snapshots and sibling-set computation

use std::collections::{BTreeSet, HashMap};

use sysinfo::{ProcessRefreshKind, RefreshKind, System};
use tracing::debug;

/// The calling process's own id
pub fn current_process_id() -> u32 {
    std::process::id()
}

/// A point-in-time snapshot of the OS process list, reduced to parentage
///
/// Computed fresh for each session resolution and discarded afterwards.
#[derive(Debug, Clone)]
pub struct ProcessTable {
    parents: HashMap<u32, Option<u32>>,
}

impl ProcessTable {
    /// Snapshot the live process list
    pub fn snapshot() -> Self {
        let sys = System::new_with_specifics(
            RefreshKind::new().with_processes(ProcessRefreshKind::new()),
        );

        let parents = sys
            .processes()
            .iter()
            .map(|(pid, process)| (pid.as_u32(), process.parent().map(|p| p.as_u32())))
            .collect::<HashMap<_, _>>();

        debug!(process_count = parents.len(), "Process table snapshot");

        Self { parents }
    }

    /// Build a table from explicit (pid, parent) records
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = (u32, Option<u32>)>,
    {
        Self {
            parents: records.into_iter().collect(),
        }
    }

    /// The set of processes sharing `pid`'s parent, inclusive of `pid`
    ///
    /// OS audio sessions belong to the immediate process, so a helper child
    /// spawned next to the target (same parent) is treated as part of the
    /// same session family. An unknown pid, or one with no recorded parent,
    /// yields the singleton set of itself.
    pub fn siblings(&self, pid: u32) -> BTreeSet<u32> {
        let mut family = BTreeSet::new();
        family.insert(pid);

        let Some(Some(parent)) = self.parents.get(&pid) else {
            return family;
        };

        for (&candidate, &candidate_parent) in &self.parents {
            if candidate_parent == Some(*parent) {
                family.insert(candidate);
            }
        }

        family
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> ProcessTable {
        // 1 is init; 10 spawned 100, 101, 102; 100 spawned 1000
        ProcessTable::from_records([
            (1, None),
            (10, Some(1)),
            (100, Some(10)),
            (101, Some(10)),
            (102, Some(10)),
            (1000, Some(100)),
        ])
    }

    #[test]
    fn siblings_share_a_parent() {
        let family = table().siblings(100);
        assert_eq!(family, BTreeSet::from([100, 101, 102]));
    }

    #[test]
    fn siblings_include_the_target() {
        assert!(table().siblings(101).contains(&101));
    }

    #[test]
    fn only_child_is_a_singleton() {
        let family = table().siblings(1000);
        assert_eq!(family, BTreeSet::from([1000]));
    }

    #[test]
    fn unknown_pid_is_a_singleton() {
        let family = table().siblings(9999);
        assert_eq!(family, BTreeSet::from([9999]));
    }

    #[test]
    fn parentless_pid_is_a_singleton() {
        // No grouping of orphans under a shared "no parent"
        let family = table().siblings(1);
        assert_eq!(family, BTreeSet::from([1]));
    }

    #[test]
    fn snapshot_contains_self() {
        let table = ProcessTable::snapshot();
        let family = table.siblings(current_process_id());
        assert!(family.contains(&current_process_id()));
    }
}
