use std::collections::BTreeSet;

use log::info;

use crate::{HostId, ValueSet};

/// Tracks which hosts terminated before deciding every agreement.
///
/// A host that stopped early is announced on stdout the first time it is
/// looked up; the tracker remembers who has been announced so the
/// diagnostic appears exactly once per host no matter how many rounds and
/// pairs consult it afterwards.
#[derive(Debug)]
pub struct EarlyStopTracker {
    expected_rounds: usize,
    notified: BTreeSet<HostId>,
}

impl EarlyStopTracker {
    pub fn new(expected_rounds: usize) -> Self {
        Self {
            expected_rounds,
            notified: BTreeSet::new(),
        }
    }

    /// True iff the host decided fewer rounds than the run expected.
    ///
    /// Must be consulted before indexing `decisions[round]`: a stopped
    /// host has no entry for the later rounds.
    pub fn was_stopped_early(&mut self, host: HostId, decisions: &[ValueSet]) -> bool {
        let stopped = decisions.len() < self.expected_rounds;
        if stopped && self.notified.insert(host) {
            info!(
                "host {} decided {} of {} agreements",
                host,
                decisions.len(),
                self.expected_rounds
            );
            println!("Host {host} was stopped early");
        }
        stopped
    }

    /// The hosts flagged (and announced) so far.
    pub fn flagged(&self) -> &BTreeSet<HostId> {
        &self.notified
    }

    pub fn into_flagged(self) -> BTreeSet<HostId> {
        self.notified
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_trace_is_flagged() {
        let mut tracker = EarlyStopTracker::new(3);
        let decisions = vec![ValueSet::new(), ValueSet::new()];
        assert!(tracker.was_stopped_early(1, &decisions));
        assert_eq!(tracker.flagged(), &BTreeSet::from_iter([1]));
    }

    #[test]
    fn test_full_trace_is_not_flagged() {
        let mut tracker = EarlyStopTracker::new(2);
        let decisions = vec![ValueSet::new(), ValueSet::new()];
        assert!(!tracker.was_stopped_early(1, &decisions));
        assert!(tracker.flagged().is_empty());
    }

    #[test]
    fn test_host_is_recorded_once_but_answered_every_time() {
        let mut tracker = EarlyStopTracker::new(5);
        let decisions = vec![ValueSet::new()];
        for _ in 0..4 {
            assert!(tracker.was_stopped_early(2, &decisions));
        }
        assert_eq!(tracker.flagged().len(), 1);
    }
}
