use std::collections::BTreeMap;

use crate::{HostId, Round, Trace, ValueSet, Violation};

/// Everything needed to check one agreement round.
///
/// The all-proposals union is rebuilt from every host's proposal trace,
/// whether or not that host completed the run: proposals are input
/// configuration and exist for every round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundContext {
    round: Round,
    proposed_union: ValueSet,
}

impl RoundContext {
    pub fn new(round: Round, proposals: &BTreeMap<HostId, Trace>) -> Self {
        let proposed_union = ValueSet::from_iter(
            proposals
                .values()
                .flat_map(|trace| trace.get(round))
                .flatten()
                .copied(),
        );
        Self {
            round,
            proposed_union,
        }
    }

    pub fn round(&self) -> Round {
        self.round
    }

    /// The union of every host's proposal for this round.
    pub fn proposed_union(&self) -> &ValueSet {
        &self.proposed_union
    }

    /// Validity 1: everything the host proposed, it must have decided.
    pub fn check_validity1(
        &self,
        host: HostId,
        proposal: &ValueSet,
        decided: &ValueSet,
    ) -> Option<Violation> {
        if proposal.is_subset(decided) {
            None
        } else {
            Some(Violation::Validity1 {
                host,
                round: self.round,
                missing: proposal.difference(decided).copied().collect(),
            })
        }
    }

    /// Validity 2: everything the host decided, somebody must have proposed.
    pub fn check_validity2(&self, host: HostId, decided: &ValueSet) -> Option<Violation> {
        if decided.is_subset(&self.proposed_union) {
            None
        } else {
            Some(Violation::Validity2 {
                host,
                round: self.round,
                unproposed: decided.difference(&self.proposed_union).copied().collect(),
            })
        }
    }

    /// Consistency: two decisions for the same round sit on one chain of
    /// the lattice, so one must include the other.
    pub fn check_consistency(
        &self,
        (h1, d1): (HostId, &ValueSet),
        (h2, d2): (HostId, &ValueSet),
    ) -> Option<Violation> {
        if d1.is_subset(d2) || d2.is_subset(d1) {
            None
        } else {
            Some(Violation::Consistency {
                round: self.round,
                hosts: (h1, h2),
            })
        }
    }
}
