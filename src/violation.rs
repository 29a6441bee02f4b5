use std::collections::BTreeSet;
use std::fmt::Display;

use serde::Serialize;

use crate::{HostId, Round, ValueSet};

/// A safety property broken by the recorded run.
///
/// Each variant carries enough to locate the violation without re-running
/// the validator: the property, the agreement round, the host or pair of
/// hosts, and the offending values where there are any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Violation {
    /// The host never decided some of the values it proposed.
    Validity1 {
        host: HostId,
        round: Round,
        missing: ValueSet,
    },
    /// The host decided values that no host proposed.
    Validity2 {
        host: HostId,
        round: Round,
        unproposed: ValueSet,
    },
    /// Two hosts decided sets that are not ordered by inclusion.
    Consistency { round: Round, hosts: (HostId, HostId) },
}

impl Violation {
    pub fn round(&self) -> Round {
        match self {
            Violation::Validity1 { round, .. }
            | Violation::Validity2 { round, .. }
            | Violation::Consistency { round, .. } => *round,
        }
    }

    pub fn hosts(&self) -> BTreeSet<HostId> {
        match self {
            Violation::Validity1 { host, .. } | Violation::Validity2 { host, .. } => {
                BTreeSet::from_iter([*host])
            }
            Violation::Consistency { hosts: (a, b), .. } => BTreeSet::from_iter([*a, *b]),
        }
    }
}

impl Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Violation::Validity1 {
                host,
                round,
                missing,
            } => write!(
                f,
                "Validity 1 violated for host {host} at agreement {round}: proposed values {missing:?} were never decided"
            ),
            Violation::Validity2 {
                host,
                round,
                unproposed,
            } => write!(
                f,
                "Validity 2 violated for host {host} at agreement {round}: decided values {unproposed:?} were proposed by nobody"
            ),
            Violation::Consistency {
                round,
                hosts: (a, b),
            } => write!(
                f,
                "Consistency violated at agreement {round}: hosts {a} and {b} decided incomparable sets"
            ),
        }
    }
}
